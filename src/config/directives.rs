//! Top-level keys of a config document that change how wre-commit runs it

use regex::Regex;
use std::sync::LazyLock;

/// Comment key naming the image to run pre-commit in
pub const DOCKER_IMAGE_KEY: &str = "### wre-commit-docker-image";

const FAIL_FAST_KEY: &str = "fail_fast";

/// `key: value`, the value stopping at the first `#`
static KEY_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^:]+):([^#]+)").expect("valid key regex"));

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directives {
    /// Run pre-commit inside this image instead of locally
    pub docker_image: Option<String>,

    /// pre-commit stops on the first failing hook; we stop on the first failing config
    pub fail_fast: bool,
}

impl Directives {
    pub fn parse(content: &str) -> Self {
        let mut directives = Self::default();

        for line in content.lines() {
            let Some(captures) = KEY_LINE.captures(line) else {
                continue;
            };
            let value = captures[2].trim();
            match &captures[1] {
                DOCKER_IMAGE_KEY => {
                    directives.docker_image = Some(value.to_string()).filter(|v| !v.is_empty());
                }
                FAIL_FAST_KEY if value == "true" => directives.fail_fast = true,
                _ => {}
            }
        }

        directives
    }
}
