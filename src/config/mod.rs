//! Configuration for wre-commit
//!
//! Two kinds of configuration meet here: the wrapper's own [`Settings`]
//! (environment driven, loaded with figment) and the pre-commit config files
//! it dispatches, which are split into [`documents`] and scanned for
//! [`directives`].

pub mod core;
pub mod directives;
pub mod documents;

pub use self::core::{Context, ENV_PREFIX, Settings};
pub use directives::Directives;
pub use documents::{read_documents, split_documents};

/// Config files used when `--config` is not given
pub const DEFAULT_CONFIG_PATTERN: &str = ".pre-commit-config*.yaml";
