use tracing::Instrument;
use wre_commit::cli::{self, Invocation};

#[tokio::main]
async fn main() {
    cli::setup_logging();
    let invocation = Invocation::from_env();

    let exit_code = async {
        match cli::run(invocation).await {
            Ok(code) => code,
            Err(err) => {
                tracing::error!("Error: {err:#}");
                1
            }
        }
    }
    .instrument(tracing::info_span!("wre-commit"))
    .await;

    std::process::exit(exit_code);
}
