use std::process::ExitCode;
use std::sync::Arc;
use trustfetch::core::ConfigProvider;
use trustfetch::utils::{logger, validation::Validate};
use trustfetch::{CliConfig, FetchEngine, LogReporter, TrustStoreBuilder};

#[tokio::main]
async fn main() -> ExitCode {
    let config = CliConfig::parse_args();

    let dispatch = match logger::init_cli_logger(config.verbose) {
        Ok(dispatch) => dispatch,
        Err(e) => {
            eprintln!("Error building logger: {}", e);
            return ExitCode::from(e.exit_code());
        }
    };

    tracing::debug!(?config, "starting trustfetch");

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, suggestion = e.recovery_suggestion(), "invalid arguments");
        return ExitCode::from(e.exit_code());
    }

    let trust = match TrustStoreBuilder::from_working_dir() {
        Ok(trust) => trust,
        Err(e) => {
            tracing::error!(
                error = %e,
                suggestion = e.recovery_suggestion(),
                "unable to resolve working directory"
            );
            return ExitCode::from(e.exit_code());
        }
    };

    let reporter = Arc::new(LogReporter::new(dispatch, config.quiet()));
    let engine = FetchEngine::new(config, reporter, trust);

    // The transport is released when `run` returns, whichever way it returns.
    match engine.run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => ExitCode::from(e.exit_code()),
    }
}
