use crate::utils::error::{FetchError, Result};
use tracing::Dispatch;
use tracing_subscriber::{fmt::MakeWriter, layer::SubscriberExt, EnvFilter};

#[derive(Debug, Clone, Copy, Default)]
pub struct LogOptions {
    pub verbose: bool,
    pub ansi: bool,
}

pub fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("trustfetch=debug,info")
    } else {
        EnvFilter::new("trustfetch=info")
    }
}

/// Builds a logging handle without installing it. Verbose mode is a compact
/// human-readable format; otherwise one JSON object per line.
pub fn build_dispatch<W>(options: LogOptions, filter: EnvFilter, writer: W) -> Dispatch
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(options.ansi)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    if options.verbose {
        Dispatch::new(
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer.compact()),
        )
    } else {
        Dispatch::new(
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer.json()),
        )
    }
}

/// Installs the CLI logger as the process default and returns a handle for
/// components that take their logger explicitly.
pub fn init_cli_logger(verbose: bool) -> Result<Dispatch> {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) => EnvFilter::try_new(directives).map_err(|e| FetchError::LoggerError {
            message: e.to_string(),
        })?,
        Err(_) => default_filter(verbose),
    };

    let options = LogOptions {
        verbose,
        ansi: verbose,
    };
    let dispatch = build_dispatch(options, filter, std::io::stderr);

    tracing::dispatcher::set_global_default(dispatch.clone()).map_err(|e| {
        FetchError::LoggerError {
            message: e.to_string(),
        }
    })?;

    Ok(dispatch)
}
