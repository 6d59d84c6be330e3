use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};

/// Start the stderr logger. `level` is a flexi_logger spec such as `info` or
/// `warn, skymap::controller=debug`; `RUST_LOG` takes precedence when set.
/// Keep the returned handle alive for the lifetime of the program.
pub fn setup_logging(level: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(level)?
        .log_to_stderr()
        .format(flexi_logger::detailed_format)
        .start()
}
