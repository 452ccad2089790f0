//! Logging to stderr, so that stdout carries only query results.

use anyhow::Context as _;
use log::Log as _;

/// A [`clap::Args`] struct for options controlling log output to stderr.
#[derive(Clone, Debug, Default, Eq, PartialEq, clap::Args)]
#[expect(clippy::module_name_repetitions)]
pub struct LoggingArgs {
    /// Additional logging to stderr.
    #[arg(long = "verbose", short = 'v')]
    pub verbose: bool,

    /// Remove timestamps from logs so that they are closer to deterministic.
    ///
    /// This option is intended for internal tests only.
    #[arg(long = "simplify-log-format", hide = true)]
    pub simplify_log_format: bool,
}

impl LoggingArgs {
    /// The most detailed level these options ask to see.
    pub fn max_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Info
        }
    }

    fn simplelog_config(&self) -> simplelog::Config {
        use log::LevelFilter::{Error, Off};

        // Note: This has no target filters because `RegionLogger` calls
        // `util::log::standard_filter` to do it.
        simplelog::ConfigBuilder::new()
            .set_target_level(Off)
            .set_location_level(Off)
            .set_time_level(if self.simplify_log_format { Off } else { Error })
            .build()
    }
}

/// Install a [`log`] global logger based on user-provided `options`.
///
/// Fails if a logger was already installed.
pub fn install(options: &LoggingArgs) -> Result<(), anyhow::Error> {
    let stderr_logger = *simplelog::WriteLogger::new(
        options.max_level(),
        options.simplelog_config(),
        std::io::stderr(),
    );
    let max_level = simplelog::SharedLogger::level(&stderr_logger);

    log::set_boxed_logger(Box::new(RegionLogger { stderr_logger }))
        .context("failed to initialize logging")?;
    log::set_max_level(max_level);

    log::trace!("logging installed at level {max_level}");
    Ok(())
}

/// [`log::Log`] implementation that [`install()`] registers globally.
struct RegionLogger {
    stderr_logger: simplelog::WriteLogger<std::io::Stderr>,
}

impl log::Log for RegionLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        lattice_region::util::log::standard_filter(metadata) && self.stderr_logger.enabled(metadata)
    }

    fn log(&self, record: &log::Record<'_>) {
        if !lattice_region::util::log::standard_filter(record.metadata()) {
            return;
        }
        self.stderr_logger.log(record);
    }

    fn flush(&self) {
        self.stderr_logger.flush();
    }
}
