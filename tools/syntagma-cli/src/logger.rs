use log::{LevelFilter, Log, Metadata, Record};

/// Writes log records to stderr so stdout only carries results.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the stderr logger. `SetLoggerError` only implements
/// `std::error::Error` with log's `std` feature, so it is converted by hand.
pub fn init(verbosity: u8) -> anyhow::Result<()> {
    log::set_logger(&LOGGER).map_err(|err| anyhow::anyhow!("failed to install the logger: {}", err))?;
    log::set_max_level(level_for(verbosity));
    Ok(())
}
