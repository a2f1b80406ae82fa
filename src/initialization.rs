use std::env;
use log::info;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::config::{load_config, Config};
use crate::errors::HourcastInitError;
use crate::forecast_source::ForecastSource;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

/// Initializes and returns the configuration and a loaded ForecastSource
///
/// The configuration file path is taken from the first command line argument,
/// falling back to the HOURCAST_CONFIG environment variable and finally to
/// hourcast.toml in the working directory.
pub fn init() -> Result<(Config, ForecastSource), HourcastInitError> {
    let config_path = env::args().nth(1)
        .or_else(|| env::var("HOURCAST_CONFIG").ok())
        .unwrap_or_else(|| String::from("hourcast.toml"));

    let config = load_config(&config_path)?;
    setup_logging(&config)?;

    info!("hourcast version: {}", env!("CARGO_PKG_VERSION"));
    info!("using configuration from {}", config_path);

    let mut source = ForecastSource::new(&config.files.forecast_file);
    source.load()?;

    Ok((config, source))
}

/// Sets up logging to file and optionally to stdout
///
/// # Arguments
///
/// * 'config' - the loaded configuration
fn setup_logging(config: &Config) -> Result<(), HourcastInitError> {
    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(&config.general.log_path)?;

    let mut log_config = LogConfig::builder()
        .appender(Appender::builder().build("file", Box::new(file)));
    let mut root = Root::builder().appender("file");

    // Stdout logging garbles the dashboard while it is running and is meant
    // for troubleshooting startup problems
    if config.general.log_to_stdout {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();
        log_config = log_config.appender(Appender::builder().build("stdout", Box::new(stdout)));
        root = root.appender("stdout");
    }

    log4rs::init_config(log_config.build(root.build(config.general.log_level))?)?;

    Ok(())
}
