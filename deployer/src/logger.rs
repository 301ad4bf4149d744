use std::path::Path;

use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

use crate::config::{defaults, DeployerConfig};

/// Install the global logger: colored stdout plus an optional plain log file
pub fn init(config: &DeployerConfig) -> Result<(), fern::InitError> {
    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Cyan)
        .trace(Color::Magenta);
    let disable_colors = config.disable_log_color;

    let stdout = fern::Dispatch::new()
        .format(move |out, message, record| {
            let level = if disable_colors {
                record.level().to_string()
            } else {
                colors.color(record.level()).to_string()
            };
            out.finish(format_args!(
                "[{}] [{}] [{}] {}",
                chrono::Local::now().format(defaults::DATETIME_FORMAT),
                level,
                record.target(),
                message
            ))
        })
        .level(config.log_level.into())
        .chain(std::io::stdout());

    let mut dispatch = fern::Dispatch::new().chain(stdout);

    if !config.disable_file_logging {
        std::fs::create_dir_all(&config.logs_path)?;
        let path = Path::new(&config.logs_path).join(&config.filename_log);
        let file = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{}] [{}] [{}] {}",
                    chrono::Local::now().format(defaults::DATETIME_FORMAT),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(config.file_log_level().into())
            .chain(fern::log_file(path)?);
        dispatch = dispatch.chain(file);
    }

    let max_level = LevelFilter::from(config.log_level).max(config.file_log_level().into());
    dispatch.level(max_level).apply()?;
    Ok(())
}
