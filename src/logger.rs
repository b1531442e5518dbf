use anyhow::Result;
use log::LevelFilter;
use simple_logger::SimpleLogger;

pub fn init(level: LevelFilter) -> Result<()> {
    SimpleLogger::new()
        .with_level(level)
        .with_module_level("hyper", LevelFilter::Warn)
        .with_module_level("reqwest", LevelFilter::Warn)
        .init()?;

    Ok(())
}
