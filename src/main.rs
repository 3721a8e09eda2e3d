use checker_demo::utils::{logger, validation::Validate};
use checker_demo::{CliConfig, ConsoleSink, DemoEngine, InspectEngine};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting checker-demo CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        return Err(e.into());
    }

    if let Some(path) = config.class_file.clone() {
        let engine = InspectEngine::new(path);
        engine.run(ConsoleSink::new())?;
        tracing::info!("Class file summary completed");
        return Ok(());
    }

    let engine = DemoEngine::new(config);
    engine.run(ConsoleSink::new())?;

    tracing::info!("Demo sequence completed");
    Ok(())
}
