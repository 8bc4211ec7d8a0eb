use clap::Parser;
use example_helper::utils::{logger, validation::Validate};
use example_helper::{
    CliConfig, HelperEngine, HelperError, HelperSettings, LocalStorage, PrefixProcessor,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Run failed: {} (Category: {:?})", e, e.category());
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(config: CliConfig) -> Result<(), HelperError> {
    config.validate()?;

    let settings = HelperSettings::load(config.config.as_deref())?;
    tracing::debug!("Settings: {:?}", settings);

    let processor = PrefixProcessor::from_settings(&settings);
    let engine = HelperEngine::new(LocalStorage::default(), config, processor);

    let stdout = std::io::stdout();
    let target = engine.run(&mut stdout.lock())?;
    tracing::debug!("Emitted result to {:?}", target);

    Ok(())
}
