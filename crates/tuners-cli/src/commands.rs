//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::{output_cost_table, output_report};
use std::path::PathBuf;
use tuners_app::config::Config;
use tuners_app::input::{load_payload, resolve_source};
use tuners_app::PredictionService;
use tuners_types::{OutputFormat, Result};

/// Execute CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Predict { file, url } => {
            let config = Config::load()?;
            let output_format = cli.format.unwrap_or(config.output_format);
            cmd_predict(&config, file, url, output_format).await
        }

        Commands::Costs => {
            let config = Config::load_file()?;
            output_cost_table(cli.format.unwrap_or(config.output_format))
        }

        Commands::Config {
            show,
            set_prediction_key,
            set_endpoint_url,
            set_endpoint_file,
            set_output,
            set_timeout,
            reset,
        } => cmd_config(
            show,
            set_prediction_key,
            set_endpoint_url,
            set_endpoint_file,
            set_output,
            set_timeout,
            reset,
        ),
    }
}

async fn cmd_predict(
    config: &Config,
    file: Option<PathBuf>,
    url: Option<String>,
    output_format: OutputFormat,
) -> Result<()> {
    // Input problems are reported before the endpoint settings are checked
    let source = resolve_source(file, url.as_deref())?;
    let payload = load_payload(&source)?;
    let service = PredictionService::from_config(config)?;

    let report = service.predict_payload(&payload).await?;
    output_report(output_format, &report)
}

fn cmd_config(
    show: bool,
    set_prediction_key: Option<String>,
    set_endpoint_url: Option<String>,
    set_endpoint_file: Option<String>,
    set_output: Option<OutputFormat>,
    set_timeout: Option<u64>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    // File values only: environment overrides must not be persisted
    let mut config = Config::load_file()?;
    let mut modified = false;

    if let Some(key) = set_prediction_key {
        config.prediction_key = Some(key);
        modified = true;
    }

    if let Some(url) = set_endpoint_url {
        config.endpoint_url = Some(url);
        modified = true;
    }

    if let Some(url) = set_endpoint_file {
        config.endpoint_file = Some(url);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(secs) = set_timeout {
        config.request_timeout_secs = (secs > 0).then_some(secs);
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
