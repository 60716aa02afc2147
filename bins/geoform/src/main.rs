//! geoform host
//!
//! Stands in for the device: feeds one location fix and one submit press
//! through the form controller and prints what the user would see.

use anyhow::{Context, Result};
use clap::Parser;
use geoform_cli::output::Status;
use geoform_core::config::Config;
use geoform_core::error::exit_codes;
use geoform_form::events;
use geoform_form::{MemoryFields, MessageSink, SubmissionController, SubmissionSettings, SubmissionState};
use geoform_geo::{AddressCandidate, Coordinate, Geocoder, JsonFileGeocoder};
use geoform_telemetry::TelemetryConfig;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "geoform")]
#[command(about = "Pre-fill a contact form from a location and submit it")]
#[command(version)]
struct Cli {
    /// Latitude of the last known location
    #[arg(long, allow_hyphen_values = true, requires = "lon")]
    lat: Option<f64>,

    /// Longitude of the last known location
    #[arg(long, allow_hyphen_values = true, requires = "lat")]
    lon: Option<f64>,

    /// JSON array of address candidates answering every reverse-geocode
    #[arg(long)]
    candidates: Option<PathBuf>,

    /// First name field
    #[arg(long, default_value = "")]
    first: String,

    /// Last name field
    #[arg(long, default_value = "")]
    last: String,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress log output below errors
    #[arg(short, long)]
    quiet: bool,
}

/// Prints each message the way the device would toast it.
struct TerminalMessages;

impl MessageSink for TerminalMessages {
    fn show_message(&mut self, text: &str) {
        Status::info(text);
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(e) => {
            Status::error(&format!("{e:#}"));
            ExitCode::from(u8::try_from(exit_codes::FAILURE).unwrap_or(1))
        }
    }
}

async fn run(cli: Cli) -> Result<i32> {
    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            Status::error(&e.to_string());
            return Ok(exit_codes::CONFIG_ERROR);
        }
    };

    let mut telemetry = TelemetryConfig::from(&config.schema.logging).with_verbosity(cli.verbose);
    if cli.quiet {
        telemetry = telemetry.quiet();
    }
    geoform_telemetry::init_with_config(telemetry).context("Failed to initialise logging")?;

    if let Some(path) = &config.path {
        tracing::debug!(path = %path.display(), "Loaded configuration");
    }

    let fixture = cli.candidates.map(JsonFileGeocoder::new);
    let geocoder = move |at: Coordinate, max_results: usize| -> geoform_geo::Result<Vec<AddressCandidate>> {
        match &fixture {
            Some(geocoder) => geocoder.reverse_geocode(at, max_results),
            None => Ok(Vec::new()),
        }
    };

    let controller = SubmissionController::with_settings(
        geocoder,
        MemoryFields::with_names(&cli.first, &cli.last),
        TerminalMessages,
        SubmissionSettings::from(&config.schema),
    );

    let location = cli.lat.zip(cli.lon).map(Coordinate::from);

    let (tx, rx) = events::channel();
    tx.deliver_location(&location);
    tx.submit();
    drop(tx);

    let controller = events::run(controller, rx).await;

    Ok(match controller.state() {
        SubmissionState::Submitted => exit_codes::SUCCESS,
        SubmissionState::Idle => exit_codes::VALIDATION_ERROR,
    })
}
