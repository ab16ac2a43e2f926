use clap::Parser;
use log::{error, info};
use std::process;
use tagbrowser_core::cli::report::SpecimenReport;
use tagbrowser_core::cli::{log_level, Cli, OutputFormat};
use tagbrowser_core::decode::load_series_instances;
use tagbrowser_core::specimen::specimen_descriptions;
use tagbrowser_core::{Series, TagBrowser, TextReport};

fn main() {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose);

    info!("Loading {} file(s)", cli.files.len());
    let instances = match load_series_instances(&cli.files) {
        Ok(instances) => instances,
        Err(e) => {
            error!("Failed to load input: {}", e);
            eprintln!("Error: Failed to load input: {}", e);
            process::exit(1);
        }
    };

    let series = Series::from_instances("input", instances);
    info!(
        "Series {} with {} instance(s)",
        series.label(),
        series.instances.len()
    );

    let node = match series.instance(cli.instance) {
        Ok(node) => node,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if cli.specimens {
        let specimens = specimen_descriptions(node, cli.show_stain);
        match cli.format {
            OutputFormat::Text => print!("{}", SpecimenReport::new(&specimens)),
            OutputFormat::Json => print_json(&specimens),
        }
        return;
    }

    let browser = TagBrowser::standard().with_options(cli.browser_options());
    info!("Sort order: {}", browser.options().sort_order);
    let rows = browser.rows(node);

    match cli.format {
        OutputFormat::Text => print!("{}", TextReport::new(&rows)),
        OutputFormat::Json => print_json(&rows),
    }
}

fn setup_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = log_level(verbose, std::env::var_os("RUST_LOG").is_some()) {
        builder.filter_level(level);
    }
    builder.init();
}

#[cfg(feature = "json")]
fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!("Failed to serialize to JSON: {}", e);
            eprintln!("Error: Failed to serialize to JSON: {}", e);
            process::exit(1);
        }
    }
}

#[cfg(not(feature = "json"))]
fn print_json<T: ?Sized>(_value: &T) {
    eprintln!("Error: JSON output requires the 'json' feature");
    eprintln!("Rebuild with: cargo build --features json");
    process::exit(1);
}
