use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::error::Error;
use tracing::{info, warn};

mod app_metrics;
mod config;
mod json_writer;
mod message_filter;
mod router;
mod static_data_tracker;

use app_metrics::MetricsLogger;
use config::{Config, STDIO};
use router::AisRouter;

// ========== Logging Setup ==========

fn init_logging(log_config: &config::LogConfig) -> Result<(), Box<dyn Error>> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
    use tracing_appender::rolling;

    // Create log directory if it doesn't exist
    std::fs::create_dir_all(&log_config.directory)?;

    // Create daily rolling file appender
    let file_appender = rolling::daily(&log_config.directory, &log_config.file_prefix);

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_timer(fmt::time::OffsetTime::local_rfc_3339().unwrap_or_else(|_| fmt::time::OffsetTime::new(
            time::UtcOffset::UTC,
            time::format_description::well_known::Rfc3339,
        )));

    // Console logging goes to stderr, stdout may carry the JSON output
    let console_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_timer(fmt::time::OffsetTime::local_rfc_3339().unwrap_or_else(|_| fmt::time::OffsetTime::new(
            time::UtcOffset::UTC,
            time::format_description::well_known::Rfc3339,
        )));

    // RUST_LOG wins over the configured level
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&log_config.level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(())
}

fn open_input(path: &str) -> Result<Box<dyn BufRead>, Box<dyn Error>> {
    if path == STDIO {
        Ok(Box::new(BufReader::new(io::stdin())))
    } else {
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }
}

fn open_output(path: &str) -> Result<Box<dyn Write>, Box<dyn Error>> {
    if path == STDIO {
        Ok(Box::new(BufWriter::new(io::stdout())))
    } else {
        Ok(Box::new(BufWriter::new(File::create(path)?)))
    }
}

fn print_help() {
    println!("AIS Router");
    println!();
    println!("Reads !AIVDM/!AIVDO sentences and writes one JSON document per decoded message.");
    println!();
    println!("USAGE:");
    println!("    ais_router [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --config <path>              Configuration file (default: config.json)");
    println!("    --validate-config, --validate, -v    Validate configuration and exit");
    println!("    --help, -h                   Show this help message");
}

// ========== Main Application ==========

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        std::process::exit(0);
    }

    let validate_only = args
        .iter()
        .any(|a| a == "--validate-config" || a == "--validate" || a == "-v");

    let config_path = args
        .iter()
        .position(|a| a == "--config")
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
        .unwrap_or("config.json");

    // Load configuration
    let config = match Config::from_file(config_path) {
        Ok(cfg) => {
            if validate_only {
                println!("✓ Configuration validation successful");
                println!("  Input: {}", cfg.input);
                println!("  Output: {}", cfg.output);
                println!("  Message type filter: {} entries", cfg.filter.message_types.len());
                println!("  MMSI filter: {} entries", cfg.filter.user_ids.len());
                println!("  Metrics interval: {}s", cfg.metrics_interval_seconds);
                std::process::exit(0);
            }
            cfg
        }
        Err(e) => {
            if validate_only {
                eprintln!("✗ Configuration validation failed: {}", e);
                std::process::exit(1);
            }
            eprintln!("Warning: Could not load {}: {}", config_path, e);
            eprintln!("Using default configuration");
            Config::default()
        }
    };

    // Initialize logging
    init_logging(&config.logging)?;
    info!("AIS Router starting...");
    info!("Reading from {}, writing to {}", config.input, config.output);

    let input = open_input(&config.input)?;
    let output = open_output(&config.output)?;

    let mut metrics_logger = MetricsLogger::new(config.metrics_interval());
    let mut router = AisRouter::new(config, output);

    for line in input.lines() {
        match line {
            Ok(line) => router.process_line(&line),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                warn!("Skipping line that is not UTF-8: {}", e);
            }
            Err(e) => return Err(e.into()),
        }

        // Log metrics periodically
        metrics_logger.check_and_log(&mut router.metrics);
    }

    router.flush()?;
    router.metrics.log();
    let (written, write_errors) = router.output_stats();
    info!(
        "End of input, wrote {} messages ({} write errors), static data for {} stations ({} complete)",
        written,
        write_errors,
        router.tracker().len(),
        router.tracker().complete_count()
    );

    Ok(())
}
