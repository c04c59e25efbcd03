//! Request analyzer CLI.
//!
//! # Data Flow
//! ```text
//! --config FILE (optional) → AnalyzerConfig (defaults otherwise)
//!     → CLI overrides (format, log level, strict host)
//!     → RequestAnalyzer::from_config
//!     → URL lines from files or stdin → ingest_reader
//!     → analyzed_routes → output format → stdout
//!       (or the request tree as a flat JSON node list with --tree)
//! ```

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use request_analyzer::config::{
    apply_overrides, load_config, AnalyzerConfig, ConfigOverrides, HostPolicy, OutputFormat,
};
use request_analyzer::observability::{logging::init_logging, metrics::describe_metrics};
use request_analyzer::output::format_routes;
use request_analyzer::{IngestStats, RequestAnalyzer};

#[derive(Parser)]
#[command(name = "request-analyzer")]
#[command(about = "Infer route templates from concrete request URLs", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format (overrides the config file).
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Log level (overrides the config file; RUST_LOG wins over both).
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest URLs (one per line) and print the inferred routes
    Analyze {
        /// Input files; stdin is read when none are given
        inputs: Vec<PathBuf>,

        /// Stop at the first URL that cannot be ingested
        #[arg(long)]
        fail_fast: bool,

        /// Reject URLs whose host differs from the first one
        #[arg(long)]
        strict_host: bool,

        /// Print the request tree as JSON instead of routes
        #[arg(long)]
        tree: bool,
    },
    /// List the recognizers that would be registered
    Recognizers,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AnalyzerConfig::default(),
    };
    let strict_host = matches!(
        cli.command,
        Commands::Analyze {
            strict_host: true,
            ..
        }
    );
    let config = apply_overrides(
        config,
        ConfigOverrides {
            format: cli.format,
            log_level: cli.log_level,
            host_policy: strict_host.then_some(HostPolicy::Strict),
        },
    )?;

    init_logging(&config.observability);
    describe_metrics();

    match cli.command {
        Commands::Analyze {
            inputs,
            fail_fast,
            tree,
            ..
        } => analyze(&config, &inputs, fail_fast, tree)?,
        Commands::Recognizers => {
            let analyzer = RequestAnalyzer::from_config(&config)?;
            let mut stdout = io::stdout().lock();
            for recognizer in analyzer.recognizers() {
                writeln!(stdout, "{}\t{}", recognizer.name(), recognizer.placeholder())?;
            }
        }
    }

    Ok(())
}

fn analyze(
    config: &AnalyzerConfig,
    inputs: &[PathBuf],
    fail_fast: bool,
    dump_tree: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut analyzer = RequestAnalyzer::from_config(config)?;

    tracing::info!(
        recognizers = analyzer.recognizers().len(),
        host_policy = ?config.host_policy,
        inputs = inputs.len(),
        "Analyzer ready"
    );

    let mut stats = IngestStats::default();
    if inputs.is_empty() {
        stats += analyzer.ingest_reader(io::stdin().lock(), "<stdin>", fail_fast)?;
    } else {
        for path in inputs {
            let reader = BufReader::new(File::open(path)?);
            stats += analyzer.ingest_reader(reader, &path.display().to_string(), fail_fast)?;
        }
    }

    let mut stdout = io::stdout().lock();

    if dump_tree {
        let nodes = analyzer.tree().node_count();
        tracing::info!(
            ingested = stats.ingested,
            skipped = stats.skipped,
            nodes,
            "Analysis complete"
        );
        let flat = analyzer.tree().root().map(|root| root.flatten()).unwrap_or_default();
        serde_json::to_writer_pretty(&mut stdout, &flat)?;
        writeln!(stdout)?;
        return Ok(());
    }

    let routes = analyzer.analyzed_routes();
    tracing::info!(
        ingested = stats.ingested,
        skipped = stats.skipped,
        routes = routes.len(),
        "Analysis complete"
    );

    let rendered = format_routes(&routes, config.output.format)?;
    stdout.write_all(rendered.as_bytes())?;
    if config.output.format != OutputFormat::Text {
        writeln!(stdout)?;
    }
    Ok(())
}
