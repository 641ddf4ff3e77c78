//! `qgate` binary: inspect the gate catalog for a configured gate set.
//!
//! ```bash
//! qgate list
//! qgate --gate-set "Quest 2" toolbox
//! qgate --config profiles/quest3.toml manifest
//! ```

use clap::{Parser, Subcommand};
use qgate_catalog::config::CatalogConfig;
use qgate_catalog::registry::{self, Registry};
use qgate_catalog::toolbox;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "qgate", version, about = "Quantum gate catalog", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Gate set to load; overrides the config file and $QGATE_GATESET.
    #[arg(long, value_name = "NAME")]
    gate_set: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lists every registered gate id.
    List,
    /// Prints one gate and its matrix.
    Show {
        /// Serialized id of the gate.
        id: String,
        /// Control value for parametrized gates.
        #[arg(short, long, default_value_t = 0.0)]
        time: f64,
    },
    /// Prints the toolbox of the gate set.
    Toolbox,
    /// Prints a JSON summary of every registered gate.
    Manifest,
}

fn main() {
    let args = Args::parse();

    let log_level_filter = args
        .log_level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .unwrap_or(tracing_subscriber::filter::LevelFilter::WARN);

    tracing_subscriber::fmt()
        .with_max_level(log_level_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match args.config.as_deref() {
        Some(path) => match CatalogConfig::from_path(path) {
            Ok(config) => config,
            Err(e) => {
                error!("failed to load configuration: {e}");
                std::process::exit(1);
            }
        },
        None => CatalogConfig::default(),
    };
    let mut config = config.with_env_override();
    if let Some(name) = args.gate_set {
        config.gate_set = name;
    }

    let registry = match registry::install(&config) {
        Ok(registry) => registry,
        Err(e) => {
            error!("failed to build gate registry: {e}");
            std::process::exit(1);
        }
    };
    info!(title = %config.profile.title, "catalog ready");

    if let Err(e) = run(args.command, &config, registry) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(command: Command, config: &CatalogConfig, registry: &Registry) -> qgate_catalog::Result<()> {
    match command {
        Command::List => {
            for gate in registry.iter() {
                println!("{}\t{}\t{}", gate.serialized_id(), gate.qubit_span(), gate.name());
            }
        }
        Command::Show { id, time } => {
            let gate = registry
                .get(&id)
                .ok_or_else(|| qgate_catalog::CatalogError::UnknownGate(id.clone()))?;
            println!("{} ({})", gate.name(), gate.serialized_id());
            println!("symbol: {}", gate.symbol());
            println!("qubits: {}", gate.qubit_span());
            if !gate.short_doc().is_empty() {
                println!("{}", gate.short_doc());
            }
            if !gate.long_doc().is_empty() {
                println!("{}", gate.long_doc());
            }
            if gate.is_parametrized() {
                println!("matrix at t = {}:", time);
            }
            print!("{}", gate.matrix_at(time));
        }
        Command::Toolbox => {
            let rows = config.profile.toolbox_rows;
            println!("{}", config.profile.long_title);
            for group in toolbox::assemble(config.gate_set()?, registry)? {
                println!("[{}]", group.hint);
                for column in group.columns(rows) {
                    let cells: Vec<&str> = column
                        .iter()
                        .map(|slot| slot.as_ref().map_or("·", |g| g.symbol()))
                        .collect();
                    println!("  {}", cells.join("  "));
                }
            }
        }
        Command::Manifest => {
            println!("{}", serde_json::to_string_pretty(&registry.manifest())?);
        }
    }
    Ok(())
}
