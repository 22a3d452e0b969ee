mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use formcraft::FormcraftConfig;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "formcraft")]
#[command(version, about = "formcraft CLI - schema-driven forms", long_about = None)]
struct Cli {
    /// Path to formcraft.toml
    #[arg(short, long, global = true, default_value = "formcraft.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a schema and report problems
    Check {
        /// Schema JSON file
        schema: PathBuf,
    },

    /// Render a schema to an HTML form
    Render {
        /// Schema JSON file
        schema: PathBuf,

        /// Write HTML here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Fill a form with values from a JSON object and submit it
    Submit {
        /// Schema JSON file
        schema: PathBuf,

        /// JSON object mapping field ids to values
        values: PathBuf,
    },
}

fn init_logging(config: &FormcraftConfig) {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logging.level.clone());

    tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = FormcraftConfig::load(&cli.config)?;
    init_logging(&config);

    match cli.command {
        Commands::Check { schema } => {
            commands::check::execute(&schema)?;
        }
        Commands::Render { schema, output } => {
            commands::render::execute(&schema, output.as_deref(), &config)?;
        }
        Commands::Submit { schema, values } => {
            let submitted = commands::submit::execute(&schema, &values, &config)?;
            if !submitted {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
