use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use microblog::config::AppConfig;
use microblog::logging::{self, LogFormat};
use microblog::serve;
use microblog_db::Database;

#[derive(Parser, Debug)]
#[command(
    name = "microblog",
    about = "A minimal single-admin microblog over SQLite",
    version,
    author
)]
struct Cli {
    /// Path to the config file (default: ./microblog.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum, default_value = "pretty", global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to bind (overrides the config file)
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Create the database tables (drops any existing entries)
    InitDb,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_tracing("info", cli.log_format);

    let config = load_config(&cli)?;

    match cli.command {
        Commands::Serve { bind } => serve::run(config, bind).await,
        Commands::InitDb => {
            let db = Database::new(&config.database);
            db.init_schema()
                .with_context(|| format!("Failed to initialize {}", config.database.display()))?;
            println!("Initialized the database.");
            Ok(())
        }
    }
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    match &cli.config {
        // An explicit --config path must exist
        Some(path) => AppConfig::read_file(path),
        None => {
            let working_dir =
                std::env::current_dir().context("Failed to get current directory")?;
            AppConfig::load(&working_dir)
        }
    }
}
