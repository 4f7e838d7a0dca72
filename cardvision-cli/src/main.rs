use anyhow::{Context, Result, bail};
use cardvision_export::{ExportFormat, to_json};
use cardvision_ingest::{Extractor, detect, load_text};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

mod config;
mod dashboard;
mod logging;
mod report;
mod session;
mod state;

use config::Config;
use logging::LogTarget;
use session::Session;

#[derive(Parser, Debug)]
#[command(
    name = "cardvision",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("CARDVISION_BUILD_SHA"), ")"),
    about = "Credit card statement analyzer for Indian issuers"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse statements and browse the results interactively
    Dashboard {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Start with the raw text pane open
        #[arg(long)]
        show_raw: bool,
    },

    /// Parse statements and print a report
    Parse {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Include the extracted raw text
        #[arg(long)]
        show_raw: bool,

        /// Print records as JSON instead of the report
        #[arg(long)]
        json: bool,
    },

    /// Parse statements and write them to a JSON or CSV file
    Export {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// json or csv (default from config)
        #[arg(long)]
        format: Option<ExportFormat>,

        /// Output file (default: timestamped file in the configured directory)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Print the detected issuer of a single statement
    Detect { file: PathBuf },

    /// Manage ~/.cardvision/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,

    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config()?;

    let target = match cli.command {
        Command::Dashboard { .. } => LogTarget::File(state::log_path()?),
        _ => LogTarget::Stderr,
    };
    logging::init_tracing(&cfg.log.filter, target)?;

    match cli.command {
        Command::Dashboard { files, show_raw } => {
            let mut session = process(&cfg, &files)?;
            session.show_raw_text = show_raw || cfg.dashboard.show_raw_text;
            let mut dash = dashboard::Dashboard::new(session, cfg.export.out_dir.clone());
            dashboard::run_dashboard(&mut dash)?;
        }

        Command::Parse {
            files,
            show_raw,
            json,
        } => {
            let session = process(&cfg, &files)?;
            for e in session.failures() {
                eprintln!("skipped: {e}");
            }
            if json {
                println!("{}", to_json(&session.records())?);
            } else {
                print!("{}", report::render_report(&session, show_raw));
            }
        }

        Command::Export {
            files,
            format,
            out,
        } => {
            let session = process(&cfg, &files)?;
            let format = format.unwrap_or(cfg.export.format);
            let now = chrono::Local::now().naive_local();
            let path = session.export(format, out.as_deref(), &cfg.export.out_dir, now)?;
            println!("Wrote {} records to {}", session.len(), path.display());
        }

        Command::Detect { file } => {
            let text = load_text(&file)?;
            let bank = detect(&text);
            println!("{}\t{}", bank.code(), bank.display_name());
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let s = toml::to_string_pretty(&cfg).context("serialize config")?;
                println!("# {}", config::config_path()?.display());
                print!("{s}");
            }
        },
    }

    Ok(())
}

fn process(cfg: &Config, files: &[PathBuf]) -> Result<Session> {
    if files.is_empty() {
        bail!("no statement files given");
    }
    let extractor = Extractor::new()?.with_sample_size(cfg.extract.sample_size);
    let mut session = Session::process(&extractor, files);
    info!(
        files = files.len(),
        parsed = session.len(),
        sample_size = extractor.sample_size(),
        "statements processed"
    );
    session.raw_preview_chars = cfg.dashboard.raw_text_preview_chars;
    Ok(session)
}
