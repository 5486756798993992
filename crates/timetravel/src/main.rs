use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use timetravel::summary::{self, describe_impact};
use timetravel::{DataDirectory, PromptChoices, ScriptedChoices, Session, init_logging};
use timetravel_core::ProjectionEngine;
use timetravel_core::model::Category;

#[derive(Parser, Debug)]
#[command(name = "timetravel")]
#[command(about = "A ten-year financial decision simulator")]
struct Args {
    /// Path to the data directory (default: ~/.timetravel/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Engine configuration file (default: <data-dir>/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the starting position and random events
    #[arg(short, long)]
    seed: Option<u64>,

    /// Where to write the JSON export (default: <data-dir>/exports/)
    #[arg(short, long)]
    export: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play interactively in the terminal
    Play,
    /// Play a YAML choice script
    Run {
        #[arg(long)]
        script: PathBuf,
    },
    /// Write the default configuration to <data-dir>/config.yaml
    Init,
    /// List the scenario catalog of the active configuration
    Catalog,
}

/// First and last simulated year of a validated engine
fn planned_years(engine: &ProjectionEngine) -> color_eyre::Result<(i32, i32)> {
    let config = engine.config();
    Ok((config.start_year, config.end_year()? - 1))
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = DataDirectory::new(args.data_dir.unwrap_or_else(DataDirectory::default_path));

    init_logging(data_dir.root(), &args.log_level)?;

    let config = data_dir
        .load_config(args.config.as_deref())
        .wrap_err("loading configuration")?;

    let command = args.command.unwrap_or(Command::Play);
    let report = match command {
        Command::Init => {
            let path = data_dir.save_config(&config)?;
            println!("Wrote {}", path.display());
            return Ok(());
        }
        Command::Catalog => {
            for category in Category::ALL {
                println!("{}", category.label());
                for option in config.catalog.options(category) {
                    println!(
                        "  {:<24} {} ({})",
                        option.id,
                        option.title,
                        describe_impact(&option.impact, config.impact_mode)
                    );
                }
            }
            return Ok(());
        }
        Command::Play => {
            let seed = args.seed.unwrap_or_else(rand::random);
            let mode = config.impact_mode;
            let engine = ProjectionEngine::new(config, seed)?;
            let (first_year, last_year) = planned_years(&engine)?;
            tracing::info!(seed, first_year, last_year, "starting interactive session");
            println!("Planning {first_year} through {last_year}");
            let prompt = PromptChoices::new(io::stdin().lock(), io::stdout(), mode);
            Session::new(engine, prompt).run()?
        }
        Command::Run { script } => {
            let seed = args.seed.unwrap_or_else(rand::random);
            let choices = data_dir.load_script(&script)?;
            let engine = ProjectionEngine::new(config, seed)?;
            let (first_year, last_year) = planned_years(&engine)?;
            tracing::info!(
                seed,
                first_year,
                last_year,
                script = %script.display(),
                "starting scripted session"
            );
            Session::new(engine, ScriptedChoices::new(choices))
                .run()
                .wrap_err_with(|| format!("running script {}", script.display()))?
        }
    };

    println!();
    print!("{}", summary::render(&report));

    let path = data_dir.export_report(&report, args.export.as_deref())?;
    println!();
    println!("Exported to {}", path.display());

    tracing::info!("Application shutting down");
    Ok(())
}
