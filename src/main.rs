use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use neon_ascendant::export::{self, OutputFormat};
use neon_ascendant::mission::{generate_run, MissionParams};
use neon_ascendant::{LoadError, LoreCatalog, MissionError};

#[derive(Parser, Debug)]
#[command(name = "neon_ascendant")]
#[command(about = "Generate Neon Ascendant mission briefs")]
struct Args {
    /// Number of mission briefs to generate (default: 3)
    #[arg(short, long, allow_hyphen_values = true)]
    count: Option<i64>,

    /// Random seed (uses a clock seed if not specified)
    #[arg(short, long, allow_hyphen_values = true)]
    seed: Option<i64>,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Independent streams to spread generation across
    #[arg(short, long)]
    workers: Option<usize>,

    /// Load lore content from a JSON file instead of the built-in catalog
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Load run parameters from a JSON file (flags override it)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the built-in catalog as JSON and exit
    #[arg(long)]
    dump_catalog: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid content in {path:?}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: LoadError,
    },
    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
    #[error("mission content is misconfigured: {0}")]
    Mission(#[from] MissionError),
}

fn init_tracing(verbose: bool) {
    let filter = if let Ok(env) = EnvFilter::try_from_default_env() {
        env
    } else if verbose {
        EnvFilter::new("neon_ascendant=info")
    } else {
        EnvFilter::new("neon_ascendant=warn")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn load_params(args: &Args) -> Result<MissionParams, CliError> {
    let mut params = match &args.config {
        Some(path) => {
            MissionParams::from_json_str(&read_file(path)?).map_err(|source| CliError::Load {
                path: path.clone(),
                source,
            })?
        }
        None => MissionParams::default(),
    };

    if let Some(count) = args.count {
        params.count = count;
    }
    if args.seed.is_some() {
        params.seed = args.seed;
    }
    if let Some(workers) = args.workers {
        params.workers = workers;
    }
    if let Some(format) = args.format {
        params.format = format;
    }
    Ok(params)
}

fn load_catalog(path: Option<&Path>) -> Result<LoreCatalog, CliError> {
    match path {
        Some(path) => {
            LoreCatalog::from_json_str(&read_file(path)?).map_err(|source| CliError::Load {
                path: path.to_path_buf(),
                source,
            })
        }
        None => Ok(LoreCatalog::reference()),
    }
}

fn run(args: Args) -> Result<(), CliError> {
    if args.dump_catalog {
        println!("{}", LoreCatalog::shared().to_json_string()?);
        return Ok(());
    }

    let params = load_params(&args)?;
    let catalog = load_catalog(args.catalog.as_deref())?;

    let run = generate_run(&catalog, &params)?;
    tracing::info!(
        seed = run.seed,
        workers = run.workers,
        briefs = run.briefs.len(),
        "generation complete"
    );

    let content = export::render(&run, params.format)?;
    match &args.output {
        Some(path) => {
            fs::write(path, content).map_err(|source| CliError::Write {
                path: path.clone(),
                source,
            })?;
            println!("Wrote {} briefs to {}", run.briefs.len(), path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
