//! learntrack CLI — the interactive learning progress tracker.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use learntrack_core::catalog::Catalog;
use learntrack_core::config::CatalogConfig;

mod commands;
mod repl;
mod validate;

#[derive(Parser)]
#[command(name = "learntrack", version, about = "Interactive learning progress tracker")]
struct Cli {
    /// TOML course catalog overriding the built-in course set
    #[arg(long)]
    courses: Option<PathBuf>,

    /// Additional tracing filter directive (e.g. "learntrack=debug")
    #[arg(long)]
    log: Option<String>,
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = match &cli.courses {
        Some(path) => CatalogConfig::load(path)?,
        None => CatalogConfig::default(),
    };
    let mut catalog = Catalog::new(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(&mut catalog, &mut stdin.lock(), &mut stdout.lock())
}

fn main() {
    let cli = Cli::parse();

    let mut filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("learntrack=warn".parse().unwrap());
    if let Some(directive) = &cli.log {
        match directive.parse() {
            Ok(directive) => filter = filter.add_directive(directive),
            Err(e) => {
                eprintln!("Error: invalid --log directive '{directive}': {e}");
                process::exit(1);
            }
        }
    }

    // Interactive output owns stdout, so diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
