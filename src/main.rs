use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use infra_init::installer::{self, InstallOptions, Outcome};

#[derive(Parser)]
#[command(name = "infra-init")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Bootstrap the AI infrastructure project layout", long_about = None)]
struct Cli {
    /// Skip confirmation prompts
    #[arg(short = 'y', long)]
    yes: bool,

    /// Target directory (defaults to the current directory)
    #[arg(long)]
    dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let root = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let outcome = installer::execute(&InstallOptions {
        root,
        assume_yes: cli.yes,
    })?;

    if outcome == Outcome::Cancelled {
        println!("Installation cancelled.");
        std::process::exit(1);
    }

    Ok(())
}
