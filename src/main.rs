use std::io;
use std::path::PathBuf;

use clap::Parser;

use jokerate::config::Config;
use jokerate::logging::init_tracing;
use jokerate::ui::app::App;
use jokerate::{batch, ui};

/// Rate, add, edit and delete jokes in the terminal.
#[derive(Debug, Parser)]
#[command(name = "jokerate", version)]
struct Cli {
    /// Config file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write logs to this file (suffixed with timestamp and pid).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Read commands from stdin and print the final list as JSON.
    #[arg(long)]
    batch: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref());

    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    if cli.batch {
        let mut app = App::new(&config);
        let stdin = io::stdin();
        let stdout = io::stdout();
        batch::run(stdin.lock(), stdout.lock(), &mut app, |notification| {
            eprintln!("{}", notification);
        })?;
        return Ok(());
    }

    ui::runtime::run(&config)?;
    Ok(())
}
