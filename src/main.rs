use anyhow::Result;
use clap::Parser;
use spellfix::cli::{output, ConsoleResolver};
use spellfix::{document, Config, Corrector, SpellChecker};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "spellfix")]
#[command(version, long_about = None)]
#[command(about = "Interactively correct misspelled words in a text file")]
struct Cli {
    /// Input file name
    #[arg(short, long)]
    file: PathBuf,

    /// Output file name
    #[arg(short, long)]
    output: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let text = document::read(&cli.file)?;

    let config = Config::load()?;
    let checker = SpellChecker::new(&config)?;

    let colored = io::stdout().is_terminal();
    let mut resolver = ConsoleResolver::new(io::stdin().lock(), io::stdout(), colored);
    let correction = Corrector::new(&checker).correct(&text, &mut resolver)?;

    // Only touch the output once every token has been resolved
    document::write(&cli.output, &correction.text())?;
    output::print_saved(&cli.output, colored);

    Ok(())
}
