use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

mod dictionary;
mod words;

/// Parses inputs for benchmark formats
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Webster dictionary. The dictionary can be downloaded here: https://github.com/adambom/dictionary
    #[arg(long = "webster_dictionary", value_name = "PATH")]
    webster_dictionary: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .compact()
        .without_time()
        .with_ansi(std::io::stdin().is_terminal())
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let dictionary = dictionary::read_dictionary(&cli.webster_dictionary)?;
    let path = words::words_path();
    let n = words::write_words_file(&path, &dictionary)?;
    eprintln!("{}: Wrote {} words.", path.display(), n);
    Ok(())
}
