use clap::Parser;
use std::fs;
use std::io::{self, Read};
use woql_unparse::cli::{self, CliError, RenderOptions};

#[derive(Parser)]
#[command(name = "woql-unparse")]
#[command(about = "Render a JSON-encoded WOQL query tree as fluent WOQL.js or WOQLpy builder source")]
#[command(version)]
struct Cli {
    /// Query tree JSON (reads from stdin if not provided)
    #[arg(short, long)]
    input: Option<String>,

    /// Read the query tree from a file instead
    #[arg(short, long, conflicts_with = "input")]
    file: Option<String>,

    /// Target dialect: "js" or "python"
    #[arg(short, long, default_value = "js")]
    dialect: String,

    /// Path to a JSON vocabulary file (alias -> full identifier)
    #[arg(long)]
    vocab: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let input = match (cli.input, cli.file) {
        (Some(s), _) => s,
        (None, Some(path)) => fs::read_to_string(path).map_err(CliError::Io)?,
        (None, None) if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(CliError::Io)?;
            buffer
        }
        (None, None) => return Err(CliError::NoInput),
    };

    let vocab = match cli.vocab {
        Some(path) => Some(fs::read_to_string(path).map_err(CliError::Io)?),
        None => None,
    };

    let options = RenderOptions {
        input,
        dialect: cli.dialect,
        vocab,
    };

    println!("{}", cli::execute_render(&options)?);
    Ok(())
}
