use std::{
    fs::{self, File},
    io::BufWriter,
    path::PathBuf,
    process::exit,
};

use anyhow::Context as _;
use clap::Parser;
use jff2tcdf::jff;

/// Convert a JFLAP automaton file to the tcdf format read by the ToyCompile
/// lexer.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// The `.jff` file exported by JFLAP.
    input: PathBuf,
    /// Where to write the tcdf output. Truncated if it already exists.
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let Args { input, output } = Args::parse();

    let text = fs::read_to_string(&input)
        .with_context(|| format!("error reading {}", input.display()))?;
    let document = match jff::parse(&text) {
        Ok(document) => document,
        Err(error) => {
            // An unloadable document is the one fatal anomaly, with its own
            // exit code. Everything later degrades to fewer output records.
            eprintln!("failed to parse jff file: {}", input.display());
            eprintln!("{}", error);
            exit(2);
        }
    };

    if output.exists() {
        eprintln!("{} already exists, truncating", output.display());
    }
    let file = File::create(&output)
        .with_context(|| format!("error creating {}", output.display()))?;
    let mut out = BufWriter::new(file);
    let warnings = jff2tcdf::write_tcdf(&document, &mut out)
        .with_context(|| format!("error writing {}", output.display()))?;
    for warning in &warnings {
        eprintln!("{}", warning);
    }

    println!("conversion done.");
    Ok(())
}
