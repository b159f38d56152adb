use std::{fs, path::PathBuf};

use clap::Parser;
use normal::Session;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// File extension tried when the given script path does not exist.
const SCRIPT_EXTENSION: &str = "normal";

/// normal runs line-oriented scripts of declarations, conditionals and
/// arithmetic, printing every result and diagnostic as it goes.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat CONTENTS as script text instead of a file path.
    #[arg(short, long)]
    inline: bool,

    /// Prefix every printed line with the number of the line that produced
    /// it.
    #[arg(short, long)]
    line_numbers: bool,

    /// The script to run. `name` also finds `name.normal`.
    contents: String,
}

fn main() {
    init_tracing();

    let args = Args::parse();

    let script = if args.inline {
        args.contents
    } else {
        let path = resolve_script_path(&args.contents);
        fs::read_to_string(&path).unwrap_or_else(|e| {
                                     eprintln!("Failed to read the script '{}': {e}. Perhaps this file does not exist?",
                                               path.display());
                                     std::process::exit(1);
                                 })
    };

    let mut session = Session::new();
    for line in session.run_script(&script) {
        if let Some(output) = line.output() {
            if args.line_numbers {
                println!("{:>4}: {output}", line.number);
            } else {
                println!("{output}");
            }
        }
    }
}

/// Uses `name` as given when it exists, otherwise `name.normal` when `name`
/// has no extension of its own.
fn resolve_script_path(name: &str) -> PathBuf {
    let path = PathBuf::from(name);
    if path.exists() || path.extension().is_some() {
        return path;
    }
    path.with_extension(SCRIPT_EXTENSION)
}

/// Installs a stderr subscriber, but only when `RUST_LOG` is set.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}
