//! `toolbelt` — one binary, one subcommand per tool.
//!
//! Run `toolbelt help` for the list of tools.

use clap::Parser;
use toolbelt::cli::{run, Cli};

fn main() {
    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
