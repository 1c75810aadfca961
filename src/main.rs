//! CLI entry point for wave function collapse tile map generation

use clap::Parser;
use wavetile::io::cli::{Cli, Generator, failure_message};

// Failures are reported on stdout and the process still exits normally
#[allow(clippy::print_stdout)]
fn main() {
    let cli = Cli::parse();
    match Generator::new(cli).run() {
        Ok(report) => {
            if let Some(text) = report.grid_text {
                print!("{text}");
            }
            println!("Success");
        }
        Err(error) => println!("{}", failure_message(&error)),
    }
}
