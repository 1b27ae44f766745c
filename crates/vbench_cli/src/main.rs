//! vbench CLI — generates VHDL testbenches from JSON test-vector files.
//!
//! Usage: `vbench <test_case_file> <output_file>`. The test-case file is a
//! declarative JSON description of an entity's interface and its
//! stimulus/check vectors; the output is a complete, simulator-ready VHDL
//! testbench.

#![warn(missing_docs)]

mod generate;

use std::process;

use clap::Parser;

/// vbench — a VHDL testbench generator.
#[derive(Parser, Debug)]
#[command(name = "vbench", version, about = "VHDL testbench generator")]
pub struct Cli {
    /// The JSON file in which test cases are defined.
    pub test_case_file: String,

    /// The file to which the generated VHDL testbench will be written.
    pub output_file: String,

    /// Suppress the confirmation output.
    #[arg(short, long)]
    pub quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    match generate::run(&cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
