//! The generation flow: load the spec, generate the testbench, write it out.

use std::fs;
use std::path::Path;

use crate::Cli;

/// Runs the generator end to end.
///
/// Loads and validates the JSON test-case file, generates the testbench
/// text, and writes it to the output path. Nothing is written on failure.
/// Returns exit code 0 on success.
pub fn run(args: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let spec = vbench_spec::load_spec(Path::new(&args.test_case_file))?;
    let testbench = vbench_codegen::generate(&spec)?;

    fs::write(&args.output_file, &testbench.vhdl)?;

    if !args.quiet {
        println!("Writing testbench VHDL to {}", args.output_file);
        println!("Testbench entity is called '{}'", testbench.entity);
    }

    Ok(0)
}
