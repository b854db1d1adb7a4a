/*
Copyright 2025 Connor Nolan

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

use anyhow::{Context, Result};
use clap::Parser as clap_parser;
use mipsasm::assemble;
use std::fs;
use std::path::PathBuf;

#[derive(clap_parser)]
#[clap(version = "1.0.0", author = "Connor Nolan")]
struct Opts {
    /// Input assembly source file
    input: PathBuf,
    /// Output image file (defaults to output.bin)
    #[clap(value_name = "OUTPUT")]
    positional_output: Option<PathBuf>,
    /// Output image file; takes precedence over the positional form
    #[clap(short, long)]
    output: Option<PathBuf>,
    /// Print symbol and section information while assembling
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let opts: Opts = Opts::parse();

    let output = opts
        .output
        .or(opts.positional_output)
        .unwrap_or_else(|| PathBuf::from("output.bin"));

    let source = fs::read_to_string(&opts.input)
        .with_context(|| format!("Failed to read input file: {}", opts.input.display()))?;

    let image = assemble(&source, opts.verbose)?;

    fs::write(&output, &image)
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;

    println!(
        "Successfully assembled {} to {}",
        opts.input.display(),
        output.display()
    );

    if opts.verbose {
        println!(
            "Output size: {} bytes ({} words)",
            image.len(),
            image.len() / 4
        );
    }

    Ok(())
}
