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

pub mod assembler;
pub mod ast;
pub mod errors;
pub mod parser;

use anyhow::{Context, Result};
use errors::AssemblyError;

/// Largest accepted source text, in bytes.
pub const MAX_SOURCE_BYTES: usize = 8192;

/// Assembles big-endian MIPS I source text into a raw binary image.
///
/// The source is parsed once; pass 1 walks the parsed lines to place every
/// label, pass 2 walks them again to encode instructions and data. Both
/// passes share the same line list, so they see the same address trajectory.
pub fn assemble(source: &str, verbose: bool) -> Result<Vec<u8>> {
    if source.len() > MAX_SOURCE_BYTES {
        return Err(AssemblyError::CapacityExceeded {
            reason: format!("source limited to {} bytes", MAX_SOURCE_BYTES),
        }
        .into());
    }

    let lines = parser::parse_source(source).context("Failed during parsing stage")?;

    let symbol_table =
        assembler::build_symbol_table(&lines).context("Failed during assembler pass 1")?;

    if verbose {
        println!("Pass 1 complete: {} label(s)", symbol_table.len());
        let mut symbols: Vec<_> = symbol_table.iter().collect();
        symbols.sort_by_key(|(_, symbol)| symbol.address);
        for (name, symbol) in symbols {
            println!("  {:<24} 0x{:08X}  {}", name, symbol.address, symbol.section);
        }
    }

    let image =
        assembler::generate_image(&lines, &symbol_table).context("Failed during assembler pass 2")?;

    if verbose {
        println!("Pass 2 complete: {} byte(s) emitted", image.len());
    }

    Ok(image)
}
