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

use crate::assembler::sections::Section;
use crate::errors::AssemblyError;
use std::collections::HashMap;

pub const MAX_LABELS: usize = 256;
pub const MAX_LABEL_LEN: usize = 64;

#[derive(Debug, PartialEq)]
pub struct Symbol {
    pub address: u32,
    pub section: Section,
}

// The symbol table stores label names and their resolved absolute addresses.
pub type SymbolTable = HashMap<String, Symbol>;

pub fn get_symbol<'a>(
    symbol_table: &'a SymbolTable,
    name: &str,
    line_num: usize,
) -> Result<&'a Symbol, AssemblyError> {
    symbol_table
        .get(name)
        .ok_or_else(|| AssemblyError::UndefinedLabel {
            line: line_num,
            name: name.to_string(),
        })
}

pub fn insert_symbol(
    symbol_table: &mut SymbolTable,
    name: &str,
    symbol: Symbol,
    line_num: usize,
) -> Result<(), AssemblyError> {
    if name.len() > MAX_LABEL_LEN {
        return Err(AssemblyError::SemanticError {
            line: line_num,
            reason: format!("Label name longer than {} bytes: {}", MAX_LABEL_LEN, name),
        });
    }

    if symbol_table.contains_key(name) {
        return Err(AssemblyError::SemanticError {
            line: line_num,
            reason: format!("Duplicate label definition: {}", name),
        });
    }

    if symbol_table.len() >= MAX_LABELS {
        return Err(AssemblyError::CapacityExceeded {
            reason: format!("symbol table limited to {} labels", MAX_LABELS),
        });
    }

    symbol_table.insert(name.to_string(), symbol);
    Ok(())
}
