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

use crate::assembler::symbol_table::{SymbolTable, get_symbol};
use crate::ast::Operand;
use crate::errors::AssemblyError;

/// Resolves a branch or jump target into an absolute address.
pub fn resolve_target(
    op: &Operand,
    symbol_table: &SymbolTable,
    line_num: usize,
) -> Result<u32, AssemblyError> {
    match op {
        Operand::Immediate(value) => Ok(*value as u32),
        Operand::Label(name) => Ok(get_symbol(symbol_table, name, line_num)?.address),
        _ => Err(AssemblyError::BadOperand {
            line: line_num,
            reason: "Expected an address or a label.".to_string(),
        }),
    }
}

// Word offset relative to the instruction after the branch, truncated to
// 16 bits like the hardware field.
pub fn branch_offset(target: u32, current_address: u32) -> u16 {
    let offset = target.wrapping_sub(current_address.wrapping_add(4)) as i32 / 4;
    (offset as u32 & 0xFFFF) as u16
}

// Low 16 bits of a 32-bit immediate operand.
pub fn imm16(value: i64) -> u16 {
    (value as u32 & 0xFFFF) as u16
}
