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

use crate::ast::{Operand, Register};
use crate::errors::AssemblyError;
use crate::parser::ast_builder::AstBuilder;
use crate::parser::ast_builder::operand_builders::*;
use crate::parser::ast_builder::utility_functions::*;
use anyhow::{Context, Result};

impl<'a> AstBuilder<'a> {
    // Helper to get the next operand
    pub fn pop_operand(&mut self) -> Result<Operand> {
        let pair = self
            .pairs
            .next()
            .ok_or_else(|| AssemblyError::BadOperand {
                line: self.line_number,
                reason: "Expected an operand, but found none.".to_string(),
            })?;
        build_operand(pair)
    }

    pub fn pop_optional_operand(&mut self) -> Result<Option<Operand>> {
        match self.pairs.next() {
            Some(pair) => Ok(Some(build_operand(pair)?)),
            None => Ok(None),
        }
    }

    // Helper to get the next raw number (directive arguments)
    pub fn pop_number(&mut self) -> Result<i64> {
        let pair = self
            .pairs
            .next()
            .ok_or_else(|| AssemblyError::BadOperand {
                line: self.line_number,
                reason: "Expected a numeric argument, but found none.".to_string(),
            })?;
        parse_number(pair.as_str(), self.line_number)
    }

    // A register operand; bare names without the $ sigil are accepted.
    pub fn expect_register(&mut self) -> Result<Register> {
        let op = self.pop_operand()?;
        self.register_from_operand(op)
    }

    pub fn expect_two_registers(&mut self) -> Result<(Register, Register)> {
        let first = self.expect_register()?;
        let second = self.expect_register()?;
        Ok((first, second))
    }

    pub fn expect_three_registers(&mut self) -> Result<(Register, Register, Register)> {
        let first = self.expect_register()?;
        let second = self.expect_register()?;
        let third = self.expect_register()?;
        Ok((first, second, third))
    }

    pub fn pop_optional_register(&mut self) -> Result<Option<Register>> {
        match self.pop_optional_operand()? {
            Some(op) => Ok(Some(self.register_from_operand(op)?)),
            None => Ok(None),
        }
    }

    // validate an immediate value
    pub fn expect_immediate(&mut self) -> Result<i64> {
        let op = self.pop_operand()?;
        if let Operand::Immediate(imm) = op {
            Ok(imm)
        } else {
            Err(AssemblyError::BadOperand {
                line: self.line_number,
                reason: "Expected an immediate value.".to_string(),
            }
            .into())
        }
    }

    // validate a shift amount
    pub fn expect_shift_amount(&mut self) -> Result<u8> {
        let imm = self.expect_immediate()?;
        check_shift_amount(imm, self.line_number)?;
        Ok(imm as u8)
    }

    // validate a label
    pub fn expect_label(&mut self) -> Result<String> {
        let op = self.pop_operand()?;
        match op {
            Operand::Label(label) => Ok(label),
            _ => Err(AssemblyError::BadOperand {
                line: self.line_number,
                reason: "Expected a label.".to_string(),
            }
            .into()),
        }
    }

    // validate an address or label (branch and jump targets)
    pub fn expect_addr_or_label(&mut self) -> Result<Operand> {
        let op = self.pop_operand()?;
        match op {
            Operand::Immediate(addr) => {
                check_unsigned_32(addr, self.line_number).context("Expected an address value.")?;
                Ok(op)
            }
            Operand::Label(_) => Ok(op),
            _ => Err(AssemblyError::BadOperand {
                line: self.line_number,
                reason: "Expected an address or label.".to_string(),
            }
            .into()),
        }
    }

    // validate an immediate or label (lui)
    pub fn expect_imm_or_label(&mut self) -> Result<Operand> {
        let op = self.pop_operand()?;
        match op {
            Operand::Immediate(_) | Operand::Label(_) => Ok(op),
            _ => Err(AssemblyError::BadOperand {
                line: self.line_number,
                reason: "Expected an immediate value or a label.".to_string(),
            }
            .into()),
        }
    }

    // validate an offset(base) memory operand
    pub fn expect_memory(&mut self) -> Result<(i64, Register)> {
        let op = self.pop_operand()?;
        if let Operand::Memory(offset, base) = op {
            Ok((offset, base))
        } else {
            Err(AssemblyError::BadOperand {
                line: self.line_number,
                reason: "Expected a memory operand of the form offset(base).".to_string(),
            }
            .into())
        }
    }

    pub fn expect_value_list(&mut self) -> Result<Vec<Operand>> {
        let line = self.line_number;
        let list = self
            .pairs
            .next()
            .ok_or_else(|| AssemblyError::BadOperand {
                line,
                reason: "Expected a list of values.".to_string(),
            })?;
        list.into_inner().map(build_value).collect()
    }

    pub fn expect_number_list(&mut self) -> Result<Vec<i64>> {
        let line = self.line_number;
        let list = self
            .pairs
            .next()
            .ok_or_else(|| AssemblyError::BadOperand {
                line,
                reason: "Expected a list of values.".to_string(),
            })?;
        list.into_inner()
            .map(|pair| parse_number(pair.as_str(), line))
            .collect()
    }

    pub fn expect_string_literal(&mut self) -> Result<String> {
        let line = self.line_number;
        let literal = self
            .pairs
            .next()
            .ok_or_else(|| AssemblyError::BadOperand {
                line,
                reason: "Expected a string literal.".to_string(),
            })?;
        let val = literal
            .into_inner()
            .next()
            .ok_or_else(|| AssemblyError::BadOperand {
                line,
                reason: "Expected string contents.".to_string(),
            })?;
        Ok(val.as_str().to_string())
    }

    fn register_from_operand(&self, op: Operand) -> Result<Register> {
        match op {
            Operand::Register(reg) => Ok(reg),
            Operand::Label(name) => match Register::parse(&name) {
                Some(reg) => Ok(reg),
                None => Err(AssemblyError::BadOperand {
                    line: self.line_number,
                    reason: format!("Invalid register name: {}", name),
                }
                .into()),
            },
            _ => Err(AssemblyError::BadOperand {
                line: self.line_number,
                reason: "Expected a register operand.".to_string(),
            }
            .into()),
        }
    }
}
