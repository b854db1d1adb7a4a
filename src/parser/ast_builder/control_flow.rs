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

use crate::ast::{Instruction, Operand, Register};
use crate::errors::AssemblyError;
use crate::parser::ast_builder::AstBuilder;
use crate::parser::ast_builder::constants::*;
use anyhow::{Context, Result};

impl<'a> AstBuilder<'a> {
    // build and check operands for a two-register branch
    pub fn build_beq(&mut self) -> Result<Instruction> {
        let (rs, rt) = self.expect_two_registers().context(INVALID_OP_MSG)?;
        let target = self.expect_addr_or_label().context(INVALID_OP_MSG)?;
        Ok(Instruction::Beq(rs, rt, target))
    }

    pub fn build_bne(&mut self) -> Result<Instruction> {
        let (rs, rt) = self.expect_two_registers().context(INVALID_OP_MSG)?;
        let target = self.expect_addr_or_label().context(INVALID_OP_MSG)?;
        Ok(Instruction::Bne(rs, rt, target))
    }

    // build and check operands for a branch-on-zero
    pub fn build_beqz(&mut self) -> Result<Instruction> {
        let rs = self.expect_register().context(INVALID_OP_MSG)?;
        let target = self.expect_addr_or_label().context(INVALID_OP_MSG)?;
        Ok(Instruction::Beqz(rs, target))
    }

    pub fn build_bnez(&mut self) -> Result<Instruction> {
        let rs = self.expect_register().context(INVALID_OP_MSG)?;
        let target = self.expect_addr_or_label().context(INVALID_OP_MSG)?;
        Ok(Instruction::Bnez(rs, target))
    }

    // build and check operands for an unconditional branch
    pub fn build_b(&mut self) -> Result<Instruction> {
        let target = self.expect_addr_or_label().context(INVALID_OP_MSG)?;
        Ok(Instruction::B(target))
    }

    // build and check operands for an absolute jump
    pub fn build_j(&mut self) -> Result<Instruction> {
        let target = self.expect_addr_or_label().context(INVALID_OP_MSG)?;
        Ok(Instruction::J(target))
    }

    pub fn build_jal(&mut self) -> Result<Instruction> {
        let target = self.expect_addr_or_label().context(INVALID_OP_MSG)?;
        Ok(Instruction::Jal(target))
    }

    // build and check operands for a register jump
    pub fn build_jr(&mut self) -> Result<Instruction> {
        let rs = self.expect_register().context(INVALID_OP_MSG)?;
        Ok(Instruction::Jr(rs))
    }

    // jalr rs AND jalr rs, rd; the link register defaults to $ra
    pub fn build_jalr(&mut self) -> Result<Instruction> {
        let rs = self.expect_register().context(INVALID_OP_MSG)?;
        let rd = self
            .pop_optional_register()
            .context(INVALID_OP_MSG)?
            .unwrap_or(Register::RA);
        Ok(Instruction::Jalr(rs, rd))
    }

    // break with an optional code operand
    pub fn build_break(&mut self) -> Result<Instruction> {
        let code = match self.pop_optional_operand().context(INVALID_OP_MSG)? {
            None => 0,
            Some(Operand::Immediate(value)) => value as u32,
            Some(_) => {
                return Err(AssemblyError::BadOperand {
                    line: self.line_number,
                    reason: "break code must be an immediate value.".to_string(),
                }
                .into());
            }
        };
        Ok(Instruction::Break(code))
    }
}
