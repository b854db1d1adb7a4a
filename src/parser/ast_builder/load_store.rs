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

use crate::ast::Instruction;
use crate::parser::ast_builder::AstBuilder;
use crate::parser::ast_builder::constants::*;
use anyhow::{Context, Result};

impl<'a> AstBuilder<'a> {
    // lui rt, imm AND lui rt, label (the label's upper half is used)
    pub fn build_lui(&mut self) -> Result<Instruction> {
        let rt = self.expect_register().context(INVALID_OP_MSG)?;
        let value = self.expect_imm_or_label().context(INVALID_OP_MSG)?;
        Ok(Instruction::Lui(rt, value))
    }

    // --- loads and stores: rt, offset(base) ---

    pub fn build_lb(&mut self) -> Result<Instruction> {
        let rt = self.expect_register().context(INVALID_OP_MSG)?;
        let (offset, base) = self.expect_memory().context(INVALID_OP_MSG)?;
        Ok(Instruction::Lb(rt, offset, base))
    }

    pub fn build_lbu(&mut self) -> Result<Instruction> {
        let rt = self.expect_register().context(INVALID_OP_MSG)?;
        let (offset, base) = self.expect_memory().context(INVALID_OP_MSG)?;
        Ok(Instruction::Lbu(rt, offset, base))
    }

    pub fn build_lh(&mut self) -> Result<Instruction> {
        let rt = self.expect_register().context(INVALID_OP_MSG)?;
        let (offset, base) = self.expect_memory().context(INVALID_OP_MSG)?;
        Ok(Instruction::Lh(rt, offset, base))
    }

    pub fn build_lhu(&mut self) -> Result<Instruction> {
        let rt = self.expect_register().context(INVALID_OP_MSG)?;
        let (offset, base) = self.expect_memory().context(INVALID_OP_MSG)?;
        Ok(Instruction::Lhu(rt, offset, base))
    }

    pub fn build_lw(&mut self) -> Result<Instruction> {
        let rt = self.expect_register().context(INVALID_OP_MSG)?;
        let (offset, base) = self.expect_memory().context(INVALID_OP_MSG)?;
        Ok(Instruction::Lw(rt, offset, base))
    }

    pub fn build_sb(&mut self) -> Result<Instruction> {
        let rt = self.expect_register().context(INVALID_OP_MSG)?;
        let (offset, base) = self.expect_memory().context(INVALID_OP_MSG)?;
        Ok(Instruction::Sb(rt, offset, base))
    }

    pub fn build_sh(&mut self) -> Result<Instruction> {
        let rt = self.expect_register().context(INVALID_OP_MSG)?;
        let (offset, base) = self.expect_memory().context(INVALID_OP_MSG)?;
        Ok(Instruction::Sh(rt, offset, base))
    }

    pub fn build_sw(&mut self) -> Result<Instruction> {
        let rt = self.expect_register().context(INVALID_OP_MSG)?;
        let (offset, base) = self.expect_memory().context(INVALID_OP_MSG)?;
        Ok(Instruction::Sw(rt, offset, base))
    }

    // --- pseudo-instructions ---

    pub fn build_li(&mut self) -> Result<Instruction> {
        let rt = self.expect_register().context(INVALID_OP_MSG)?;
        let imm = self.expect_immediate().context(INVALID_OP_MSG)?;
        Ok(Instruction::Li(rt, imm))
    }

    pub fn build_la(&mut self) -> Result<Instruction> {
        let rt = self.expect_register().context(INVALID_OP_MSG)?;
        let label = self.expect_label().context(INVALID_OP_MSG)?;
        Ok(Instruction::La(rt, label))
    }

    pub fn build_move(&mut self) -> Result<Instruction> {
        let (rd, rs) = self.expect_two_registers().context(INVALID_OP_MSG)?;
        Ok(Instruction::Move(rd, rs))
    }
}
