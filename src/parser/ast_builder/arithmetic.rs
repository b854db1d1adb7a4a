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
    // --- three-register arithmetic and logic: rd, rs, rt ---

    pub fn build_add(&mut self) -> Result<Instruction> {
        let (rd, rs, rt) = self.expect_three_registers().context(INVALID_OP_MSG)?;
        Ok(Instruction::Add(rd, rs, rt))
    }

    pub fn build_sub(&mut self) -> Result<Instruction> {
        let (rd, rs, rt) = self.expect_three_registers().context(INVALID_OP_MSG)?;
        Ok(Instruction::Sub(rd, rs, rt))
    }

    pub fn build_and(&mut self) -> Result<Instruction> {
        let (rd, rs, rt) = self.expect_three_registers().context(INVALID_OP_MSG)?;
        Ok(Instruction::And(rd, rs, rt))
    }

    pub fn build_or(&mut self) -> Result<Instruction> {
        let (rd, rs, rt) = self.expect_three_registers().context(INVALID_OP_MSG)?;
        Ok(Instruction::Or(rd, rs, rt))
    }

    pub fn build_xor(&mut self) -> Result<Instruction> {
        let (rd, rs, rt) = self.expect_three_registers().context(INVALID_OP_MSG)?;
        Ok(Instruction::Xor(rd, rs, rt))
    }

    pub fn build_slt(&mut self) -> Result<Instruction> {
        let (rd, rs, rt) = self.expect_three_registers().context(INVALID_OP_MSG)?;
        Ok(Instruction::Slt(rd, rs, rt))
    }

    pub fn build_sltu(&mut self) -> Result<Instruction> {
        let (rd, rs, rt) = self.expect_three_registers().context(INVALID_OP_MSG)?;
        Ok(Instruction::Sltu(rd, rs, rt))
    }

    // --- constant shifts: rd, rt, sa ---

    pub fn build_sll(&mut self) -> Result<Instruction> {
        let (rd, rt) = self.expect_two_registers().context(INVALID_OP_MSG)?;
        let sa = self.expect_shift_amount().context(INVALID_OP_MSG)?;
        Ok(Instruction::Sll(rd, rt, sa))
    }

    pub fn build_srl(&mut self) -> Result<Instruction> {
        let (rd, rt) = self.expect_two_registers().context(INVALID_OP_MSG)?;
        let sa = self.expect_shift_amount().context(INVALID_OP_MSG)?;
        Ok(Instruction::Srl(rd, rt, sa))
    }

    pub fn build_sra(&mut self) -> Result<Instruction> {
        let (rd, rt) = self.expect_two_registers().context(INVALID_OP_MSG)?;
        let sa = self.expect_shift_amount().context(INVALID_OP_MSG)?;
        Ok(Instruction::Sra(rd, rt, sa))
    }

    // --- variable shifts: rd, rt, rs ---

    pub fn build_sllv(&mut self) -> Result<Instruction> {
        let (rd, rt, rs) = self.expect_three_registers().context(INVALID_OP_MSG)?;
        Ok(Instruction::Sllv(rd, rt, rs))
    }

    pub fn build_srlv(&mut self) -> Result<Instruction> {
        let (rd, rt, rs) = self.expect_three_registers().context(INVALID_OP_MSG)?;
        Ok(Instruction::Srlv(rd, rt, rs))
    }

    pub fn build_srav(&mut self) -> Result<Instruction> {
        let (rd, rt, rs) = self.expect_three_registers().context(INVALID_OP_MSG)?;
        Ok(Instruction::Srav(rd, rt, rs))
    }

    // --- HI/LO unit ---

    pub fn build_mfhi(&mut self) -> Result<Instruction> {
        let rd = self.expect_register().context(INVALID_OP_MSG)?;
        Ok(Instruction::Mfhi(rd))
    }

    pub fn build_mflo(&mut self) -> Result<Instruction> {
        let rd = self.expect_register().context(INVALID_OP_MSG)?;
        Ok(Instruction::Mflo(rd))
    }

    pub fn build_mthi(&mut self) -> Result<Instruction> {
        let rs = self.expect_register().context(INVALID_OP_MSG)?;
        Ok(Instruction::Mthi(rs))
    }

    pub fn build_mtlo(&mut self) -> Result<Instruction> {
        let rs = self.expect_register().context(INVALID_OP_MSG)?;
        Ok(Instruction::Mtlo(rs))
    }

    pub fn build_mult(&mut self) -> Result<Instruction> {
        let (rs, rt) = self.expect_two_registers().context(INVALID_OP_MSG)?;
        Ok(Instruction::Mult(rs, rt))
    }

    pub fn build_multu(&mut self) -> Result<Instruction> {
        let (rs, rt) = self.expect_two_registers().context(INVALID_OP_MSG)?;
        Ok(Instruction::Multu(rs, rt))
    }

    pub fn build_div(&mut self) -> Result<Instruction> {
        let (rs, rt) = self.expect_two_registers().context(INVALID_OP_MSG)?;
        Ok(Instruction::Div(rs, rt))
    }

    pub fn build_divu(&mut self) -> Result<Instruction> {
        let (rs, rt) = self.expect_two_registers().context(INVALID_OP_MSG)?;
        Ok(Instruction::Divu(rs, rt))
    }

    // --- immediate arithmetic and logic: rt, rs, imm ---

    pub fn build_addi(&mut self) -> Result<Instruction> {
        let (rt, rs) = self.expect_two_registers().context(INVALID_OP_MSG)?;
        let imm = self.expect_immediate().context(INVALID_OP_MSG)?;
        Ok(Instruction::Addi(rt, rs, imm))
    }

    pub fn build_addiu(&mut self) -> Result<Instruction> {
        let (rt, rs) = self.expect_two_registers().context(INVALID_OP_MSG)?;
        let imm = self.expect_immediate().context(INVALID_OP_MSG)?;
        Ok(Instruction::Addiu(rt, rs, imm))
    }

    pub fn build_slti(&mut self) -> Result<Instruction> {
        let (rt, rs) = self.expect_two_registers().context(INVALID_OP_MSG)?;
        let imm = self.expect_immediate().context(INVALID_OP_MSG)?;
        Ok(Instruction::Slti(rt, rs, imm))
    }

    pub fn build_sltiu(&mut self) -> Result<Instruction> {
        let (rt, rs) = self.expect_two_registers().context(INVALID_OP_MSG)?;
        let imm = self.expect_immediate().context(INVALID_OP_MSG)?;
        Ok(Instruction::Sltiu(rt, rs, imm))
    }

    pub fn build_andi(&mut self) -> Result<Instruction> {
        let (rt, rs) = self.expect_two_registers().context(INVALID_OP_MSG)?;
        let imm = self.expect_immediate().context(INVALID_OP_MSG)?;
        Ok(Instruction::Andi(rt, rs, imm))
    }

    pub fn build_ori(&mut self) -> Result<Instruction> {
        let (rt, rs) = self.expect_two_registers().context(INVALID_OP_MSG)?;
        let imm = self.expect_immediate().context(INVALID_OP_MSG)?;
        Ok(Instruction::Ori(rt, rs, imm))
    }

    pub fn build_xori(&mut self) -> Result<Instruction> {
        let (rt, rs) = self.expect_two_registers().context(INVALID_OP_MSG)?;
        let imm = self.expect_immediate().context(INVALID_OP_MSG)?;
        Ok(Instruction::Xori(rt, rs, imm))
    }
}
