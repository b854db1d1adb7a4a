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

mod arithmetic;
mod constants;
mod control_flow;
mod directive;
mod load_store;
mod operand_builders;
mod utility_functions;
mod validators;

use crate::ast::{Directive, Instruction};
use crate::errors::AssemblyError;
use crate::parser::Rule;
use anyhow::Result;
use pest::iterators::{Pair, Pairs};

pub struct AstBuilder<'a> {
    line_number: usize,
    rule: Rule,
    pairs: Pairs<'a, Rule>,
}

impl<'a> AstBuilder<'a> {
    pub fn new(pair: Pair<'a, Rule>) -> Self {
        Self {
            line_number: pair.as_span().start_pos().line_col().0,
            rule: pair.as_rule(),
            pairs: pair.into_inner(),
        }
    }

    // Mnemonic dispatch over the closed instruction set. Anything not listed
    // here is rejected.
    pub fn build_instruction(mut self) -> Result<Instruction> {
        let mnemonic = self
            .pairs
            .next()
            .ok_or_else(|| AssemblyError::SemanticError {
                line: self.line_number,
                reason: "Expected an instruction mnemonic.".to_string(),
            })?
            .as_str()
            .to_string();

        let instruction = match mnemonic.as_str() {
            "nop" => Instruction::Nop,
            "syscall" => Instruction::Syscall,
            "break" => self.build_break()?,
            "add" => self.build_add()?,
            "sub" => self.build_sub()?,
            "and" => self.build_and()?,
            "or" => self.build_or()?,
            "xor" => self.build_xor()?,
            "slt" => self.build_slt()?,
            "sltu" => self.build_sltu()?,
            "sll" => self.build_sll()?,
            "srl" => self.build_srl()?,
            "sra" => self.build_sra()?,
            "sllv" => self.build_sllv()?,
            "srlv" => self.build_srlv()?,
            "srav" => self.build_srav()?,
            "mfhi" => self.build_mfhi()?,
            "mflo" => self.build_mflo()?,
            "mthi" => self.build_mthi()?,
            "mtlo" => self.build_mtlo()?,
            "mult" => self.build_mult()?,
            "multu" => self.build_multu()?,
            "div" => self.build_div()?,
            "divu" => self.build_divu()?,
            "jr" => self.build_jr()?,
            "jalr" => self.build_jalr()?,
            "addi" => self.build_addi()?,
            "addiu" => self.build_addiu()?,
            "slti" => self.build_slti()?,
            "sltiu" => self.build_sltiu()?,
            "andi" => self.build_andi()?,
            "ori" => self.build_ori()?,
            "xori" => self.build_xori()?,
            "lui" => self.build_lui()?,
            "lb" => self.build_lb()?,
            "lbu" => self.build_lbu()?,
            "lh" => self.build_lh()?,
            "lhu" => self.build_lhu()?,
            "lw" => self.build_lw()?,
            "sb" => self.build_sb()?,
            "sh" => self.build_sh()?,
            "sw" => self.build_sw()?,
            "beq" => self.build_beq()?,
            "bne" => self.build_bne()?,
            "beqz" => self.build_beqz()?,
            "bnez" => self.build_bnez()?,
            "b" => self.build_b()?,
            "j" => self.build_j()?,
            "jal" => self.build_jal()?,
            "li" => self.build_li()?,
            "la" => self.build_la()?,
            "move" => self.build_move()?,
            _ => {
                return Err(AssemblyError::UnknownMnemonic {
                    line: self.line_number,
                    mnemonic: mnemonic.clone(),
                }
                .into());
            }
        };

        if self.pairs.next().is_some() {
            return Err(AssemblyError::BadOperand {
                line: self.line_number,
                reason: format!("Too many operands for \"{}\".", mnemonic),
            }
            .into());
        }

        Ok(instruction)
    }

    pub fn build_directive(self) -> Result<Directive> {
        match self.rule {
            Rule::text_directive => Ok(Directive::Text),
            Rule::data_directive => Ok(Directive::Data),
            Rule::org_directive => self.build_org_directive(),
            Rule::word_directive => self.build_word_directive(),
            Rule::byte_directive => self.build_byte_directive(),
            Rule::half_directive => self.build_half_directive(),
            Rule::ascii_directive => self.build_ascii_directive(),
            Rule::asciiz_directive => self.build_asciiz_directive(),
            Rule::space_directive => self.build_space_directive(),
            Rule::align_directive => self.build_align_directive(),
            _ => unreachable!("Unknown directive rule: {:?}", self.rule),
        }
    }
}
