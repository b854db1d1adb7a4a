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

mod components;
mod constants;
mod utility_functions;

use crate::assembler::symbol_table::*;
use crate::ast::{Instruction, Operand};
use crate::errors::AssemblyError;
use components::*;
use constants::*;
use utility_functions::*;

/// Helper function to determine instruction size in bytes during Pass 1.
pub fn instruction_size(instruction: &Instruction) -> u32 {
    match instruction {
        // li expands to two words only for a wide immediate with a non-zero
        // low half; the literal operand makes this decidable in pass 1.
        Instruction::Li(_, imm) => {
            let value = *imm as u32;
            if value > 0xFFFF && value & 0xFFFF != 0 { 8 } else { 4 }
        }
        // la always reserves the full lui/ori pair.
        Instruction::La(_, _) => 8,
        _ => 4,
    }
}

/// Helper function to translate a single instruction into big-endian bytes
/// during Pass 2.
pub fn encode_instruction(
    instruction: &Instruction,
    symbol_table: &SymbolTable,
    current_address: u32,
    line_num: usize,
) -> Result<Vec<u8>, AssemblyError> {
    let words = match instruction {
        Instruction::Nop => vec![0x0000_0000],
        Instruction::Syscall => vec![encode_r_type(OP_SPECIAL, 0, 0, 0, 0, FUNC_SYSCALL)],
        Instruction::Break(code) => vec![
            encode_r_type(OP_SPECIAL, 0, 0, 0, 0, FUNC_BREAK) | ((code & BREAK_CODE_MASK) << 6),
        ],

        // --------- three-register arithmetic and logic ---------
        Instruction::Add(rd, rs, rt) => vec![encode_r_type(
            OP_SPECIAL,
            rs.number(),
            rt.number(),
            rd.number(),
            0,
            FUNC_ADD,
        )],
        Instruction::Sub(rd, rs, rt) => vec![encode_r_type(
            OP_SPECIAL,
            rs.number(),
            rt.number(),
            rd.number(),
            0,
            FUNC_SUB,
        )],
        Instruction::And(rd, rs, rt) => vec![encode_r_type(
            OP_SPECIAL,
            rs.number(),
            rt.number(),
            rd.number(),
            0,
            FUNC_AND,
        )],
        Instruction::Or(rd, rs, rt) => vec![encode_r_type(
            OP_SPECIAL,
            rs.number(),
            rt.number(),
            rd.number(),
            0,
            FUNC_OR,
        )],
        Instruction::Xor(rd, rs, rt) => vec![encode_r_type(
            OP_SPECIAL,
            rs.number(),
            rt.number(),
            rd.number(),
            0,
            FUNC_XOR,
        )],
        Instruction::Slt(rd, rs, rt) => vec![encode_r_type(
            OP_SPECIAL,
            rs.number(),
            rt.number(),
            rd.number(),
            0,
            FUNC_SLT,
        )],
        Instruction::Sltu(rd, rs, rt) => vec![encode_r_type(
            OP_SPECIAL,
            rs.number(),
            rt.number(),
            rd.number(),
            0,
            FUNC_SLTU,
        )],

        // --------- shifts ---------
        Instruction::Sll(rd, rt, sa) => vec![encode_r_type(
            OP_SPECIAL,
            0,
            rt.number(),
            rd.number(),
            *sa,
            FUNC_SLL,
        )],
        Instruction::Srl(rd, rt, sa) => vec![encode_r_type(
            OP_SPECIAL,
            0,
            rt.number(),
            rd.number(),
            *sa,
            FUNC_SRL,
        )],
        Instruction::Sra(rd, rt, sa) => vec![encode_r_type(
            OP_SPECIAL,
            0,
            rt.number(),
            rd.number(),
            *sa,
            FUNC_SRA,
        )],
        Instruction::Sllv(rd, rt, rs) => vec![encode_r_type(
            OP_SPECIAL,
            rs.number(),
            rt.number(),
            rd.number(),
            0,
            FUNC_SLLV,
        )],
        Instruction::Srlv(rd, rt, rs) => vec![encode_r_type(
            OP_SPECIAL,
            rs.number(),
            rt.number(),
            rd.number(),
            0,
            FUNC_SRLV,
        )],
        Instruction::Srav(rd, rt, rs) => vec![encode_r_type(
            OP_SPECIAL,
            rs.number(),
            rt.number(),
            rd.number(),
            0,
            FUNC_SRAV,
        )],

        // --------- HI/LO unit ---------
        Instruction::Mfhi(rd) => {
            vec![encode_r_type(OP_SPECIAL, 0, 0, rd.number(), 0, FUNC_MFHI)]
        }
        Instruction::Mflo(rd) => {
            vec![encode_r_type(OP_SPECIAL, 0, 0, rd.number(), 0, FUNC_MFLO)]
        }
        Instruction::Mthi(rs) => {
            vec![encode_r_type(OP_SPECIAL, rs.number(), 0, 0, 0, FUNC_MTHI)]
        }
        Instruction::Mtlo(rs) => {
            vec![encode_r_type(OP_SPECIAL, rs.number(), 0, 0, 0, FUNC_MTLO)]
        }
        Instruction::Mult(rs, rt) => vec![encode_r_type(
            OP_SPECIAL,
            rs.number(),
            rt.number(),
            0,
            0,
            FUNC_MULT,
        )],
        Instruction::Multu(rs, rt) => vec![encode_r_type(
            OP_SPECIAL,
            rs.number(),
            rt.number(),
            0,
            0,
            FUNC_MULTU,
        )],
        Instruction::Div(rs, rt) => vec![encode_r_type(
            OP_SPECIAL,
            rs.number(),
            rt.number(),
            0,
            0,
            FUNC_DIV,
        )],
        Instruction::Divu(rs, rt) => vec![encode_r_type(
            OP_SPECIAL,
            rs.number(),
            rt.number(),
            0,
            0,
            FUNC_DIVU,
        )],

        // --------- register jumps ---------
        Instruction::Jr(rs) => vec![encode_r_type(OP_SPECIAL, rs.number(), 0, 0, 0, FUNC_JR)],
        Instruction::Jalr(rs, rd) => vec![encode_r_type(
            OP_SPECIAL,
            rs.number(),
            0,
            rd.number(),
            0,
            FUNC_JALR,
        )],

        // --------- immediate arithmetic and logic ---------
        Instruction::Addi(rt, rs, imm) => {
            vec![encode_i_type(OP_ADDI, rs.number(), rt.number(), imm16(*imm))]
        }
        Instruction::Addiu(rt, rs, imm) => vec![encode_i_type(
            OP_ADDIU,
            rs.number(),
            rt.number(),
            imm16(*imm),
        )],
        Instruction::Slti(rt, rs, imm) => {
            vec![encode_i_type(OP_SLTI, rs.number(), rt.number(), imm16(*imm))]
        }
        Instruction::Sltiu(rt, rs, imm) => vec![encode_i_type(
            OP_SLTIU,
            rs.number(),
            rt.number(),
            imm16(*imm),
        )],
        Instruction::Andi(rt, rs, imm) => {
            vec![encode_i_type(OP_ANDI, rs.number(), rt.number(), imm16(*imm))]
        }
        Instruction::Ori(rt, rs, imm) => {
            vec![encode_i_type(OP_ORI, rs.number(), rt.number(), imm16(*imm))]
        }
        Instruction::Xori(rt, rs, imm) => {
            vec![encode_i_type(OP_XORI, rs.number(), rt.number(), imm16(*imm))]
        }

        // lui takes an immediate or the upper half of a label's address
        Instruction::Lui(rt, value) => {
            let imm = match value {
                Operand::Immediate(imm) => imm16(*imm),
                Operand::Label(name) => {
                    let addr = get_symbol(symbol_table, name, line_num)?.address;
                    ((addr >> 16) & 0xFFFF) as u16
                }
                _ => {
                    return Err(AssemblyError::BadOperand {
                        line: line_num,
                        reason: "Expected an immediate value or a label.".to_string(),
                    });
                }
            };
            vec![encode_i_type(OP_LUI, 0, rt.number(), imm)]
        }

        // --------- loads and stores ---------
        Instruction::Lb(rt, offset, base) => vec![encode_i_type(
            OP_LB,
            base.number(),
            rt.number(),
            imm16(*offset),
        )],
        Instruction::Lbu(rt, offset, base) => vec![encode_i_type(
            OP_LBU,
            base.number(),
            rt.number(),
            imm16(*offset),
        )],
        Instruction::Lh(rt, offset, base) => vec![encode_i_type(
            OP_LH,
            base.number(),
            rt.number(),
            imm16(*offset),
        )],
        Instruction::Lhu(rt, offset, base) => vec![encode_i_type(
            OP_LHU,
            base.number(),
            rt.number(),
            imm16(*offset),
        )],
        Instruction::Lw(rt, offset, base) => vec![encode_i_type(
            OP_LW,
            base.number(),
            rt.number(),
            imm16(*offset),
        )],
        Instruction::Sb(rt, offset, base) => vec![encode_i_type(
            OP_SB,
            base.number(),
            rt.number(),
            imm16(*offset),
        )],
        Instruction::Sh(rt, offset, base) => vec![encode_i_type(
            OP_SH,
            base.number(),
            rt.number(),
            imm16(*offset),
        )],
        Instruction::Sw(rt, offset, base) => vec![encode_i_type(
            OP_SW,
            base.number(),
            rt.number(),
            imm16(*offset),
        )],

        // --------- branches ---------
        Instruction::Beq(rs, rt, target) => {
            let addr = resolve_target(target, symbol_table, line_num)?;
            vec![encode_i_type(
                OP_BEQ,
                rs.number(),
                rt.number(),
                branch_offset(addr, current_address),
            )]
        }
        Instruction::Bne(rs, rt, target) => {
            let addr = resolve_target(target, symbol_table, line_num)?;
            vec![encode_i_type(
                OP_BNE,
                rs.number(),
                rt.number(),
                branch_offset(addr, current_address),
            )]
        }
        Instruction::Beqz(rs, target) => {
            let addr = resolve_target(target, symbol_table, line_num)?;
            vec![encode_i_type(
                OP_BEQ,
                rs.number(),
                0,
                branch_offset(addr, current_address),
            )]
        }
        Instruction::Bnez(rs, target) => {
            let addr = resolve_target(target, symbol_table, line_num)?;
            vec![encode_i_type(
                OP_BNE,
                rs.number(),
                0,
                branch_offset(addr, current_address),
            )]
        }
        Instruction::B(target) => {
            let addr = resolve_target(target, symbol_table, line_num)?;
            vec![encode_i_type(
                OP_BEQ,
                0,
                0,
                branch_offset(addr, current_address),
            )]
        }

        // --------- absolute jumps ---------
        Instruction::J(target) => {
            let addr = resolve_target(target, symbol_table, line_num)?;
            vec![encode_j_type(OP_J, addr >> 2)]
        }
        Instruction::Jal(target) => {
            let addr = resolve_target(target, symbol_table, line_num)?;
            vec![encode_j_type(OP_JAL, addr >> 2)]
        }

        // --------- pseudo-instructions ---------
        Instruction::Li(rt, imm) => encode_li(*rt, *imm as u32),
        Instruction::La(rt, name) => {
            let addr = get_symbol(symbol_table, name, line_num)?.address;
            encode_la(*rt, addr)
        }
        Instruction::Move(rd, rs) => vec![encode_r_type(
            OP_SPECIAL,
            rs.number(),
            0,
            rd.number(),
            0,
            FUNC_ADDU,
        )],
    };

    Ok(words.iter().flat_map(|word| word.to_be_bytes()).collect())
}

// ------------- unit tests -------------
