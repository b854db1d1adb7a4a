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

// primary opcodes
pub const OP_SPECIAL: u8 = 0x00;
pub const OP_J: u8 = 0x02;
pub const OP_JAL: u8 = 0x03;
pub const OP_BEQ: u8 = 0x04;
pub const OP_BNE: u8 = 0x05;
pub const OP_ADDI: u8 = 0x08;
pub const OP_ADDIU: u8 = 0x09;
pub const OP_SLTI: u8 = 0x0A;
pub const OP_SLTIU: u8 = 0x0B;
pub const OP_ANDI: u8 = 0x0C;
pub const OP_ORI: u8 = 0x0D;
pub const OP_XORI: u8 = 0x0E;
pub const OP_LUI: u8 = 0x0F;
pub const OP_LB: u8 = 0x20;
pub const OP_LH: u8 = 0x21;
pub const OP_LW: u8 = 0x23;
pub const OP_LBU: u8 = 0x24;
pub const OP_LHU: u8 = 0x25;
pub const OP_SB: u8 = 0x28;
pub const OP_SH: u8 = 0x29;
pub const OP_SW: u8 = 0x2B;

// SPECIAL (opcode 0) function codes
pub const FUNC_SLL: u8 = 0x00;
pub const FUNC_SRL: u8 = 0x02;
pub const FUNC_SRA: u8 = 0x03;
pub const FUNC_SLLV: u8 = 0x04;
pub const FUNC_SRLV: u8 = 0x06;
pub const FUNC_SRAV: u8 = 0x07;
pub const FUNC_JR: u8 = 0x08;
pub const FUNC_JALR: u8 = 0x09;
pub const FUNC_SYSCALL: u8 = 0x0C;
pub const FUNC_BREAK: u8 = 0x0D;
pub const FUNC_MFHI: u8 = 0x10;
pub const FUNC_MTHI: u8 = 0x11;
pub const FUNC_MFLO: u8 = 0x12;
pub const FUNC_MTLO: u8 = 0x13;
pub const FUNC_MULT: u8 = 0x18;
pub const FUNC_MULTU: u8 = 0x19;
pub const FUNC_DIV: u8 = 0x1A;
pub const FUNC_DIVU: u8 = 0x1B;
pub const FUNC_ADD: u8 = 0x20;
pub const FUNC_ADDU: u8 = 0x21;
pub const FUNC_SUB: u8 = 0x22;
pub const FUNC_AND: u8 = 0x24;
pub const FUNC_OR: u8 = 0x25;
pub const FUNC_XOR: u8 = 0x26;
pub const FUNC_SLT: u8 = 0x2A;
pub const FUNC_SLTU: u8 = 0x2B;

// break packs a 20-bit code into bits 6..25
pub const BREAK_CODE_MASK: u32 = 0xF_FFFF;
