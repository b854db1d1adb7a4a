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

use crate::assembler::encoder::constants::*;
use crate::ast::Register;

// [op:6][rs:5][rt:5][rd:5][shamt:5][func:6]
pub fn encode_r_type(op: u8, rs: u8, rt: u8, rd: u8, shamt: u8, func: u8) -> u32 {
    ((op as u32) << 26)
        | ((rs as u32) << 21)
        | ((rt as u32) << 16)
        | ((rd as u32) << 11)
        | ((shamt as u32) << 6)
        | func as u32
}

// [op:6][rs:5][rt:5][imm:16]
pub fn encode_i_type(op: u8, rs: u8, rt: u8, imm: u16) -> u32 {
    ((op as u32) << 26) | ((rs as u32) << 21) | ((rt as u32) << 16) | imm as u32
}

// [op:6][target:26]
pub fn encode_j_type(op: u8, target: u32) -> u32 {
    ((op as u32) << 26) | (target & 0x03FF_FFFF)
}

// li: ori for 16-bit values, a bare lui for values with a clear low half,
// lui + ori otherwise. Must agree with instruction_size.
pub fn encode_li(rt: Register, imm: u32) -> Vec<u32> {
    let rt = rt.number();
    if imm <= 0xFFFF {
        vec![encode_i_type(OP_ORI, 0, rt, imm as u16)]
    } else if imm & 0xFFFF == 0 {
        vec![encode_i_type(OP_LUI, 0, rt, (imm >> 16) as u16)]
    } else {
        vec![
            encode_i_type(OP_LUI, 0, rt, (imm >> 16) as u16),
            encode_i_type(OP_ORI, rt, rt, (imm & 0xFFFF) as u16),
        ]
    }
}

// la: the lui/ori pair is emitted unconditionally so both passes agree on
// the size without knowing the address up front.
pub fn encode_la(rt: Register, addr: u32) -> Vec<u32> {
    let rt = rt.number();
    vec![
        encode_i_type(OP_LUI, 0, rt, (addr >> 16) as u16),
        encode_i_type(OP_ORI, rt, rt, (addr & 0xFFFF) as u16),
    ]
}
