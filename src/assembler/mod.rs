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

mod encoder;
mod sections;
mod symbol_table;

use crate::ast::{AssemblyLine, Directive, Operand};
use crate::errors::AssemblyError;

pub use sections::Section;
pub use symbol_table::{Symbol, SymbolTable};

use sections::AddrCounter;
use symbol_table::{get_symbol, insert_symbol};

/// Largest binary image the assembler will produce, in bytes.
pub const MAX_IMAGE_BYTES: usize = 4096;

/// Pass 1: record every label at its address and advance the section cursors
/// by the exact number of bytes pass 2 will emit for each construct.
pub fn build_symbol_table(lines: &[AssemblyLine]) -> Result<SymbolTable, AssemblyError> {
    let mut symbol_table = SymbolTable::new();
    let mut counters = AddrCounter::new();

    for line in lines {
        // If a label exists on this line, record its current address.
        if let Some(label) = &line.label {
            insert_symbol(
                &mut symbol_table,
                label,
                Symbol {
                    address: counters.current_address(),
                    section: counters.active_section(),
                },
                line.line_number,
            )?;
        }

        if let Some(directive) = &line.directive {
            match directive {
                Directive::Text => counters.switch_to(Section::Text),
                Directive::Data => counters.switch_to(Section::Data),
                Directive::Org(addr) => counters.set_origin(*addr),
                Directive::Word(values) => counters.advance(values.len() as u32 * 4),
                Directive::Half(values) => counters.advance(values.len() as u32 * 2),
                Directive::Byte(values) => counters.advance(values.len() as u32),
                Directive::Ascii(text) => counters.advance(text.len() as u32),
                Directive::Asciiz(text) => counters.advance(text.len() as u32 + 1),
                Directive::Space(count) => counters.advance(*count),
                Directive::Align(exponent) => {
                    counters.advance(counters.align_padding(*exponent))
                }
            }
        }

        if let Some(instruction) = &line.instruction {
            counters.advance(encoder::instruction_size(instruction));
        }
    }

    Ok(symbol_table)
}

/// Pass 2: re-walk the lines, resolve references against the symbol table and
/// append big-endian bytes to the output image.
pub fn generate_image(
    lines: &[AssemblyLine],
    symbol_table: &SymbolTable,
) -> Result<Vec<u8>, AssemblyError> {
    let mut image: Vec<u8> = Vec::new();
    let mut counters = AddrCounter::new();

    for line in lines {
        if let Some(directive) = &line.directive {
            match directive {
                Directive::Text => counters.switch_to(Section::Text),
                Directive::Data => counters.switch_to(Section::Data),
                Directive::Org(addr) => counters.set_origin(*addr),
                Directive::Word(values) => {
                    for value in values {
                        let word = match value {
                            Operand::Immediate(value) => *value as u32,
                            Operand::Label(name) => {
                                get_symbol(symbol_table, name, line.line_number)?.address
                            }
                            _ => {
                                return Err(AssemblyError::BadOperand {
                                    line: line.line_number,
                                    reason: ".word data must be immediate values or labels."
                                        .to_string(),
                                });
                            }
                        };
                        emit(&mut image, &mut counters, &word.to_be_bytes())?;
                    }
                }
                Directive::Half(values) => {
                    for value in values {
                        let half = (*value as u32 & 0xFFFF) as u16;
                        emit(&mut image, &mut counters, &half.to_be_bytes())?;
                    }
                }
                Directive::Byte(values) => {
                    for value in values {
                        emit(&mut image, &mut counters, &[*value as u8])?;
                    }
                }
                Directive::Ascii(text) => emit(&mut image, &mut counters, text.as_bytes())?,
                Directive::Asciiz(text) => {
                    emit(&mut image, &mut counters, text.as_bytes())?;
                    emit(&mut image, &mut counters, &[0x00])?;
                }
                Directive::Space(count) => emit_zeros(&mut image, &mut counters, *count)?,
                Directive::Align(exponent) => {
                    let padding = counters.align_padding(*exponent);
                    emit_zeros(&mut image, &mut counters, padding)?
                }
            }
        }

        if let Some(instruction) = &line.instruction {
            let bytes = encoder::encode_instruction(
                instruction,
                symbol_table,
                counters.current_address(),
                line.line_number,
            )?;
            emit(&mut image, &mut counters, &bytes)?;
        }
    }

    debug_assert_eq!(
        image.len() as u32,
        counters.text_size() + counters.data_size()
    );

    Ok(image)
}

// Every emission moves the byte cursor and the active section's size counter
// together, keeping current_address == section base + section size.
fn emit(
    image: &mut Vec<u8>,
    counters: &mut AddrCounter,
    bytes: &[u8],
) -> Result<(), AssemblyError> {
    check_capacity(image.len(), bytes.len())?;
    image.extend_from_slice(bytes);
    counters.advance(bytes.len() as u32);
    Ok(())
}

fn emit_zeros(
    image: &mut Vec<u8>,
    counters: &mut AddrCounter,
    count: u32,
) -> Result<(), AssemblyError> {
    check_capacity(image.len(), count as usize)?;
    image.resize(image.len() + count as usize, 0x00);
    counters.advance(count);
    Ok(())
}

fn check_capacity(used: usize, wanted: usize) -> Result<(), AssemblyError> {
    if used + wanted > MAX_IMAGE_BYTES {
        return Err(AssemblyError::CapacityExceeded {
            reason: format!("output image limited to {} bytes", MAX_IMAGE_BYTES),
        });
    }
    Ok(())
}

// ------------- unit tests -------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_source;

    fn assemble_lines(source: &str) -> Result<Vec<u8>, AssemblyError> {
        let lines = parse_source(source).unwrap();
        let symbol_table = build_symbol_table(&lines)?;
        generate_image(&lines, &symbol_table)
    }

    #[test]
    fn test_forward_branch_with_org() {
        let source = "\
.text
.org 0x00400000
start: beq $t0, $t1, end
       nop
end:
";
        let image = assemble_lines(source).unwrap();
        assert_eq!(
            image,
            [0x11, 0x09, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn test_data_label_address() {
        let source = "\
.data
.org 0x10010000
msg: .asciiz \"Hi\"
";
        let lines = parse_source(source).unwrap();
        let symbol_table = build_symbol_table(&lines).unwrap();
        assert_eq!(
            symbol_table.get("msg"),
            Some(&Symbol {
                address: 0x1001_0000,
                section: Section::Data,
            })
        );
        let image = generate_image(&lines, &symbol_table).unwrap();
        assert_eq!(image, [0x48, 0x69, 0x00]);
    }

    #[test]
    fn test_default_section_bases() {
        let source = "\
.text
code: nop
.data
bytes: .byte 1
";
        let lines = parse_source(source).unwrap();
        let symbol_table = build_symbol_table(&lines).unwrap();
        assert_eq!(symbol_table.get("code").unwrap().address, 0x0040_0000);
        assert_eq!(symbol_table.get("bytes").unwrap().address, 0x1001_0000);
    }

    #[test]
    fn test_section_switch_restores_cursor() {
        let source = "\
.text
nop
.data
first: .byte 1, 2
.text
second: nop
.data
third: .byte 3
";
        let lines = parse_source(source).unwrap();
        let symbol_table = build_symbol_table(&lines).unwrap();
        assert_eq!(symbol_table.get("second").unwrap().address, 0x0040_0004);
        assert_eq!(symbol_table.get("third").unwrap().address, 0x1001_0002);
        // emitted in source order, with no inter-section gap
        let image = generate_image(&lines, &symbol_table).unwrap();
        assert_eq!(image.len(), 4 + 2 + 4 + 1);
    }

    #[test]
    fn test_la_reserves_two_words_for_forward_label() {
        // msg sits right after the la; the label address depends on the
        // reservation made for la itself.
        let source = "\
.text
.org 0x00400000
la $a0, msg
msg:
";
        let lines = parse_source(source).unwrap();
        let symbol_table = build_symbol_table(&lines).unwrap();
        assert_eq!(symbol_table.get("msg").unwrap().address, 0x0040_0008);
        let image = generate_image(&lines, &symbol_table).unwrap();
        assert_eq!(
            image,
            [0x3C, 0x04, 0x00, 0x40, 0x34, 0x84, 0x00, 0x08]
        );
    }

    #[test]
    fn test_li_sizing_keeps_labels_aligned() {
        let source = "\
.text
.org 0x00400000
li $t0, 0x12345678
li $t1, 7
after:
";
        let lines = parse_source(source).unwrap();
        let symbol_table = build_symbol_table(&lines).unwrap();
        // 8 bytes for the wide li, 4 for the narrow one
        assert_eq!(symbol_table.get("after").unwrap().address, 0x0040_000C);
    }

    #[test]
    fn test_word_directive_resolves_labels() {
        let source = "\
.text
.org 0x00400000
entry: nop
.data
.org 0x10010000
table: .word entry, 0xDEADBEEF
";
        let image = assemble_lines(source).unwrap();
        assert_eq!(
            image,
            [
                0x00, 0x00, 0x00, 0x00, // nop
                0x00, 0x40, 0x00, 0x00, // entry
                0xDE, 0xAD, 0xBE, 0xEF,
            ]
        );
    }

    #[test]
    fn test_half_and_byte_are_truncated() {
        let source = "\
.data
.byte 0x1FF
.half 0x12345
";
        let image = assemble_lines(source).unwrap();
        assert_eq!(image, [0xFF, 0x23, 0x45]);
    }

    #[test]
    fn test_align_pads_to_boundary() {
        let source = "\
.data
.byte 1
.align 2
.word 2
";
        let image = assemble_lines(source).unwrap();
        assert_eq!(image, [0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02]);
    }

    #[test]
    fn test_space_emits_zeros() {
        let source = "\
.data
.byte 0xAA
.space 3
.byte 0xBB
";
        let image = assemble_lines(source).unwrap();
        assert_eq!(image, [0xAA, 0x00, 0x00, 0x00, 0xBB]);
    }

    #[test]
    fn test_ascii_has_no_terminator() {
        let source = ".data\n.ascii \"Hi\"\n";
        let image = assemble_lines(source).unwrap();
        assert_eq!(image, [0x48, 0x69]);
    }

    #[test]
    fn test_org_ignored_once_section_has_bytes() {
        let source = "\
.text
.org 0x00400000
nop
.org 0x00500000
late: nop
";
        let lines = parse_source(source).unwrap();
        let symbol_table = build_symbol_table(&lines).unwrap();
        assert_eq!(symbol_table.get("late").unwrap().address, 0x0040_0004);
    }

    #[test]
    fn test_duplicate_label_is_rejected() {
        let source = "a: nop\na: nop\n";
        let lines = parse_source(source).unwrap();
        let result = build_symbol_table(&lines);
        assert_eq!(
            result,
            Err(AssemblyError::SemanticError {
                line: 2,
                reason: "Duplicate label definition: a".to_string(),
            })
        );
    }

    #[test]
    fn test_undefined_branch_target() {
        let source = "beq $t0, $t1, nowhere\n";
        let result = assemble_lines(source);
        assert_eq!(
            result,
            Err(AssemblyError::UndefinedLabel {
                line: 1,
                name: "nowhere".to_string(),
            })
        );
    }

    #[test]
    fn test_undefined_word_operand_is_an_error() {
        let source = ".data\n.word nowhere\n";
        let result = assemble_lines(source);
        assert!(matches!(
            result,
            Err(AssemblyError::UndefinedLabel { .. })
        ));
    }

    #[test]
    fn test_label_capacity_is_enforced() {
        let mut source = String::from(".text\n");
        for i in 0..257 {
            source.push_str(&format!("l{}: nop\n", i));
        }
        let lines = parse_source(&source).unwrap();
        assert!(matches!(
            build_symbol_table(&lines),
            Err(AssemblyError::CapacityExceeded { .. })
        ));
    }

    #[test]
    fn test_pass_2_alone_matches_for_numeric_sources() {
        // With no symbolic references, pass 2 does not depend on pass 1.
        let source = ".text\nori $v0, $zero, 1\nsll $t0, $t1, 2\nlw $s0, 12($sp)\n";
        let lines = parse_source(source).unwrap();
        let direct = generate_image(&lines, &SymbolTable::new()).unwrap();
        let symbol_table = build_symbol_table(&lines).unwrap();
        let two_pass = generate_image(&lines, &symbol_table).unwrap();
        assert_eq!(direct, two_pass);
    }

    #[test]
    fn test_output_capacity_is_enforced() {
        let source = ".data\n.space 5000\n";
        let result = assemble_lines(source);
        assert!(matches!(
            result,
            Err(AssemblyError::CapacityExceeded { .. })
        ));
    }

    #[test]
    fn test_output_length_equals_section_sizes() {
        let source = "\
.text
.org 0x00400000
main: li $v0, 1
      la $a0, value
      lw $a0, 0($a0)
      syscall
      jr $ra
.data
.org 0x10010000
value: .word 41
       .half 1, 2
       .byte 3
";
        let lines = parse_source(source).unwrap();
        let symbol_table = build_symbol_table(&lines).unwrap();
        let image = generate_image(&lines, &symbol_table).unwrap();
        // text: li(4) + la(8) + lw(4) + syscall(4) + jr(4); data: 4 + 4 + 1
        assert_eq!(image.len(), 24 + 9);
        assert_eq!(symbol_table.get("value").unwrap().address, 0x1001_0000);
    }

    #[test]
    fn test_text_data_interleaved_trajectory() {
        // Addresses recorded in pass 1 must match what pass 2 encodes; the
        // branch below only lands correctly if both passes agree.
        let source = "\
.text
.org 0x00400000
start: bne $t0, $zero, start
       nop
";
        let image = assemble_lines(source).unwrap();
        // offset = (0x00400000 - 0x00400004) / 4 = -1
        assert_eq!(image[0..4], [0x15, 0x00, 0xFF, 0xFF]);
    }
}
