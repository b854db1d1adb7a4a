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

use mipsasm::assemble;

#[test]
fn test_nop() {
    let result = assemble("nop\n", false).unwrap();

    assert_eq!(result, [0x00, 0x00, 0x00, 0x00]);
}

#[test]
fn test_add() {
    let result = assemble("add $t0, $t1, $t2\n", false).unwrap();

    assert_eq!(result[0], 0x01); // op=0, rs=9
    assert_eq!(result[1], 0x2A); // rs/rt=10
    assert_eq!(result[2], 0x40); // rd=8
    assert_eq!(result[3], 0x20); // func=0x20
}

#[test]
fn test_ori() {
    let result = assemble("ori $v0, $zero, 0x1234\n", false).unwrap();

    assert_eq!(result, [0x34, 0x02, 0x12, 0x34]);
}

#[test]
fn test_li_wide_immediate() {
    let result = assemble("li $a0, 0x12345678\n", false).unwrap();

    assert_eq!(result.len(), 8);
    assert_eq!(result[0..4], [0x3C, 0x04, 0x12, 0x34]); // lui $a0, 0x1234
    assert_eq!(result[4..8], [0x34, 0x84, 0x56, 0x78]); // ori $a0, $a0, 0x5678
}

#[test]
fn test_forward_branch() {
    let source = "\
.text
.org 0x00400000
start: beq $t0, $t1, end
       nop
end:
";
    let result = assemble(source, false).unwrap();

    assert_eq!(result.len(), 8);
    assert_eq!(result[0..4], [0x11, 0x09, 0x00, 0x01]); // offset = 1
    assert_eq!(result[4..8], [0x00, 0x00, 0x00, 0x00]); // nop
}

#[test]
fn test_data_section_string() {
    let source = "\
.data
.org 0x10010000
msg: .asciiz \"Hi\"
";
    let result = assemble(source, false).unwrap();

    assert_eq!(result, [0x48, 0x69, 0x00]);
}

#[test]
fn test_countdown_program() {
    let source = "\
.text
.org 0x00400000
main:   li $v0, 4
        la $a0, greeting
        syscall
        li $t0, 3
loop:   beq $t0, $zero, done
        addi $t0, $t0, -1
        b loop
done:   jr $ra
.data
.org 0x10010000
greeting: .asciiz \"Hi!\"
";
    let result = assemble(source, false).unwrap();

    assert_eq!(result.len(), 40);
    assert_eq!(result[0x00..0x04], [0x34, 0x02, 0x00, 0x04]); // ori $v0, $zero, 4
    assert_eq!(result[0x04..0x08], [0x3C, 0x04, 0x10, 0x01]); // lui $a0, 0x1001
    assert_eq!(result[0x08..0x0C], [0x34, 0x84, 0x00, 0x00]); // ori $a0, $a0, 0
    assert_eq!(result[0x0C..0x10], [0x00, 0x00, 0x00, 0x0C]); // syscall
    assert_eq!(result[0x10..0x14], [0x34, 0x08, 0x00, 0x03]); // ori $t0, $zero, 3
    assert_eq!(result[0x14..0x18], [0x11, 0x00, 0x00, 0x02]); // beq $t0, $zero, +2
    assert_eq!(result[0x18..0x1C], [0x21, 0x08, 0xFF, 0xFF]); // addi $t0, $t0, -1
    assert_eq!(result[0x1C..0x20], [0x10, 0x00, 0xFF, 0xFD]); // beq $zero, $zero, -3
    assert_eq!(result[0x20..0x24], [0x03, 0xE0, 0x00, 0x08]); // jr $ra
    assert_eq!(result[0x24..0x28], [0x48, 0x69, 0x21, 0x00]); // "Hi!\0"
}

#[test]
fn test_jump_back_to_start() {
    let source = "\
.text
.org 0x00400000
start: nop
       j start
";
    let result = assemble(source, false).unwrap();

    assert_eq!(result[4..8], [0x08, 0x10, 0x00, 0x00]); // 0x00400000 >> 2
}

#[test]
fn test_word_table_with_labels() {
    let source = "\
.text
.org 0x00400000
entry: jr $ra
.data
.org 0x10010000
table: .word entry, table
";
    let result = assemble(source, false).unwrap();

    assert_eq!(result.len(), 12);
    assert_eq!(result[4..8], [0x00, 0x40, 0x00, 0x00]); // entry
    assert_eq!(result[8..12], [0x10, 0x01, 0x00, 0x00]); // table
}

#[test]
fn test_undefined_label_fails() {
    let result = assemble("j nowhere\n", false);

    assert!(result.is_err());
}

#[test]
fn test_unknown_mnemonic_fails() {
    let result = assemble("fnord $t0\n", false);

    assert!(result.is_err());
}

#[test]
fn test_duplicate_label_fails() {
    let result = assemble("a: nop\na: nop\n", false);

    assert!(result.is_err());
}
