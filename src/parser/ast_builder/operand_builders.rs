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
use crate::parser::Rule;
use crate::parser::ast_builder::utility_functions::*;
use anyhow::Result;
use pest::iterators::Pair;

// Helper to build an Operand from a pest Pair
pub fn build_operand(pair: Pair<Rule>) -> Result<Operand> {
    let line = pair.as_span().start_pos().line_col().0;
    let inner_pair = pair
        .into_inner()
        .next()
        .ok_or_else(|| AssemblyError::BadOperand {
            line,
            reason: "Expected an inner operand rule.".to_string(),
        })?;
    match inner_pair.as_rule() {
        Rule::register => build_register(inner_pair),
        Rule::number => build_immediate(inner_pair),
        Rule::identifier => build_identifier(inner_pair),
        Rule::memory => build_memory(inner_pair),
        _ => unreachable!("Unknown operand rule: {:?}", inner_pair.as_rule()),
    }
}

// build a register operand from a pair
pub fn build_register(pair: Pair<Rule>) -> Result<Operand> {
    let line = pair.as_span().start_pos().line_col().0;
    let name = pair.as_str();
    let reg = Register::parse(name).ok_or_else(|| AssemblyError::BadOperand {
        line,
        reason: format!("Invalid register name: {}", name),
    })?;
    Ok(Operand::Register(reg))
}

// build an immediate operand
pub fn build_immediate(pair: Pair<Rule>) -> Result<Operand> {
    let line = pair.as_span().start_pos().line_col().0;
    let value = parse_number(pair.as_str(), line)?;
    Ok(Operand::Immediate(value))
}

// build a label operand
pub fn build_identifier(pair: Pair<Rule>) -> Result<Operand> {
    Ok(Operand::Label(pair.as_str().to_string()))
}

// build an offset(base) memory operand
pub fn build_memory(pair: Pair<Rule>) -> Result<Operand> {
    let line = pair.as_span().start_pos().line_col().0;
    let mut inner = pair.into_inner();
    let offset_pair = inner.next().ok_or_else(|| AssemblyError::BadOperand {
        line,
        reason: "Expected an offset for memory addressing.".to_string(),
    })?;
    let base_pair = inner.next().ok_or_else(|| AssemblyError::BadOperand {
        line,
        reason: "Expected a base register for memory addressing.".to_string(),
    })?;

    let offset = parse_number(offset_pair.as_str(), line)?;
    let base = Register::parse(base_pair.as_str()).ok_or_else(|| AssemblyError::BadOperand {
        line,
        reason: format!("Invalid base register: {}", base_pair.as_str()),
    })?;

    Ok(Operand::Memory(offset, base))
}

// build an Operand from a directive value (number or label)
pub fn build_value(pair: Pair<Rule>) -> Result<Operand> {
    let line = pair.as_span().start_pos().line_col().0;
    let inner_pair = pair
        .into_inner()
        .next()
        .ok_or_else(|| AssemblyError::BadOperand {
            line,
            reason: "Expected a value.".to_string(),
        })?;
    match inner_pair.as_rule() {
        Rule::number => build_immediate(inner_pair),
        Rule::identifier => build_identifier(inner_pair),
        _ => unreachable!("Unknown value rule: {:?}", inner_pair.as_rule()),
    }
}
