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

mod ast_builder;

use crate::ast::*;
use crate::errors::AssemblyError;
use anyhow::Result;
use ast_builder::AstBuilder;
use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

// Derive the parser from our grammar file.
#[derive(Parser)]
#[grammar = "./grammar.pest"]
pub struct MipsParser;

// Main parsing function that takes the entire source code string.
pub fn parse_source(source: &str) -> Result<Vec<AssemblyLine>> {
    let pairs = MipsParser::parse(Rule::program, source).map_err(AssemblyError::PestError)?;
    let mut ast = Vec::new();

    for line_pair in pairs
        .flatten()
        .filter(|p| p.as_rule() == Rule::line_content)
    {
        let mut assembly_line = AssemblyLine {
            line_number: line_pair.as_span().start_pos().line_col().0,
            ..AssemblyLine::default()
        };

        for pair in line_pair.into_inner() {
            match pair.as_rule() {
                Rule::label => {
                    assembly_line.label = pair.into_inner().next().map(|p| p.as_str().to_string());
                }
                Rule::instruction => {
                    assembly_line.instruction = Some(build_instruction(pair)?);
                }
                Rule::directive => {
                    assembly_line.directive = Some(build_directive(pair)?);
                }
                _ => {}
            }
        }

        // Only add non-empty lines to our AST
        if assembly_line.label.is_some()
            || assembly_line.instruction.is_some()
            || assembly_line.directive.is_some()
        {
            ast.push(assembly_line);
        }
    }

    Ok(ast)
}

fn build_instruction(pair: Pair<Rule>) -> Result<Instruction> {
    AstBuilder::new(pair).build_instruction()
}

fn build_directive(pair: Pair<Rule>) -> Result<Directive> {
    let line = pair.as_span().start_pos().line_col().0;
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| AssemblyError::SemanticError {
            line,
            reason: "Expected a directive body.".to_string(),
        })?;
    AstBuilder::new(inner).build_directive()
}

// ------------- unit tests -------------
