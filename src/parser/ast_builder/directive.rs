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

use crate::ast::Directive;
use crate::parser::ast_builder::AstBuilder;
use crate::parser::ast_builder::constants::*;
use crate::parser::ast_builder::utility_functions::*;
use anyhow::{Context, Result};

impl<'a> AstBuilder<'a> {
    // build an origin directive
    pub fn build_org_directive(mut self) -> Result<Directive> {
        let addr = self.pop_number().context(INVALID_OP_MSG)?;
        check_unsigned_32(addr, self.line_number).context(".org address must be unsigned.")?;
        Ok(Directive::Org(addr as u32))
    }

    // build a word data directive
    pub fn build_word_directive(mut self) -> Result<Directive> {
        let words = self.expect_value_list().context("Invalid word list.")?;
        Ok(Directive::Word(words))
    }

    // build a byte data directive; values are truncated to 8 bits on emission
    pub fn build_byte_directive(mut self) -> Result<Directive> {
        let bytes = self.expect_number_list().context("Invalid byte list.")?;
        Ok(Directive::Byte(bytes))
    }

    // build a half-word data directive; values are truncated to 16 bits on emission
    pub fn build_half_directive(mut self) -> Result<Directive> {
        let halves = self.expect_number_list().context("Invalid half-word list.")?;
        Ok(Directive::Half(halves))
    }

    pub fn build_ascii_directive(mut self) -> Result<Directive> {
        let text = self.expect_string_literal().context("Invalid string.")?;
        Ok(Directive::Ascii(text))
    }

    pub fn build_asciiz_directive(mut self) -> Result<Directive> {
        let text = self.expect_string_literal().context("Invalid string.")?;
        Ok(Directive::Asciiz(text))
    }

    // build a space/skip reservation directive
    pub fn build_space_directive(mut self) -> Result<Directive> {
        let count = self.pop_number().context(INVALID_OP_MSG)?;
        check_unsigned_32(count, self.line_number)
            .context(".space count must be unsigned.")?;
        Ok(Directive::Space(count as u32))
    }

    pub fn build_align_directive(mut self) -> Result<Directive> {
        let exponent = self.pop_number().context(INVALID_OP_MSG)?;
        check_alignment_exponent(exponent, self.line_number)?;
        Ok(Directive::Align(exponent as u32))
    }
}
