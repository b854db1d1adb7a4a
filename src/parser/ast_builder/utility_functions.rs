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

use crate::errors::AssemblyError;
use anyhow::Result;

// Parses a `0x` hexadecimal (unsigned) or decimal (signed) 32-bit literal.
// The returned value is always within [-2^31, 2^32).
pub fn parse_number(text: &str, line_num: usize) -> Result<i64> {
    if let Some(digits) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        let value = u32::from_str_radix(digits, 16).map_err(|_| AssemblyError::BadOperand {
            line: line_num,
            reason: format!("Invalid hex value: {}", text),
        })?;
        Ok(i64::from(value))
    } else {
        let value = text
            .parse::<i64>()
            .map_err(|_| AssemblyError::BadOperand {
                line: line_num,
                reason: format!("Invalid decimal value: {}", text),
            })?;
        check_imm32(value, line_num)?;
        Ok(value)
    }
}

pub fn check_imm32(val: i64, line_num: usize) -> Result<()> {
    if val < i64::from(i32::MIN) || val > i64::from(u32::MAX) {
        Err(AssemblyError::BadOperand {
            line: line_num,
            reason: format!("Value does not fit in 32 bits: {}", val),
        }
        .into())
    } else {
        Ok(())
    }
}

pub fn check_unsigned_32(val: i64, line_num: usize) -> Result<()> {
    if val < 0 || val > i64::from(u32::MAX) {
        Err(AssemblyError::BadOperand {
            line: line_num,
            reason: format!(
                "Value must be an unsigned 32 bit value, (max: {}, min: 0)",
                u32::MAX
            ),
        }
        .into())
    } else {
        Ok(())
    }
}

pub fn check_shift_amount(val: i64, line_num: usize) -> Result<()> {
    if !(0..=31).contains(&val) {
        Err(AssemblyError::BadOperand {
            line: line_num,
            reason: "Shift amount must be between 0 and 31 inclusive.".to_string(),
        }
        .into())
    } else {
        Ok(())
    }
}

pub fn check_alignment_exponent(val: i64, line_num: usize) -> Result<()> {
    if !(0..=31).contains(&val) {
        Err(AssemblyError::BadOperand {
            line: line_num,
            reason: ".align exponent must be between 0 and 31 inclusive.".to_string(),
        }
        .into())
    } else {
        Ok(())
    }
}
