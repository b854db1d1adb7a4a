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

use std::fmt;

pub const TEXT_BASE: u32 = 0x0040_0000;
pub const DATA_BASE: u32 = 0x1001_0000;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Section {
    Text,
    Data,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Text => write!(f, "TEXT"),
            Section::Data => write!(f, "DATA"),
        }
    }
}

#[derive(Debug, Copy, Clone)]
pub struct SectionCounter {
    pub base: u32,
    pub size: u32,
}

impl SectionCounter {
    fn new(base: u32) -> Self {
        Self { base, size: 0 }
    }

    pub fn end(&self) -> u32 {
        self.base.wrapping_add(self.size)
    }
}

// TEXT and DATA cursors plus the active-section selector. The current
// address is always the active section's base + size, so switching sections
// restores that section's cursor.
#[derive(Debug, Clone)]
pub struct AddrCounter {
    text: SectionCounter,
    data: SectionCounter,
    active: Section,
}

impl AddrCounter {
    pub fn new() -> Self {
        Self {
            text: SectionCounter::new(TEXT_BASE),
            data: SectionCounter::new(DATA_BASE),
            active: Section::Text,
        }
    }

    pub fn active_section(&self) -> Section {
        self.active
    }

    pub fn switch_to(&mut self, section: Section) {
        self.active = section;
    }

    pub fn current_address(&self) -> u32 {
        self.counter(self.active).end()
    }

    pub fn advance(&mut self, bytes: u32) {
        let counter = self.counter_mut(self.active);
        counter.size = counter.size.wrapping_add(bytes);
    }

    // .org rebases the active section, but only while it is still empty.
    pub fn set_origin(&mut self, addr: u32) {
        let counter = self.counter_mut(self.active);
        if counter.size == 0 {
            counter.base = addr;
        }
    }

    pub fn text_size(&self) -> u32 {
        self.text.size
    }

    pub fn data_size(&self) -> u32 {
        self.data.size
    }

    // Zero bytes needed to reach the next 2^k boundary from the current address.
    pub fn align_padding(&self, exponent: u32) -> u32 {
        let boundary = 1u32 << exponent;
        let mask = boundary - 1;
        (boundary - (self.current_address() & mask)) & mask
    }

    fn counter(&self, section: Section) -> &SectionCounter {
        match section {
            Section::Text => &self.text,
            Section::Data => &self.data,
        }
    }

    fn counter_mut(&mut self, section: Section) -> &mut SectionCounter {
        match section {
            Section::Text => &mut self.text,
            Section::Data => &mut self.data,
        }
    }
}

impl Default for AddrCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bases() {
        let counters = AddrCounter::new();
        assert_eq!(counters.active_section(), Section::Text);
        assert_eq!(counters.current_address(), TEXT_BASE);
    }

    #[test]
    fn test_switch_restores_cursor() {
        let mut counters = AddrCounter::new();
        counters.advance(8);
        counters.switch_to(Section::Data);
        assert_eq!(counters.current_address(), DATA_BASE);
        counters.advance(3);
        counters.switch_to(Section::Text);
        assert_eq!(counters.current_address(), TEXT_BASE + 8);
        counters.switch_to(Section::Data);
        assert_eq!(counters.current_address(), DATA_BASE + 3);
    }

    #[test]
    fn test_set_origin_only_while_empty() {
        let mut counters = AddrCounter::new();
        counters.set_origin(0x1000);
        assert_eq!(counters.current_address(), 0x1000);
        counters.advance(4);
        counters.set_origin(0x2000);
        assert_eq!(counters.current_address(), 0x1004);
    }

    #[test]
    fn test_align_padding() {
        let mut counters = AddrCounter::new();
        counters.switch_to(Section::Data);
        counters.advance(3);
        assert_eq!(counters.align_padding(2), 1);
        counters.advance(1);
        assert_eq!(counters.align_padding(2), 0);
        assert_eq!(counters.align_padding(0), 0);
    }
}
