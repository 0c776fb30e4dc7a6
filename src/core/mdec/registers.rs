// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! MDEC register bit layouts
//!
//! Both registers are packed 32-bit values. The layouts must stay bit-exact
//! for guest compatibility, so each field is a named shift/mask accessor on
//! the raw word rather than a separate struct field.
//!
//! ## Status Register (read-only from the bus)
//!
//! ```text
//! 31:    Data-out FIFO empty
//! 30:    Data-in FIFO full
//! 29:    Command busy
//! 28:    Data-in request
//! 27:    Data-out request
//! 25-26: Data output depth
//! 24:    Data output signed
//! 23:    Data output bit-15
//! 19-22: Not used
//! 16-18: Current block (0-3=Y1-Y4, 4=Cr, 5=Cb)
//! 0-15:  Number of pending parameter words
//! ```
//!
//! ## Control Register (write-only from the bus)
//!
//! ```text
//! 31:    Reset request (edge effect, not retained)
//! 30:    Enable data-in request
//! 29:    Enable data-out request
//! 0-28:  Unknown, stored verbatim until the next reset
//! ```

/// First luminance block (Y1)
pub const BLOCK_Y1: u32 = 0;
/// Second luminance block (Y2)
pub const BLOCK_Y2: u32 = 1;
/// Third luminance block (Y3)
pub const BLOCK_Y3: u32 = 2;
/// Fourth luminance block (Y4)
pub const BLOCK_Y4: u32 = 3;
/// Cr chrominance block
pub const BLOCK_CR: u32 = 4;
/// Cb chrominance block
pub const BLOCK_CB: u32 = 5;

/// Block index loaded on reset (start of Y decode; aliases [`BLOCK_CR`])
pub const BLOCK_Y: u32 = 4;

/// MDEC status register
///
/// Holds the packed status word the bus reads at offset 4. Freshly
/// constructed status is all zeros; reset loads `0x8004_0000` (FIFO-empty
/// set, current block = [`BLOCK_Y`]). The two states are distinct and guest
/// software can tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusRegister {
    raw: u32,
}

impl StatusRegister {
    const CURRENT_BLOCK_SHIFT: u32 = 16;
    const CURRENT_BLOCK_MASK: u32 = 0x7;
    const DATA_OUTPUT_BIT15: u32 = 1 << 23;
    const DATA_OUTPUT_SIGNED: u32 = 1 << 24;
    const DATA_OUTPUT_DEPTH_SHIFT: u32 = 25;
    const DATA_OUTPUT_DEPTH_MASK: u32 = 0x3;
    const DATA_OUT_REQUEST: u32 = 1 << 27;
    const DATA_IN_REQUEST: u32 = 1 << 28;
    const COMMAND_BUSY: u32 = 1 << 29;
    const DATA_IN_FIFO_FULL: u32 = 1 << 30;
    const DATA_OUT_FIFO_EMPTY: u32 = 1 << 31;

    /// Create a status register with all bits clear
    pub fn new() -> Self {
        Self { raw: 0 }
    }

    /// Wrap a raw status word (debug/inspection use)
    pub fn from_raw(raw: u32) -> Self {
        Self { raw }
    }

    /// Raw register value as the bus sees it
    #[inline(always)]
    pub fn raw(&self) -> u32 {
        self.raw
    }

    /// Number of pending parameter words (bits 0-15; always 0 in this core)
    #[inline(always)]
    pub fn num_param_words(&self) -> u16 {
        (self.raw & 0xFFFF) as u16
    }

    /// Current block index (bits 16-18)
    #[inline(always)]
    pub fn current_block(&self) -> u32 {
        (self.raw >> Self::CURRENT_BLOCK_SHIFT) & Self::CURRENT_BLOCK_MASK
    }

    /// Data output bit-15 flag (bit 23)
    #[inline(always)]
    pub fn data_output_bit15(&self) -> bool {
        (self.raw & Self::DATA_OUTPUT_BIT15) != 0
    }

    /// Data output signed flag (bit 24)
    #[inline(always)]
    pub fn data_output_signed(&self) -> bool {
        (self.raw & Self::DATA_OUTPUT_SIGNED) != 0
    }

    /// Data output depth (bits 25-26)
    #[inline(always)]
    pub fn data_output_depth(&self) -> u32 {
        (self.raw >> Self::DATA_OUTPUT_DEPTH_SHIFT) & Self::DATA_OUTPUT_DEPTH_MASK
    }

    /// Data-out request flag (bit 27)
    #[inline(always)]
    pub fn data_out_request(&self) -> bool {
        (self.raw & Self::DATA_OUT_REQUEST) != 0
    }

    /// Data-in request flag (bit 28)
    #[inline(always)]
    pub fn data_in_request(&self) -> bool {
        (self.raw & Self::DATA_IN_REQUEST) != 0
    }

    /// Command busy flag (bit 29)
    #[inline(always)]
    pub fn command_busy(&self) -> bool {
        (self.raw & Self::COMMAND_BUSY) != 0
    }

    /// Data-in FIFO full flag (bit 30)
    #[inline(always)]
    pub fn data_in_fifo_full(&self) -> bool {
        (self.raw & Self::DATA_IN_FIFO_FULL) != 0
    }

    /// Data-out FIFO empty flag (bit 31)
    #[inline(always)]
    pub fn data_out_fifo_empty(&self) -> bool {
        (self.raw & Self::DATA_OUT_FIFO_EMPTY) != 0
    }

    /// Load the power-on/reset state
    ///
    /// Clears every field, then sets the current block to [`BLOCK_Y`] and
    /// marks the output FIFO empty. Resulting raw value: `0x8004_0000`.
    pub fn reset(&mut self) {
        self.raw = (BLOCK_Y << Self::CURRENT_BLOCK_SHIFT) | Self::DATA_OUT_FIFO_EMPTY;
    }
}

/// MDEC control register
///
/// Holds the last word the bus wrote to offset 4. Bits 29-31 have defined
/// meanings; the remaining bits are unknown hardware state and are stored
/// verbatim until a reset clears the register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlRegister {
    raw: u32,
}

impl ControlRegister {
    const EN_DATA_OUT_REQUEST: u32 = 1 << 29;
    const EN_DATA_IN_REQUEST: u32 = 1 << 30;
    const RESET: u32 = 1 << 31;

    /// Create a control register with all bits clear
    pub fn new() -> Self {
        Self { raw: 0 }
    }

    /// Raw register value
    #[inline(always)]
    pub fn raw(&self) -> u32 {
        self.raw
    }

    /// Store a word written by the bus, verbatim
    pub fn write(&mut self, value: u32) {
        self.raw = value;
    }

    /// Reset request (bit 31)
    #[inline(always)]
    pub fn reset_requested(&self) -> bool {
        (self.raw & Self::RESET) != 0
    }

    /// Enable data-in request (bit 30)
    #[inline(always)]
    pub fn data_in_request_enabled(&self) -> bool {
        (self.raw & Self::EN_DATA_IN_REQUEST) != 0
    }

    /// Enable data-out request (bit 29)
    #[inline(always)]
    pub fn data_out_request_enabled(&self) -> bool {
        (self.raw & Self::EN_DATA_OUT_REQUEST) != 0
    }

    /// Load the power-on/reset state (all bits clear)
    pub fn reset(&mut self) {
        self.raw = 0;
    }
}
