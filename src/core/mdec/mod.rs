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

//! MDEC (Macroblock Decoder) Implementation
//!
//! The MDEC decompresses JPEG-like macroblock data for FMV playback. This
//! implementation models its register file, MMIO decode, DMA bridge and
//! lifecycle; the decode pipeline itself is absent. Commands are accepted
//! without effect and responses read as 0, so the busy and FIFO-full flags
//! are never raised. Guest software that only probes the register contract
//! behaves identically against this shim.
//!
//! ## Register Layout
//!
//! Two word-wide registers, relative to the device's mapped window:
//!
//! | Offset | Write   | Read     |
//! |--------|---------|----------|
//! | 0x00   | COMMAND | RESPONSE |
//! | 0x04   | CONTROL | STATUS   |
//!
//! Bit layouts live in [`registers`].
//!
//! ## DMA
//!
//! The device owns DMA channels 0 (MDEC In) and 1 (MDEC Out). Both endpoints
//! re-dispatch through the MMIO logic at offset 0 and charge one clock cycle
//! per word; see [`crate::core::dma`].
//!
//! ## References
//!
//! - [PSX-SPX: Macroblock Decoder](http://problemkaputt.de/psx-spx.htm#macroblockdecodermdec)

pub mod registers;


use crate::core::clock::Clock;
use crate::core::device::{Controller, LifecycleState, Peripheral};
use crate::core::dma::{DmaReadPort, DmaWritePort};
use crate::core::error::Result;
use crate::core::memory::IoDevice;
use crate::core::resource::{resource_get, Resource, ResourceKind};
use registers::{ControlRegister, StatusRegister};

/// MDEC device instance
///
/// Owns the status and control registers plus the resource bindings made at
/// initialize time. All register mutation flows through the [`IoDevice`] and
/// DMA port contracts; nothing else touches the register file.
///
/// # Examples
///
/// ```
/// use psx_mdec::core::device::Controller;
/// use psx_mdec::core::mdec::Mdec;
///
/// let mut mdec = Mdec::new();
/// assert_eq!(mdec.status_raw(), 0);
///
/// mdec.reset();
/// assert_eq!(mdec.status_raw(), 0x8004_0000);
/// ```
pub struct Mdec {
    /// Status register (bus offset 4, read)
    status: StatusRegister,

    /// Control register (bus offset 4, write)
    control: ControlRegister,

    /// Mapped register window ("mem" resource), bound at initialize
    region: Option<Resource>,

    /// Inbound DMA channel binding ("dma_in" resource)
    dma_in: Option<Resource>,

    /// Outbound DMA channel binding ("dma_out" resource)
    dma_out: Option<Resource>,

    /// Lifecycle state
    state: LifecycleState,
}

impl Mdec {
    /// Command register offset (write)
    pub const COMMAND: u32 = 0x00;

    /// Response register offset (read)
    pub const RESPONSE: u32 = 0x00;

    /// Control register offset (write)
    pub const CONTROL: u32 = 0x04;

    /// Status register offset (read)
    pub const STATUS: u32 = 0x04;

    /// Create a new MDEC instance
    ///
    /// Both registers start all-zero. This is the freshly allocated state,
    /// distinct from the post-reset state (`reset` loads the current-block
    /// and FIFO-empty fields).
    pub fn new() -> Self {
        Self {
            status: StatusRegister::new(),
            control: ControlRegister::new(),
            region: None,
            dma_in: None,
            dma_out: None,
            state: LifecycleState::Uninitialized,
        }
    }

    /// Raw status register value (debug/inspection)
    #[inline(always)]
    pub fn status_raw(&self) -> u32 {
        self.status.raw()
    }

    /// Raw control register value (debug/inspection)
    ///
    /// The control register is write-only from the bus; this accessor exists
    /// for the emulator side.
    #[inline(always)]
    pub fn control_raw(&self) -> u32 {
        self.control.raw()
    }

    /// Current lifecycle state
    #[inline(always)]
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Bound inbound DMA channel index, if initialized
    pub fn dma_in_channel(&self) -> Option<u32> {
        self.dma_in.map(|res| res.base)
    }

    /// Bound outbound DMA channel index, if initialized
    pub fn dma_out_channel(&self) -> Option<u32> {
        self.dma_out.map(|res| res.base)
    }

    /// Reset both registers to their documented power-on state
    ///
    /// Shared by the framework reset hook and the control-register reset
    /// bit, so the two paths cannot diverge.
    fn reset_registers(&mut self) {
        self.status.reset();
        self.control.reset();
        log::debug!("MDEC reset: status=0x{:08X}", self.status.raw());
    }
}

impl Default for Mdec {
    fn default() -> Self {
        Self::new()
    }
}

impl IoDevice for Mdec {
    fn address_range(&self) -> (u32, u32) {
        match self.region {
            Some(region) => (region.base, region.end()),
            None => (0, 0),
        }
    }

    fn read_register(&self, offset: u32) -> Result<u32> {
        let value = match offset {
            // Response FIFO: no decode pipeline, nothing ever queued
            Self::RESPONSE => 0,
            Self::STATUS => self.status.raw(),
            // Offsets outside the register pair read as 0
            _ => 0,
        };

        log::trace!("MDEC read [0x{:02X}] -> 0x{:08X}", offset, value);
        Ok(value)
    }

    fn write_register(&mut self, offset: u32, value: u32) -> Result<()> {
        log::trace!("MDEC write [0x{:02X}] = 0x{:08X}", offset, value);

        match offset {
            Self::COMMAND => {
                // Commands are accepted without effect. A future decode
                // pipeline would parse the command word here and start
                // raising the busy/FIFO status flags.
            }
            Self::CONTROL => {
                self.control.write(value);

                // The reset bit acts within this same write and is not
                // retained: both registers come back in their reset state.
                if self.control.reset_requested() {
                    self.reset_registers();
                }
            }
            // Offsets outside the register pair ignore writes
            _ => {}
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "mdec"
    }
}

impl DmaWritePort for Mdec {
    /// Accept one word from the MDEC In channel
    ///
    /// Consumes 1 clk/word, then behaves exactly like an MMIO write to the
    /// command register.
    fn dma_write(&mut self, word: u32, clock: &mut dyn Clock) -> Result<()> {
        clock.consume(1);
        self.write_register(Self::COMMAND, word)
    }
}

impl DmaReadPort for Mdec {
    /// Produce one word for the MDEC Out channel
    ///
    /// Consumes 1 clk/word, then behaves exactly like an MMIO read from the
    /// response register.
    fn dma_read(&mut self, clock: &mut dyn Clock) -> Result<u32> {
        clock.consume(1);
        self.read_register(Self::RESPONSE)
    }
}

impl Controller for Mdec {
    fn initialize(&mut self, resources: &[Resource]) -> Result<()> {
        // Bind the register window
        let mem = resource_get(resources, "mem", ResourceKind::MemoryRegion)?;
        self.region = Some(*mem);

        // Bind the MDEC In DMA channel
        let dma_in = resource_get(resources, "dma_in", ResourceKind::DmaChannel)?;
        self.dma_in = Some(*dma_in);

        // Bind the MDEC Out DMA channel
        let dma_out = resource_get(resources, "dma_out", ResourceKind::DmaChannel)?;
        self.dma_out = Some(*dma_out);

        self.state = LifecycleState::Active;
        log::debug!(
            "MDEC initialized: window 0x{:08X}-0x{:08X}, dma_in={}, dma_out={}",
            mem.base,
            mem.end(),
            dma_in.base,
            dma_out.base
        );
        Ok(())
    }

    fn reset(&mut self) {
        self.reset_registers();
    }

    fn deinit(&mut self) {
        // Bindings are owned by the collaborators; just drop the handles
        self.region = None;
        self.dma_in = None;
        self.dma_out = None;
        self.state = LifecycleState::Terminated;
        log::debug!("MDEC deinitialized");
    }
}

impl Peripheral for Mdec {
    fn dma_write_port(&mut self) -> Option<&mut dyn DmaWritePort> {
        Some(self)
    }

    fn dma_read_port(&mut self) -> Option<&mut dyn DmaReadPort> {
        Some(self)
    }
}
