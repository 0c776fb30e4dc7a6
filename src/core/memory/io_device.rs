// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! I/O Device Trait
//!
//! This module defines a trait-based abstraction for memory-mapped I/O
//! devices. By implementing the `IoDevice` trait, a peripheral can be
//! registered with the machine's memory bus without the bus having explicit
//! knowledge of the device type.
//!
//! # Address Translation
//!
//! The bus translates physical addresses to device-relative offsets before
//! calling trait methods. For example:
//!
//! - Device address range: `0x1F801820 - 0x1F801827`
//! - Physical address: `0x1F801824`
//! - Offset passed to device: `0x04`

use crate::core::error::Result;

/// Trait for memory-mapped I/O devices
///
/// This trait is the `{read, write}` capability a device exposes over its
/// mapped register window. Each device declares its address range and
/// implements 32-bit register access; the bus routes any access within that
/// range to the device with a window-relative offset.
///
/// The methods return `Result` because that is the bus-wide contract, but a
/// device is free to tolerate out-of-range offsets instead of failing — the
/// MDEC does exactly that, reading unmapped offsets as 0 and ignoring
/// unmapped writes.
pub trait IoDevice {
    /// Get the address range this device responds to
    ///
    /// Returns `(start, end)` physical addresses, both inclusive. The bus
    /// routes any access within this range to this device.
    fn address_range(&self) -> (u32, u32);

    /// Check if this device contains the given physical address
    fn contains(&self, addr: u32) -> bool {
        let (start, end) = self.address_range();
        addr >= start && addr <= end
    }

    /// Read a 32-bit value from a device register
    ///
    /// # Arguments
    ///
    /// * `offset` - Offset from device base address (4-byte aligned)
    fn read_register(&self, offset: u32) -> Result<u32>;

    /// Write a 32-bit value to a device register
    ///
    /// # Arguments
    ///
    /// * `offset` - Offset from device base address (4-byte aligned)
    /// * `value` - 32-bit value to write
    fn write_register(&mut self, offset: u32, value: u32) -> Result<()>;

    /// Optional: Device name for debugging
    fn name(&self) -> &str {
        "Unknown Device"
    }
}
