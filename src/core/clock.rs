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

//! Clock cycle accounting
//!
//! The machine's cycle scheduler owns time; peripherals only charge cycles
//! to it. `consume` is an accounting call, not a scheduling primitive: it
//! never yields or blocks, and all register work completes synchronously on
//! the emulation's single logical thread.

/// Global tick counter type (absolute cycles since reset)
pub type GlobalTicks = u64;

/// Cycle-accounting interface exposed by the machine's clock scheduler
///
/// The MDEC DMA bridge charges one cycle per transferred word through this
/// trait. Implementations accumulate the charge into whatever timing model
/// the surrounding framework uses.
pub trait Clock {
    /// Charge `cycles` cycles to the shared clock
    fn consume(&mut self, cycles: u32);
}

/// Plain accumulating clock
///
/// A minimal `Clock` implementation that simply totals consumed cycles.
/// Useful for harnesses and tests that only need to observe timing cost.
///
/// # Example
///
/// ```
/// use psx_mdec::core::clock::{Clock, CycleCounter};
///
/// let mut clock = CycleCounter::new();
/// clock.consume(3);
/// assert_eq!(clock.total(), 3);
/// ```
#[derive(Debug, Default)]
pub struct CycleCounter {
    /// Total cycles consumed since construction
    total: GlobalTicks,
}

impl CycleCounter {
    /// Create a new counter starting at zero
    pub fn new() -> Self {
        Self { total: 0 }
    }

    /// Total cycles consumed so far
    #[inline(always)]
    pub fn total(&self) -> GlobalTicks {
        self.total
    }
}

impl Clock for CycleCounter {
    fn consume(&mut self, cycles: u32) {
        self.total += GlobalTicks::from(cycles);
    }
}
