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

//! DMA endpoint interfaces
//!
//! The DMA engine (channel registers, transfer scheduling, RAM access) lives
//! in the surrounding machine framework. This module defines the device-side
//! ports it drives: unidirectional, word-oriented endpoints that the engine
//! calls once per transferred word.
//!
//! On the PlayStation the MDEC owns two of the seven DMA channels:
//!
//! | Channel | Device   | Direction    |
//! |---------|----------|--------------|
//! | 0       | MDEC In  | RAM → device |
//! | 1       | MDEC Out | device → RAM |
//!
//! A DMA transfer is not a separate data path into the device. Each endpoint
//! re-enters the same register logic as programmed I/O — an inbound word is
//! a command-register write, an outbound word is a response-register read —
//! and additionally charges one cycle per word to the shared [`Clock`]. The
//! two access mechanisms can therefore never diverge in observable register
//! semantics, only in timing cost.

use crate::core::clock::Clock;
use crate::core::error::Result;

/// Inbound DMA endpoint (RAM → device)
///
/// The DMA engine pushes one word per call. The implementation charges one
/// cycle to `clock` and then handles the word exactly as an MMIO write to
/// its inbound register.
pub trait DmaWritePort {
    /// Accept one word from the DMA engine
    fn dma_write(&mut self, word: u32, clock: &mut dyn Clock) -> Result<()>;
}

/// Outbound DMA endpoint (device → RAM)
///
/// The DMA engine pulls one word per call. The implementation charges one
/// cycle to `clock` and then produces the word exactly as an MMIO read from
/// its outbound register.
pub trait DmaReadPort {
    /// Produce one word for the DMA engine
    fn dma_read(&mut self, clock: &mut dyn Clock) -> Result<u32>;
}
