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

//! PlayStation 1 MDEC peripheral model
//!
//! This library models the register-level and DMA-level behavior of the
//! PlayStation's MDEC (macroblock decoder) as a pluggable device for a
//! machine-emulator framework: the MMIO register contract, the DMA bridge,
//! and the initialize/reset/deinit lifecycle.
//!
//! The decode pipeline itself is intentionally absent: command writes are
//! accepted but produce no output, and response reads always return 0.
//! Guest software talking to the register file still sees bit-exact status
//! and control behavior.
//!
//! # Example
//!
//! ```
//! use psx_mdec::core::device::Controller;
//! use psx_mdec::core::mdec::Mdec;
//! use psx_mdec::core::memory::IoDevice;
//!
//! let mut mdec = Mdec::new();
//! mdec.reset();
//!
//! // Status register after reset: FIFO-empty set, current block = 4
//! assert_eq!(mdec.read_register(Mdec::STATUS).unwrap(), 0x8004_0000);
//! ```

pub mod core;
