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

//! Core emulation components
//!
//! This module contains the MDEC device core and the narrow interfaces it
//! shares with the surrounding framework:
//! - MDEC (register file, MMIO decode, DMA bridge, lifecycle)
//! - Memory bus device trait (MMIO routing)
//! - DMA endpoint traits (word transfer ports)
//! - Clock (cycle accounting)
//! - Resource resolution (named hardware resources)
//! - Device registry (type name to factory)

pub mod clock;
pub mod device;
pub mod dma;
pub mod error;
pub mod mdec;
pub mod memory;
pub mod resource;

// Re-export commonly used types
pub use clock::{Clock, CycleCounter};
pub use device::{Controller, DeviceRegistry, LifecycleState, Peripheral};
pub use dma::{DmaReadPort, DmaWritePort};
pub use error::{DeviceError, Result};
pub use mdec::Mdec;
pub use memory::IoDevice;
pub use resource::{resource_get, Resource, ResourceKind};
