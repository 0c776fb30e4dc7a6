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

//! Named hardware resource resolution
//!
//! The machine configuration hands each device a slice of named resources
//! (memory windows, DMA channels) at initialize time. Devices look up the
//! resources they need by name and kind; a missing entry is a configuration
//! error, not a runtime condition.
//!
//! The MDEC consumes three resources: `"mem"` (its mapped register window),
//! `"dma_in"` (inbound command stream) and `"dma_out"` (outbound response
//! stream).

use crate::core::error::{DeviceError, Result};

/// Kind of a named hardware resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// Memory-mapped register window
    MemoryRegion,
    /// DMA channel
    DmaChannel,
}

/// A named hardware resource bound to a device instance
///
/// Memory regions carry the first byte and byte length of the mapped
/// window; DMA channels carry the channel index in `base` (with `size` 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    /// Resource name, unique within one device's resource list
    pub name: &'static str,

    /// Resource kind
    pub kind: ResourceKind,

    /// Memory regions: physical address of the first mapped byte.
    /// DMA channels: channel index.
    pub base: u32,

    /// Memory regions: window size in bytes. DMA channels: unused (0).
    pub size: u32,
}

impl Resource {
    /// Describe a memory-mapped register window
    pub fn memory(name: &'static str, base: u32, size: u32) -> Self {
        Self {
            name,
            kind: ResourceKind::MemoryRegion,
            base,
            size,
        }
    }

    /// Describe a DMA channel
    pub fn dma(name: &'static str, channel: u32) -> Self {
        Self {
            name,
            kind: ResourceKind::DmaChannel,
            base: channel,
            size: 0,
        }
    }

    /// Last byte address of a memory window (inclusive)
    #[inline(always)]
    pub fn end(&self) -> u32 {
        self.base + self.size.saturating_sub(1)
    }
}

/// Look up a resource by name and kind
///
/// # Arguments
///
/// * `resources` - Resource list bound to the device instance
/// * `name` - Resource name to resolve
/// * `kind` - Expected resource kind
///
/// # Errors
///
/// Returns [`DeviceError::ResourceNotFound`] if no entry matches both name
/// and kind. This surfaces a machine-configuration mistake; devices
/// propagate it out of `initialize` rather than handling it.
pub fn resource_get<'a>(
    resources: &'a [Resource],
    name: &str,
    kind: ResourceKind,
) -> Result<&'a Resource> {
    resources
        .iter()
        .find(|res| res.name == name && res.kind == kind)
        .ok_or_else(|| {
            log::error!("resource '{}' ({:?}) missing from configuration", name, kind);
            DeviceError::ResourceNotFound {
                name: name.to_string(),
                kind,
            }
        })
}
