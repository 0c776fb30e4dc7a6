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

//! Device lifecycle and registration
//!
//! Every pluggable peripheral goes through the same lifecycle driven by the
//! owning framework: it is created by a factory from the [`DeviceRegistry`],
//! bound to its named hardware resources by [`Controller::initialize`],
//! reset any number of times while active, and torn down by
//! [`Controller::deinit`].
//!
//! Registration is an explicit registry consulted by the machine
//! configuration — a map from device-type name to factory function,
//! populated once at startup. There is no global mutable registration state
//! and no registration-order dependency.

use std::collections::HashMap;

use crate::core::dma::{DmaReadPort, DmaWritePort};
use crate::core::error::{DeviceError, Result};
use crate::core::mdec::Mdec;
use crate::core::memory::IoDevice;
use crate::core::resource::Resource;

/// Lifecycle state of a device instance
///
/// `Uninitialized → Active → Terminated`; reset may recur any number of
/// times while `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Created but not yet bound to resources
    Uninitialized,
    /// Bound to resources and reachable from the bus
    Active,
    /// Torn down; bindings released
    Terminated,
}

/// Lifecycle hooks a device exposes to the owning framework
pub trait Controller {
    /// Bind the device to its named hardware resources
    ///
    /// Resolves the resources the device needs from `resources` and stores
    /// the bindings. Does not touch the register file: registers keep their
    /// freshly allocated (all-zero) contents until the first reset.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::ResourceNotFound`] if a required named
    /// resource is absent — a machine-configuration error surfaced by the
    /// resolution layer, not a runtime condition the device recovers from.
    fn initialize(&mut self, resources: &[Resource]) -> Result<()>;

    /// Reset the device to its documented power-on register state
    ///
    /// Invoked by the framework; guest software can trigger the identical
    /// routine through the device's own control register.
    fn reset(&mut self);

    /// Release resource bindings
    ///
    /// The bindings belong to the collaborators that issued them; the device
    /// only drops its handles. Owned memory is freed when the instance is
    /// dropped.
    fn deinit(&mut self);
}

/// Full capability surface of a pluggable peripheral
///
/// Combines the lifecycle hooks with the MMIO `{read, write}` capability,
/// plus optional DMA endpoints for devices that own DMA channels. The
/// concrete device state lives directly behind these trait objects; there is
/// no untyped private-data handle.
pub trait Peripheral: Controller + IoDevice {
    /// Inbound DMA endpoint, if this device has one
    fn dma_write_port(&mut self) -> Option<&mut dyn DmaWritePort> {
        None
    }

    /// Outbound DMA endpoint, if this device has one
    fn dma_read_port(&mut self) -> Option<&mut dyn DmaReadPort> {
        None
    }
}

/// Factory function producing a fresh, uninitialized device instance
pub type PeripheralFactory = fn() -> Box<dyn Peripheral>;

/// Registry of known device types
///
/// Maps device-type names to factories. The machine configuration consults
/// the registry to instantiate the devices named in its layout, then drives
/// each instance through [`Controller::initialize`].
///
/// # Example
///
/// ```
/// use psx_mdec::core::device::DeviceRegistry;
///
/// let registry = DeviceRegistry::with_builtin();
/// assert!(registry.create("mdec").is_ok());
/// assert!(registry.create("gpu").is_err());
/// ```
pub struct DeviceRegistry {
    factories: HashMap<&'static str, PeripheralFactory>,
}

impl DeviceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Create a registry populated with the built-in device types
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register("mdec", || Box::new(Mdec::new()));
        registry
    }

    /// Register a device type
    ///
    /// Re-registering a name replaces the previous factory.
    pub fn register(&mut self, name: &'static str, factory: PeripheralFactory) {
        if self.factories.insert(name, factory).is_some() {
            log::warn!("device type '{}' re-registered", name);
        }
        log::debug!("device type '{}' registered", name);
    }

    /// Instantiate a device by type name
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::UnknownDeviceType`] if the name was never
    /// registered.
    pub fn create(&self, name: &str) -> Result<Box<dyn Peripheral>> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| DeviceError::UnknownDeviceType(name.to_string()))?;
        Ok(factory())
    }
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_knows_mdec() {
        let registry = DeviceRegistry::with_builtin();

        let device = registry.create("mdec").unwrap();
        assert_eq!(device.name(), "mdec");
    }

    #[test]
    fn test_unknown_device_type() {
        let registry = DeviceRegistry::with_builtin();

        let result = registry.create("gpu");
        assert!(matches!(result, Err(DeviceError::UnknownDeviceType(_))));
    }

    #[test]
    fn test_empty_registry() {
        let registry = DeviceRegistry::new();
        assert!(registry.create("mdec").is_err());
    }

    #[test]
    fn test_created_device_exposes_dma_ports() {
        let registry = DeviceRegistry::with_builtin();
        let mut device = registry.create("mdec").unwrap();

        assert!(device.dma_write_port().is_some());
        assert!(device.dma_read_port().is_some());
    }
}
