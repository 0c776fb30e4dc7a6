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

/// Device error types
use thiserror::Error;

use crate::core::resource::ResourceKind;

/// Result type for device operations
pub type Result<T> = std::result::Result<T, DeviceError>;

/// Main error type for the device core
///
/// Register access itself has no recoverable error conditions: unmapped
/// offsets read as 0 and ignore writes. Errors only arise from the
/// configuration surface (resource binding, registry lookup).
#[derive(Error, Debug)]
pub enum DeviceError {
    #[error("resource '{name}' of kind {kind:?} not found")]
    ResourceNotFound { name: String, kind: ResourceKind },

    #[error("unknown device type: {0}")]
    UnknownDeviceType(String),
}
