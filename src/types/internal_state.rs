// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Internal error code observation.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

use super::Slot;

/// Internal error code reported by the device's service interface.
///
/// Only asked when the status LED is yellow.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum InternalState {
    /// Firmware image is corrupt.
    ErrFile,
    /// Bootloader jump address is wrong.
    ErrAddress,
}

impl InternalState {
    /// All answers, in the order they are offered.
    pub const ALL: [Self; 2] = [Self::ErrFile, Self::ErrAddress];

    /// Returns the answer string for this value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ErrFile => "errfile",
            Self::ErrAddress => "erraddress",
        }
    }
}

impl fmt::Display for InternalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InternalState {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "errfile" => Ok(Self::ErrFile),
            "erraddress" => Ok(Self::ErrAddress),
            _ => Err(ValueError::InvalidValue {
                slot: Slot::InternalState,
                value: s.to_string(),
            }),
        }
    }
}
