// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power supply observation.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

use super::Slot;

/// Whether the device under diagnosis receives power.
///
/// # Examples
///
/// ```
/// use diag_wizard::types::Power;
///
/// assert_eq!("ON".parse::<Power>().unwrap(), Power::On);
/// assert_eq!(Power::Off.as_str(), "off");
/// assert!("maybe".parse::<Power>().is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Power {
    /// The device is powered.
    On,
    /// The device is not powered.
    Off,
}

impl Power {
    /// All answers, in the order they are offered.
    pub const ALL: [Self; 2] = [Self::On, Self::Off];

    /// Returns the answer string for this value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Power {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            _ => Err(ValueError::InvalidValue {
                slot: Slot::Power,
                value: s.to_string(),
            }),
        }
    }
}
