// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status indicator color observation.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

use super::Slot;

/// Color shown by the device's status LED.
///
/// `None` means the LED stays dark while the device is powered, which is a
/// valid observation distinct from "not yet known".
///
/// # Examples
///
/// ```
/// use diag_wizard::types::LedColor;
///
/// assert_eq!("Yellow".parse::<LedColor>().unwrap(), LedColor::Yellow);
/// assert_eq!("none".parse::<LedColor>().unwrap(), LedColor::None);
/// assert_eq!(LedColor::ALL.len(), 5);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LedColor {
    /// Solid red.
    Red,
    /// Solid green.
    Green,
    /// Solid yellow.
    Yellow,
    /// Solid blue.
    Blue,
    /// LED is off.
    None,
}

impl LedColor {
    /// All answers, in the order they are offered.
    pub const ALL: [Self; 5] = [
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::None,
    ];

    /// Returns the answer string for this value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::None => "none",
        }
    }
}

impl fmt::Display for LedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LedColor {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|color| color.as_str() == normalized)
            .ok_or_else(|| ValueError::InvalidValue {
                slot: Slot::LedColor,
                value: s.to_string(),
            })
    }
}
