// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Symptom slot names.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

use super::{InternalState, LedColor, Power, SlotQuestion};

/// One named symptom field of a [`DeviceState`](crate::state::DeviceState).
///
/// Each slot has a fixed, ordered domain of answers. The wire name is the
/// snake-case form (`led_color`); parsing also accepts the camel-case form
/// (`ledColor`) used by some presentation layers.
///
/// # Examples
///
/// ```
/// use diag_wizard::types::Slot;
///
/// assert_eq!("ledColor".parse::<Slot>().unwrap(), Slot::LedColor);
/// assert_eq!(Slot::InternalState.as_str(), "internal_state");
/// assert_eq!(Slot::Power.allowed_values(), vec!["on", "off"]);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// Power supply state.
    Power,
    /// Status LED color.
    LedColor,
    /// Internal error code.
    InternalState,
}

impl Slot {
    /// All slots, in the order the wizard can ask them.
    pub const ALL: [Self; 3] = [Self::Power, Self::LedColor, Self::InternalState];

    /// Returns the wire name of the slot.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Power => "power",
            Self::LedColor => "led_color",
            Self::InternalState => "internal_state",
        }
    }

    /// Returns the slot's allowed answers in presentation order.
    ///
    /// "unknown" is never part of the domain.
    #[must_use]
    pub fn allowed_values(&self) -> Vec<&'static str> {
        match self {
            Self::Power => Power::ALL.iter().map(Power::as_str).collect(),
            Self::LedColor => LedColor::ALL.iter().map(LedColor::as_str).collect(),
            Self::InternalState => InternalState::ALL
                .iter()
                .map(InternalState::as_str)
                .collect(),
        }
    }

    /// Builds the question that asks for this slot.
    #[must_use]
    pub fn question(&self) -> SlotQuestion {
        SlotQuestion::new(*self)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Slot {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "power" => Ok(Self::Power),
            "led_color" | "ledcolor" => Ok(Self::LedColor),
            "internal_state" | "internalstate" => Ok(Self::InternalState),
            _ => Err(ValueError::UnknownSlot(s.to_string())),
        }
    }
}
