// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed answers for a single slot.
//!
//! A [`SlotValue`] is the validated form of an answer. It is the only thing
//! that can be written into a [`DeviceState`](super::DeviceState), either
//! directly through [`DeviceState::apply`](super::DeviceState::apply) or by
//! parsing a raw answer string through
//! [`DeviceState::set_slot`](super::DeviceState::set_slot).
//!
//! # Examples
//!
//! ```
//! use diag_wizard::state::SlotValue;
//! use diag_wizard::types::{LedColor, Slot};
//!
//! let value = SlotValue::parse(Slot::LedColor, "Yellow").unwrap();
//! assert_eq!(value, SlotValue::LedColor(LedColor::Yellow));
//! assert_eq!(value.slot(), Slot::LedColor);
//! assert_eq!(value.as_str(), "yellow");
//!
//! assert!(SlotValue::parse(Slot::Power, "standby").is_err());
//! ```

use std::fmt;

use crate::error::ValueError;
use crate::types::{InternalState, LedColor, Power, Slot};

/// A validated value for one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(tag = "slot", content = "value", rename_all = "snake_case")]
pub enum SlotValue {
    /// Power supply state.
    Power(Power),
    /// Status LED color.
    LedColor(LedColor),
    /// Internal error code.
    InternalState(InternalState),
}

impl SlotValue {
    /// Parses a raw answer for `slot`.
    ///
    /// The answer is trimmed and lower-cased before matching.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidValue` if the answer is not in the slot's
    /// domain.
    pub fn parse(slot: Slot, value: &str) -> Result<Self, ValueError> {
        match slot {
            Slot::Power => value.parse().map(Self::Power),
            Slot::LedColor => value.parse().map(Self::LedColor),
            Slot::InternalState => value.parse().map(Self::InternalState),
        }
    }

    /// Returns the slot this value belongs to.
    #[must_use]
    pub const fn slot(&self) -> Slot {
        match self {
            Self::Power(_) => Slot::Power,
            Self::LedColor(_) => Slot::LedColor,
            Self::InternalState(_) => Slot::InternalState,
        }
    }

    /// Returns the lower-case answer string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Power(v) => v.as_str(),
            Self::LedColor(v) => v.as_str(),
            Self::InternalState(v) => v.as_str(),
        }
    }
}

impl fmt::Display for SlotValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.slot(), self.as_str())
    }
}

impl From<Power> for SlotValue {
    fn from(value: Power) -> Self {
        Self::Power(value)
    }
}

impl From<LedColor> for SlotValue {
    fn from(value: LedColor) -> Self {
        Self::LedColor(value)
    }
}

impl From<InternalState> for SlotValue {
    fn from(value: InternalState) -> Self {
        Self::InternalState(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_routes_to_slot_domain() {
        assert_eq!(
            SlotValue::parse(Slot::Power, "OFF").unwrap(),
            SlotValue::Power(Power::Off)
        );
        assert_eq!(
            SlotValue::parse(Slot::InternalState, "errfile").unwrap(),
            SlotValue::InternalState(InternalState::ErrFile)
        );
    }

    #[test]
    fn parse_rejects_value_from_other_slot() {
        // "red" is valid for the LED but not for power
        let err = SlotValue::parse(Slot::Power, "red").unwrap_err();
        assert_eq!(
            err,
            ValueError::InvalidValue {
                slot: Slot::Power,
                value: "red".to_string(),
            }
        );
    }

    #[test]
    fn display_includes_slot() {
        assert_eq!(SlotValue::from(LedColor::Blue).to_string(), "led_color=blue");
    }

    #[test]
    fn serde_tagged_form() {
        let json = serde_json::to_value(SlotValue::from(Power::On)).unwrap();
        assert_eq!(json, serde_json::json!({ "slot": "power", "value": "on" }));
    }
}
