// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Symptom tracking for one diagnostic session.

use std::fmt;

use crate::error::{Error, StateError};
use crate::types::{InternalState, LedColor, Power, Slot};

use super::SlotValue;

/// Observed symptoms of the device under diagnosis.
///
/// Every slot starts unknown (`None`). A slot moves from unknown to a
/// concrete value exactly once per session; the only way back to unknown is
/// to discard the state and start over.
///
/// # Examples
///
/// ```
/// use diag_wizard::state::DeviceState;
/// use diag_wizard::types::{Power, Slot};
///
/// let mut state = DeviceState::new();
/// assert_eq!(state.power(), None);
///
/// state.set_slot(Slot::Power, "ON").unwrap();
/// assert_eq!(state.power(), Some(Power::On));
///
/// // Out-of-domain answers are rejected and leave the slot untouched
/// assert!(state.set_slot(Slot::LedColor, "purple").is_err());
/// assert_eq!(state.led_color(), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeviceState {
    power: Option<Power>,
    led_color: Option<LedColor>,
    internal_state: Option<InternalState>,
}

impl DeviceState {
    /// Creates a state with every slot unknown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the power supply state.
    #[must_use]
    pub fn power(&self) -> Option<Power> {
        self.power
    }

    /// Gets the status LED color.
    #[must_use]
    pub fn led_color(&self) -> Option<LedColor> {
        self.led_color
    }

    /// Gets the internal error code.
    #[must_use]
    pub fn internal_state(&self) -> Option<InternalState> {
        self.internal_state
    }

    /// Gets the value of any slot.
    #[must_use]
    pub fn get(&self, slot: Slot) -> Option<SlotValue> {
        match slot {
            Slot::Power => self.power.map(SlotValue::Power),
            Slot::LedColor => self.led_color.map(SlotValue::LedColor),
            Slot::InternalState => self.internal_state.map(SlotValue::InternalState),
        }
    }

    /// Returns `true` if the slot holds a value.
    #[must_use]
    pub fn is_known(&self, slot: Slot) -> bool {
        self.get(slot).is_some()
    }

    /// Returns the slots that are still unknown, in asking order.
    #[must_use]
    pub fn unknown_slots(&self) -> Vec<Slot> {
        Slot::ALL
            .into_iter()
            .filter(|slot| !self.is_known(*slot))
            .collect()
    }

    /// Validates a raw answer and stores it in `slot`.
    ///
    /// The answer is lower-cased before validation. Returns the stored value.
    ///
    /// # Errors
    ///
    /// - `ValueError::InvalidValue` if the answer is outside the slot's domain
    /// - `StateError::SlotAlreadyKnown` if the slot was already set
    ///
    /// The state is unchanged on error.
    pub fn set_slot(&mut self, slot: Slot, value: &str) -> Result<SlotValue, Error> {
        let parsed = SlotValue::parse(slot, value)?;
        self.apply(parsed)?;
        Ok(parsed)
    }

    /// Stores an already validated value.
    ///
    /// # Errors
    ///
    /// Returns `StateError::SlotAlreadyKnown` if the slot was already set.
    pub fn apply(&mut self, value: SlotValue) -> Result<(), StateError> {
        let slot = value.slot();
        if self.is_known(slot) {
            return Err(StateError::SlotAlreadyKnown { slot });
        }

        match value {
            SlotValue::Power(v) => self.power = Some(v),
            SlotValue::LedColor(v) => self.led_color = Some(v),
            SlotValue::InternalState(v) => self.internal_state = Some(v),
        }
        Ok(())
    }
}

impl fmt::Display for DeviceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for slot in Slot::ALL {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            match self.get(slot) {
                Some(value) => write!(f, "{value}")?,
                None => write!(f, "{slot}=unknown")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValueError;

    #[test]
    fn new_state_is_unknown() {
        let state = DeviceState::new();
        assert_eq!(state.power(), None);
        assert_eq!(state.led_color(), None);
        assert_eq!(state.internal_state(), None);
        assert_eq!(state.unknown_slots(), Slot::ALL.to_vec());
    }

    #[test]
    fn set_slot_round_trip_every_value() {
        for slot in Slot::ALL {
            for value in slot.allowed_values() {
                let mut state = DeviceState::new();
                state.set_slot(slot, &value.to_uppercase()).unwrap();
                assert_eq!(state.get(slot).unwrap().as_str(), value);
            }
        }
    }

    #[test]
    fn set_slot_invalid_leaves_state() {
        let mut state = DeviceState::new();
        let err = state.set_slot(Slot::Power, "maybe").unwrap_err();
        assert!(matches!(
            err,
            Error::Value(ValueError::InvalidValue {
                slot: Slot::Power,
                ..
            })
        ));
        assert_eq!(state, DeviceState::new());
    }

    #[test]
    fn unknown_is_not_storable() {
        let mut state = DeviceState::new();
        assert!(state.set_slot(Slot::LedColor, "unknown").is_err());
        assert!(!state.is_known(Slot::LedColor));
    }

    #[test]
    fn slot_is_written_once() {
        let mut state = DeviceState::new();
        state.set_slot(Slot::Power, "on").unwrap();

        let err = state.set_slot(Slot::Power, "off").unwrap_err();
        assert!(matches!(
            err,
            Error::State(StateError::SlotAlreadyKnown { slot: Slot::Power })
        ));
        assert_eq!(state.power(), Some(Power::On));
    }

    #[test]
    fn apply_typed_value() {
        let mut state = DeviceState::new();
        state.apply(SlotValue::from(LedColor::Red)).unwrap();
        assert_eq!(state.led_color(), Some(LedColor::Red));
        assert_eq!(state.unknown_slots(), vec![Slot::Power, Slot::InternalState]);
    }

    #[test]
    fn display_lists_all_slots() {
        let mut state = DeviceState::new();
        state.set_slot(Slot::Power, "on").unwrap();
        assert_eq!(
            state.to_string(),
            "power=on led_color=unknown internal_state=unknown"
        );
    }
}
