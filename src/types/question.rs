// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Questions posed to the presentation layer.

use crate::error::ValueError;
use crate::state::SlotValue;

use super::Slot;

/// A single-choice question for one slot.
///
/// Pairs the slot with its ordered list of allowed answers. The presentation
/// layer renders the choices however it likes and answers with one of them.
///
/// # Examples
///
/// ```
/// use diag_wizard::types::{Slot, SlotQuestion};
///
/// let question = SlotQuestion::new(Slot::Power);
/// assert_eq!(question.allowed_values(), ["on", "off"]);
/// assert!(question.accepts("ON"));
/// assert!(!question.accepts("standby"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SlotQuestion {
    slot: Slot,
    allowed_values: Vec<String>,
}

impl SlotQuestion {
    /// Creates the question for a slot.
    #[must_use]
    pub fn new(slot: Slot) -> Self {
        Self {
            slot,
            allowed_values: slot
                .allowed_values()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    /// Returns the slot being asked about.
    #[must_use]
    pub fn slot(&self) -> Slot {
        self.slot
    }

    /// Returns the allowed answers in presentation order.
    #[must_use]
    pub fn allowed_values(&self) -> &[String] {
        &self.allowed_values
    }

    /// Returns `true` if `value` is a valid answer (case-insensitive).
    #[must_use]
    pub fn accepts(&self, value: &str) -> bool {
        self.validate(value).is_ok()
    }

    /// Validates an answer and converts it to a typed slot value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidValue` if `value` is outside the domain.
    pub fn validate(&self, value: &str) -> Result<SlotValue, ValueError> {
        SlotValue::parse(self.slot, value)
    }
}
