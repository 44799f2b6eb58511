// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Slot-filling and diagnosis rule tables.
//!
//! Both tables are evaluated top to bottom and the first match wins. The
//! slot-filling table is always consulted first; the diagnosis table is only
//! consulted once no slot needs asking.
//!
//! # Examples
//!
//! ```
//! use diag_wizard::engine::{Step, next_step};
//! use diag_wizard::state::DeviceState;
//! use diag_wizard::types::Slot;
//! use diag_wizard::Diagnosis;
//!
//! let mut state = DeviceState::new();
//! assert_eq!(next_step(&state), Some(Step::Ask(Slot::Power)));
//!
//! state.set_slot(Slot::Power, "off").unwrap();
//! assert_eq!(next_step(&state), Some(Step::Diagnose(Diagnosis::NoPower)));
//! ```

use crate::state::DeviceState;
use crate::types::{InternalState, LedColor, Power, Slot};

use super::Diagnosis;

/// What the engine should do next for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Ask the presentation layer for this slot.
    Ask(Slot),
    /// Emit this diagnosis and stop.
    Diagnose(Diagnosis),
}

/// Condition on a single slot.
#[derive(Debug, Clone, Copy)]
enum Cond<T> {
    /// Any value, known or not.
    Any,
    /// The slot is still unknown.
    Unknown,
    /// The slot holds exactly this value.
    Is(T),
}

impl<T: PartialEq + Copy> Cond<T> {
    fn holds(&self, actual: Option<T>) -> bool {
        match self {
            Self::Any => true,
            Self::Unknown => actual.is_none(),
            Self::Is(expected) => actual == Some(*expected),
        }
    }
}

/// Conjunction of conditions over all three slots.
#[derive(Debug, Clone, Copy)]
struct Pattern {
    power: Cond<Power>,
    led_color: Cond<LedColor>,
    internal_state: Cond<InternalState>,
}

impl Pattern {
    const fn new(
        power: Cond<Power>,
        led_color: Cond<LedColor>,
        internal_state: Cond<InternalState>,
    ) -> Self {
        Self {
            power,
            led_color,
            internal_state,
        }
    }

    fn matches(&self, state: &DeviceState) -> bool {
        self.power.holds(state.power())
            && self.led_color.holds(state.led_color())
            && self.internal_state.holds(state.internal_state())
    }
}

/// Ordered slot-filling rules.
const SLOT_RULES: [(Pattern, Slot); 3] = [
    (Pattern::new(Cond::Unknown, Cond::Any, Cond::Any), Slot::Power),
    (
        Pattern::new(Cond::Is(Power::On), Cond::Unknown, Cond::Any),
        Slot::LedColor,
    ),
    (
        Pattern::new(
            Cond::Is(Power::On),
            Cond::Is(LedColor::Yellow),
            Cond::Unknown,
        ),
        Slot::InternalState,
    ),
];

/// Diagnosis rules, mutually exclusive.
const DIAGNOSIS_RULES: [(Pattern, Diagnosis); 7] = [
    (
        Pattern::new(Cond::Is(Power::Off), Cond::Any, Cond::Any),
        Diagnosis::NoPower,
    ),
    (
        Pattern::new(Cond::Is(Power::On), Cond::Is(LedColor::Red), Cond::Any),
        Diagnosis::CpuMalfunction,
    ),
    (
        Pattern::new(Cond::Is(Power::On), Cond::Is(LedColor::Green), Cond::Any),
        Diagnosis::Operational,
    ),
    (
        Pattern::new(
            Cond::Is(Power::On),
            Cond::Is(LedColor::Yellow),
            Cond::Is(InternalState::ErrFile),
        ),
        Diagnosis::FlashError,
    ),
    (
        Pattern::new(
            Cond::Is(Power::On),
            Cond::Is(LedColor::Yellow),
            Cond::Is(InternalState::ErrAddress),
        ),
        Diagnosis::BootloaderAddressFault,
    ),
    (
        Pattern::new(Cond::Is(Power::On), Cond::Is(LedColor::Blue), Cond::Any),
        Diagnosis::FirmwareUpdate,
    ),
    (
        Pattern::new(Cond::Is(Power::On), Cond::Is(LedColor::None), Cond::Any),
        Diagnosis::HardwareFault,
    ),
];

/// Returns the slot to ask next, if any slot-filling rule fires.
#[must_use]
pub fn next_question(state: &DeviceState) -> Option<Slot> {
    SLOT_RULES
        .iter()
        .find(|(pattern, _)| pattern.matches(state))
        .map(|(_, slot)| *slot)
}

/// Returns the diagnosis for a state, if a diagnosis rule fires.
///
/// Callers should only consult this once [`next_question`] returns `None`.
#[must_use]
pub fn diagnose(state: &DeviceState) -> Option<Diagnosis> {
    DIAGNOSIS_RULES
        .iter()
        .find(|(pattern, _)| pattern.matches(state))
        .map(|(_, diagnosis)| *diagnosis)
}

/// Evaluates the slot-filling rules, then the diagnosis rules.
///
/// Returns `None` when neither table matches, which the exhaustive tables
/// never produce for a state built through the engine.
#[must_use]
pub fn next_step(state: &DeviceState) -> Option<Step> {
    next_question(state)
        .map(Step::Ask)
        .or_else(|| diagnose(state).map(Step::Diagnose))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SlotValue;

    fn state_of(values: &[SlotValue]) -> DeviceState {
        let mut state = DeviceState::new();
        for value in values {
            state.apply(*value).unwrap();
        }
        state
    }

    /// Every state the engine can reach: all partial assignments.
    fn all_states() -> Vec<DeviceState> {
        let powers = std::iter::once(None).chain(Power::ALL.map(Some));
        let mut states = Vec::new();
        for power in powers {
            let colors = std::iter::once(None).chain(LedColor::ALL.map(Some));
            for color in colors {
                let internals = std::iter::once(None).chain(InternalState::ALL.map(Some));
                for internal in internals {
                    let values: Vec<SlotValue> = [
                        power.map(SlotValue::from),
                        color.map(SlotValue::from),
                        internal.map(SlotValue::from),
                    ]
                    .into_iter()
                    .flatten()
                    .collect();
                    states.push(state_of(&values));
                }
            }
        }
        states
    }

    #[test]
    fn power_is_asked_first() {
        assert_eq!(next_question(&DeviceState::new()), Some(Slot::Power));
        // Even with other slots known, unknown power wins
        let state = state_of(&[LedColor::Yellow.into()]);
        assert_eq!(next_question(&state), Some(Slot::Power));
    }

    #[test]
    fn led_asked_only_when_powered() {
        let on = state_of(&[Power::On.into()]);
        assert_eq!(next_question(&on), Some(Slot::LedColor));

        let off = state_of(&[Power::Off.into()]);
        assert_eq!(next_question(&off), None);
    }

    #[test]
    fn internal_state_asked_only_for_yellow() {
        let yellow = state_of(&[Power::On.into(), LedColor::Yellow.into()]);
        assert_eq!(next_question(&yellow), Some(Slot::InternalState));

        for color in [LedColor::Red, LedColor::Green, LedColor::Blue, LedColor::None] {
            let state = state_of(&[Power::On.into(), color.into()]);
            assert_eq!(next_question(&state), None, "color {color}");
        }
    }

    #[test]
    fn diagnosis_table() {
        let cases: [(Vec<SlotValue>, Diagnosis); 7] = [
            (vec![Power::Off.into()], Diagnosis::NoPower),
            (
                vec![Power::On.into(), LedColor::Red.into()],
                Diagnosis::CpuMalfunction,
            ),
            (
                vec![Power::On.into(), LedColor::Green.into()],
                Diagnosis::Operational,
            ),
            (
                vec![
                    Power::On.into(),
                    LedColor::Yellow.into(),
                    InternalState::ErrFile.into(),
                ],
                Diagnosis::FlashError,
            ),
            (
                vec![
                    Power::On.into(),
                    LedColor::Yellow.into(),
                    InternalState::ErrAddress.into(),
                ],
                Diagnosis::BootloaderAddressFault,
            ),
            (
                vec![Power::On.into(), LedColor::Blue.into()],
                Diagnosis::FirmwareUpdate,
            ),
            (
                vec![Power::On.into(), LedColor::None.into()],
                Diagnosis::HardwareFault,
            ),
        ];

        for (values, expected) in cases {
            let state = state_of(&values);
            assert_eq!(next_step(&state), Some(Step::Diagnose(expected)), "{state}");
        }
    }

    #[test]
    fn tables_are_exhaustive() {
        for state in all_states() {
            assert!(next_step(&state).is_some(), "no rule for {state}");
        }
    }

    #[test]
    fn at_most_one_rule_eligible() {
        for state in all_states() {
            let slot_matches = SLOT_RULES
                .iter()
                .filter(|(pattern, _)| pattern.matches(&state))
                .count();
            let diagnosis_matches = DIAGNOSIS_RULES
                .iter()
                .filter(|(pattern, _)| pattern.matches(&state))
                .count();
            assert!(slot_matches <= 1, "{state}");
            assert!(diagnosis_matches <= 1, "{state}");
        }
    }

    #[test]
    fn questions_only_target_unknown_slots() {
        for state in all_states() {
            if let Some(slot) = next_question(&state) {
                assert!(!state.is_known(slot), "{state}");
            }
        }
    }
}
