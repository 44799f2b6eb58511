// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wizard event types.

use crate::engine::Diagnosis;
use crate::types::{Slot, SlotQuestion};

/// Events emitted by an engine through an [`EventBus`](super::EventBus).
///
/// These mirror the [`Presenter`](crate::presenter::Presenter) calls so a
/// presentation layer can consume them from a channel instead of callbacks.
///
/// # Examples
///
/// ```
/// use diag_wizard::event::WizardEvent;
/// use diag_wizard::types::Slot;
/// use diag_wizard::Diagnosis;
///
/// let asked = WizardEvent::input_requested(Slot::Power.question());
/// assert_eq!(asked.requested_slot(), Some(Slot::Power));
///
/// let done = WizardEvent::DiagnosisReady { diagnosis: Diagnosis::Operational };
/// assert!(done.is_terminal());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WizardEvent {
    /// The engine needs a value for a slot.
    InputRequested {
        /// The question to present.
        question: SlotQuestion,
    },

    /// The engine reached a diagnosis.
    DiagnosisReady {
        /// The final recommendation.
        diagnosis: Diagnosis,
    },

    /// The session was abandoned without a diagnosis.
    Cancelled,
}

impl WizardEvent {
    /// Creates an input requested event.
    #[must_use]
    pub fn input_requested(question: SlotQuestion) -> Self {
        Self::InputRequested { question }
    }

    /// Returns the slot asked for, if this is a question.
    #[must_use]
    pub fn requested_slot(&self) -> Option<Slot> {
        match self {
            Self::InputRequested { question } => Some(question.slot()),
            _ => None,
        }
    }

    /// Returns `true` if no further events follow in this session.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::DiagnosisReady { .. } | Self::Cancelled)
    }
}
