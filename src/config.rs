// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Configuration for diagnosis engines and sessions.

use std::time::Duration;

/// Configuration for a diagnosis engine or session.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use diag_wizard::{SlotMismatchPolicy, WizardConfig};
///
/// // Defaults: mismatched answers are ignored, no timeout
/// let config = WizardConfig::default();
/// assert_eq!(config.slot_mismatch, SlotMismatchPolicy::Ignore);
///
/// // With optional settings
/// let config = WizardConfig::new()
///     .with_answer_timeout(Duration::from_secs(300))
///     .with_slot_mismatch(SlotMismatchPolicy::ApplyToPending);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardConfig {
    /// What to do with an answer addressed to a slot that is not pending.
    pub slot_mismatch: SlotMismatchPolicy,
    /// How long a session waits for each answer before cancelling itself.
    ///
    /// `None` waits forever.
    pub answer_timeout: Option<Duration>,
}

impl WizardConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the slot mismatch policy.
    #[must_use]
    pub fn with_slot_mismatch(mut self, policy: SlotMismatchPolicy) -> Self {
        self.slot_mismatch = policy;
        self
    }

    /// Sets the per-question answer timeout.
    #[must_use]
    pub fn with_answer_timeout(mut self, timeout: Duration) -> Self {
        self.answer_timeout = Some(timeout);
        self
    }
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            slot_mismatch: SlotMismatchPolicy::default(),
            answer_timeout: None,
        }
    }
}

/// Handling of an answer whose slot differs from the pending question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SlotMismatchPolicy {
    /// Discard the answer and keep waiting (default).
    #[default]
    Ignore,
    /// Apply the value to the pending slot, whatever slot was named.
    ///
    /// The value must still be valid for the slot that is pending when the
    /// engine receives it.
    ApplyToPending,
}
