// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Session results.

use std::fmt;

use crate::engine::Diagnosis;
use crate::state::DeviceState;

/// How a diagnosis session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SessionOutcome {
    /// The session reached a diagnosis.
    Diagnosed {
        /// The final recommendation.
        diagnosis: Diagnosis,
        /// Symptoms collected on the way.
        state: DeviceState,
    },

    /// The session was abandoned before a diagnosis.
    Cancelled {
        /// What stopped the session.
        reason: CancelReason,
        /// Symptoms collected before cancellation.
        state: DeviceState,
    },
}

impl SessionOutcome {
    /// Returns the diagnosis, if one was reached.
    #[must_use]
    pub fn diagnosis(&self) -> Option<Diagnosis> {
        match self {
            Self::Diagnosed { diagnosis, .. } => Some(*diagnosis),
            Self::Cancelled { .. } => None,
        }
    }

    /// Returns the symptoms collected during the session.
    #[must_use]
    pub fn state(&self) -> &DeviceState {
        match self {
            Self::Diagnosed { state, .. } | Self::Cancelled { state, .. } => state,
        }
    }

    /// Returns `true` if the session was cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

/// Reason a session was cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelReason {
    /// [`SessionHandle::halt`](super::SessionHandle::halt) was called.
    Halted,
    /// Every handle was dropped while a question was pending.
    Abandoned,
    /// No answer arrived within the configured timeout.
    TimedOut,
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Halted => "halted",
            Self::Abandoned => "abandoned",
            Self::TimedOut => "timed out",
        };
        write!(f, "{text}")
    }
}
