// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the diagnostic wizard.
//!
//! This module provides the error hierarchy for the library: answer
//! validation, device state updates, and engine/session lifecycle failures.

use thiserror::Error;

use crate::state::DeviceState;
use crate::types::Slot;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// An answer failed validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The device state rejected an update.
    #[error("state error: {0}")]
    State(#[from] StateError),

    /// `start` was called while a session was already running or finished.
    #[error("diagnosis session already started")]
    AlreadyStarted,

    /// Every slot-filling rule is exhausted but no diagnosis rule matches.
    ///
    /// The rule tables are exhaustive for the supported domain, so this
    /// indicates a defect in the tables rather than a user error.
    #[error("no diagnosis rule matches {0}")]
    UnhandledCombination(DeviceState),

    /// The session task has ended and no longer accepts input.
    #[error("diagnosis session is closed")]
    SessionClosed,

    /// The session task panicked or was aborted.
    #[error("session task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

/// Errors related to answer validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The answer is not in the slot's allowed domain.
    #[error("invalid value '{value}' for slot {slot}")]
    InvalidValue {
        /// The slot the answer was meant for.
        slot: Slot,
        /// The rejected value, as supplied.
        value: String,
    },

    /// The slot name does not name any known slot.
    #[error("unknown slot: {0}")]
    UnknownSlot(String),
}

/// Errors related to device state updates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    /// The slot already holds a value for this session.
    #[error("slot {slot} is already known")]
    SlotAlreadyKnown {
        /// The slot that was already set.
        slot: Slot,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
