// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Input side of a running session.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::{mpsc, oneshot, watch};

use crate::config::SlotMismatchPolicy;
use crate::engine::{EngineStatus, Progress};
use crate::error::{Error, Result, ValueError};
use crate::event::SessionId;
use crate::state::SlotValue;
use crate::types::Slot;

/// Engine verdict on one answer, sent back to the caller.
pub(crate) type Reply = std::result::Result<Progress, ValueError>;

/// An answer on its way to the session task.
#[derive(Debug)]
pub(crate) struct Answer {
    pub(crate) slot: Slot,
    pub(crate) value: String,
    pub(crate) reply: oneshot::Sender<Reply>,
}

/// Cloneable handle for answering and cancelling a running session.
///
/// The session stays alive while at least one handle exists. When the last
/// handle is dropped with a question pending, the session is cancelled with
/// [`CancelReason::Abandoned`](super::CancelReason::Abandoned).
#[derive(Debug, Clone)]
pub struct SessionHandle {
    id: SessionId,
    answers: mpsc::Sender<Answer>,
    cancel: Arc<watch::Sender<bool>>,
    status: Arc<RwLock<EngineStatus>>,
    slot_mismatch: SlotMismatchPolicy,
}

impl SessionHandle {
    pub(crate) fn new(
        id: SessionId,
        answers: mpsc::Sender<Answer>,
        cancel: Arc<watch::Sender<bool>>,
        status: Arc<RwLock<EngineStatus>>,
        slot_mismatch: SlotMismatchPolicy,
    ) -> Self {
        Self {
            id,
            answers,
            cancel,
            status,
            slot_mismatch,
        }
    }

    /// Returns the session identifier.
    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Returns a snapshot of the engine status.
    #[must_use]
    pub fn status(&self) -> EngineStatus {
        *self.status.read()
    }

    /// Sends the answer for the outstanding question and waits until the
    /// session has applied it.
    ///
    /// The value is checked before it is sent, so a value outside every
    /// domain never reaches the session. With the default policy it must
    /// belong to `slot`. Under [`SlotMismatchPolicy::ApplyToPending`] the
    /// target slot is whatever is pending when the session receives the
    /// answer, so the handle only checks that some slot accepts the value and
    /// the engine rejects it if the pending slot does not.
    ///
    /// Returns the engine's [`Progress`] for this answer.
    ///
    /// # Errors
    ///
    /// - `ValueError::InvalidValue` if `value` is outside the slot's domain,
    ///   whether detected here or by the engine
    /// - `Error::SessionClosed` if the session ended before applying it
    pub async fn provide_answer(&self, slot: Slot, value: &str) -> Result<Progress> {
        let parsed = match self.slot_mismatch {
            SlotMismatchPolicy::Ignore => SlotValue::parse(slot, value)?,
            SlotMismatchPolicy::ApplyToPending => Slot::ALL
                .into_iter()
                .find_map(|candidate| SlotValue::parse(candidate, value).ok())
                .map_or_else(|| SlotValue::parse(slot, value), Ok)?,
        };

        let (reply, verdict) = oneshot::channel();
        let answer = Answer {
            slot,
            value: parsed.as_str().to_string(),
            reply,
        };

        self.answers
            .send(answer)
            .await
            .map_err(|_| Error::SessionClosed)?;

        // Dropped unanswered when the session ends first
        let progress = verdict.await.map_err(|_| Error::SessionClosed)??;
        Ok(progress)
    }

    /// Cancels the session.
    ///
    /// A pending wait is released and no diagnosis is emitted. Has no effect
    /// once the session has ended.
    pub fn halt(&self) {
        tracing::debug!(session = %self.id, "Halt requested");
        // Ignore errors (session already finished)
        let _ = self.cancel.send(true);
    }

    /// Returns `true` once the session task has stopped accepting answers.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.answers.is_closed()
    }
}
