// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Session task that drives an engine from async input.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::Instrument;

use crate::config::WizardConfig;
use crate::engine::{DiagnosisEngine, EngineStatus, Progress};
use crate::error::{Error, Result};
use crate::event::SessionId;
use crate::presenter::Presenter;

use super::handle::Answer;
use super::{CancelReason, SessionHandle, SessionOutcome};

/// A diagnosis session running on its own tokio task.
///
/// The task starts the engine, then suspends on the answer channel each time
/// a question is outstanding. Suspension is released by an answer, by
/// [`SessionHandle::halt`], by the last handle being dropped, or by the
/// configured answer timeout.
///
/// # Examples
///
/// ```
/// use diag_wizard::event::{EventBus, WizardEvent};
/// use diag_wizard::session::DiagnosisSession;
/// use diag_wizard::types::Slot;
/// use diag_wizard::{Diagnosis, WizardConfig};
///
/// #[tokio::main]
/// async fn main() -> diag_wizard::Result<()> {
///     let bus = EventBus::new();
///     let mut events = bus.subscribe();
///
///     let session = DiagnosisSession::spawn(bus, WizardConfig::default());
///     let handle = session.handle();
///
///     while let Ok(event) = events.recv().await {
///         match event {
///             WizardEvent::InputRequested { question } => {
///                 // A real UI would let the technician choose here
///                 let answer = match question.slot() {
///                     Slot::Power => "on",
///                     _ => "green",
///                 };
///                 handle.provide_answer(question.slot(), answer).await?;
///             }
///             _ => break,
///         }
///     }
///
///     let outcome = session.finish().await?;
///     assert_eq!(outcome.diagnosis(), Some(Diagnosis::Operational));
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct DiagnosisSession {
    handle: SessionHandle,
    task: JoinHandle<Result<SessionOutcome>>,
}

impl DiagnosisSession {
    /// Spawns a new session on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    #[must_use]
    pub fn spawn<P>(presenter: P, config: WizardConfig) -> Self
    where
        P: Presenter + 'static,
    {
        let id = SessionId::new();
        let (answer_tx, answer_rx) = mpsc::channel(1);
        let (cancel_tx, cancel_rx) = watch::channel(false);
        let status = Arc::new(RwLock::new(EngineStatus::Idle));

        let engine = DiagnosisEngine::with_config(presenter, &config);
        let inbox = Inbox {
            answers: answer_rx,
            cancel: cancel_rx,
            cancel_open: true,
        };

        let span = tracing::info_span!("diagnosis_session", session = %id);
        let task = tokio::spawn(
            run(engine, inbox, Arc::clone(&status), config.answer_timeout).instrument(span),
        );

        Self {
            handle: SessionHandle::new(
                id,
                answer_tx,
                Arc::new(cancel_tx),
                status,
                config.slot_mismatch,
            ),
            task,
        }
    }

    /// Returns a handle for answering and cancelling the session.
    #[must_use]
    pub fn handle(&self) -> SessionHandle {
        self.handle.clone()
    }

    /// Returns the session identifier.
    #[must_use]
    pub fn id(&self) -> SessionId {
        self.handle.id()
    }

    /// Waits for the session to end.
    ///
    /// Drops this session's own handle first, so if no other handle is alive
    /// a pending question is abandoned rather than waited on forever.
    ///
    /// # Errors
    ///
    /// - `Error::UnhandledCombination` if the rule tables have a gap
    /// - `Error::TaskFailed` if the session task panicked
    pub async fn finish(self) -> Result<SessionOutcome> {
        let Self { handle, task } = self;
        drop(handle);
        task.await?
    }
}

/// What ended a wait for an answer.
enum Wait {
    Answer(Answer),
    Cancelled(CancelReason),
}

/// Receiving half of a session's input.
struct Inbox {
    answers: mpsc::Receiver<Answer>,
    cancel: watch::Receiver<bool>,
    /// Cleared once every cancel sender is gone; answers still drain.
    cancel_open: bool,
}

impl Inbox {
    /// Waits for the next answer, cancellation, or the deadline.
    async fn next(&mut self, deadline: Option<Instant>) -> Wait {
        let recv = async {
            loop {
                tokio::select! {
                    biased;
                    changed = self.cancel.changed(), if self.cancel_open => {
                        match changed {
                            Ok(()) => return Wait::Cancelled(CancelReason::Halted),
                            Err(_) => self.cancel_open = false,
                        }
                    }
                    answer = self.answers.recv() => {
                        return answer.map_or(Wait::Cancelled(CancelReason::Abandoned), Wait::Answer);
                    }
                }
            }
        };

        match deadline {
            Some(deadline) => tokio::time::timeout_at(deadline, recv)
                .await
                .unwrap_or(Wait::Cancelled(CancelReason::TimedOut)),
            None => recv.await,
        }
    }
}

/// Session task body.
async fn run<P: Presenter>(
    mut engine: DiagnosisEngine<P>,
    mut inbox: Inbox,
    status: Arc<RwLock<EngineStatus>>,
    answer_timeout: Option<Duration>,
) -> Result<SessionOutcome> {
    let publish = |engine: &DiagnosisEngine<P>| *status.write() = engine.status();

    let started = engine.start();
    publish(&engine);
    let mut progress = started?;
    let mut deadline = None;

    loop {
        match progress {
            Progress::Diagnosed(diagnosis) => {
                return Ok(SessionOutcome::Diagnosed {
                    diagnosis,
                    state: engine.state().copied().unwrap_or_default(),
                });
            }
            Progress::Asked(slot) => {
                tracing::debug!(slot = %slot, "Waiting for answer");
                deadline = answer_timeout.map(|timeout| Instant::now() + timeout);
            }
            Progress::Ignored => {}
        }

        let answer = match inbox.next(deadline).await {
            Wait::Answer(answer) => answer,
            Wait::Cancelled(reason) => {
                tracing::warn!(reason = %reason, "Session cancelled while waiting for answer");
                engine.halt();
                publish(&engine);
                return Ok(SessionOutcome::Cancelled {
                    reason,
                    state: engine.state().copied().unwrap_or_default(),
                });
            }
        };

        let Answer { slot, value, reply } = answer;
        let result = engine.provide_answer(slot, &value);
        publish(&engine);
        // A caller that stopped waiting does not need the verdict
        progress = match result {
            Ok(progress) => {
                let _ = reply.send(Ok(progress));
                progress
            }
            Err(Error::Value(e)) => {
                tracing::warn!(error = %e, "Rejected answer, question stays pending");
                let _ = reply.send(Err(e));
                Progress::Ignored
            }
            Err(e) => return Err(e),
        };
    }
}
