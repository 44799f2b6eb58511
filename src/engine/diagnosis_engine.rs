// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The decision-flow state machine.

use crate::config::{SlotMismatchPolicy, WizardConfig};
use crate::error::{Error, Result};
use crate::presenter::Presenter;
use crate::state::DeviceState;
use crate::types::Slot;

use super::rules::{self, Step};
use super::Diagnosis;

/// Where an engine is in its session.
///
/// ```text
/// Idle ──start──▶ AwaitingAnswer(slot) ──answer──▶ AwaitingAnswer(next) ...
///                        │                                  │
///                        └──halt──▶ Halted(Cancelled)       └──▶ Halted(Diagnosed)
/// ```
///
/// `reset` returns to `Idle` from any status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum EngineStatus {
    /// No session is running.
    Idle,
    /// A question for this slot is outstanding.
    AwaitingAnswer(Slot),
    /// The session is over.
    Halted(HaltReason),
}

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HaltReason {
    /// A diagnosis was emitted.
    Diagnosed(Diagnosis),
    /// The session was abandoned before a diagnosis.
    Cancelled,
}

/// Result of driving the engine one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// A question was issued and the engine is waiting for its answer.
    Asked(Slot),
    /// The session finished with this diagnosis.
    Diagnosed(Diagnosis),
    /// The answer had no effect: nothing was pending, or it named another slot.
    Ignored,
}

/// Guided diagnosis as an explicit finite-state machine.
///
/// The engine is driven by direct calls. [`start`](Self::start) evaluates the
/// rules until a question is needed, issues it through the [`Presenter`] and
/// returns. The session is then suspended in
/// [`EngineStatus::AwaitingAnswer`] until [`provide_answer`](Self::provide_answer)
/// resumes it. Exactly one question is outstanding at a time.
///
/// # Examples
///
/// ```
/// use diag_wizard::event::EventBus;
/// use diag_wizard::types::Slot;
/// use diag_wizard::{Diagnosis, DiagnosisEngine, Progress};
///
/// let mut engine = DiagnosisEngine::new(EventBus::new());
///
/// assert_eq!(engine.start().unwrap(), Progress::Asked(Slot::Power));
/// assert_eq!(
///     engine.provide_answer(Slot::Power, "on").unwrap(),
///     Progress::Asked(Slot::LedColor)
/// );
/// assert_eq!(
///     engine.provide_answer(Slot::LedColor, "Green").unwrap(),
///     Progress::Diagnosed(Diagnosis::Operational)
/// );
/// assert!(engine.is_halted());
/// ```
#[derive(Debug)]
pub struct DiagnosisEngine<P> {
    presenter: P,
    slot_mismatch: SlotMismatchPolicy,
    state: DeviceState,
    status: EngineStatus,
}

impl<P: Presenter> DiagnosisEngine<P> {
    /// Creates an idle engine with default configuration.
    #[must_use]
    pub fn new(presenter: P) -> Self {
        Self::with_config(presenter, &WizardConfig::default())
    }

    /// Creates an idle engine with the given configuration.
    #[must_use]
    pub fn with_config(presenter: P, config: &WizardConfig) -> Self {
        Self {
            presenter,
            slot_mismatch: config.slot_mismatch,
            state: DeviceState::new(),
            status: EngineStatus::Idle,
        }
    }

    /// Returns the current status.
    #[must_use]
    pub fn status(&self) -> EngineStatus {
        self.status
    }

    /// Returns the slot of the outstanding question, if any.
    #[must_use]
    pub fn pending_slot(&self) -> Option<Slot> {
        match self.status {
            EngineStatus::AwaitingAnswer(slot) => Some(slot),
            _ => None,
        }
    }

    /// Returns the session's device state, or `None` when idle.
    #[must_use]
    pub fn state(&self) -> Option<&DeviceState> {
        match self.status {
            EngineStatus::Idle => None,
            _ => Some(&self.state),
        }
    }

    /// Returns the diagnosis, once reached.
    #[must_use]
    pub fn diagnosis(&self) -> Option<Diagnosis> {
        match self.status {
            EngineStatus::Halted(HaltReason::Diagnosed(diagnosis)) => Some(diagnosis),
            _ => None,
        }
    }

    /// Returns `true` once the session is over.
    #[must_use]
    pub fn is_halted(&self) -> bool {
        matches!(self.status, EngineStatus::Halted(_))
    }

    /// Returns the presenter.
    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Begins a session with a fresh device state.
    ///
    /// Runs the rules until the first question is issued.
    ///
    /// # Errors
    ///
    /// - `Error::AlreadyStarted` unless the engine is idle
    /// - `Error::UnhandledCombination` if the rule tables have a gap
    pub fn start(&mut self) -> Result<Progress> {
        if self.status != EngineStatus::Idle {
            return Err(Error::AlreadyStarted);
        }

        tracing::debug!("Starting diagnosis session");
        self.state = DeviceState::new();
        self.advance()
    }

    /// Answers the outstanding question and resumes the session.
    ///
    /// `value` is case-insensitive. An answer that arrives while nothing is
    /// pending is discarded and reported as [`Progress::Ignored`]; so is an
    /// answer naming a slot other than the pending one, unless the engine is
    /// configured with [`SlotMismatchPolicy::ApplyToPending`].
    ///
    /// # Errors
    ///
    /// - `ValueError::InvalidValue` if `value` is outside the slot's domain.
    ///   The slot keeps its prior value and the question stays pending.
    /// - `Error::UnhandledCombination` if the rule tables have a gap
    pub fn provide_answer(&mut self, slot: Slot, value: &str) -> Result<Progress> {
        let EngineStatus::AwaitingAnswer(pending) = self.status else {
            tracing::warn!(
                slot = %slot,
                value,
                status = ?self.status,
                "Ignoring answer, no question is pending"
            );
            return Ok(Progress::Ignored);
        };

        let target = if slot == pending {
            pending
        } else {
            match self.slot_mismatch {
                SlotMismatchPolicy::Ignore => {
                    tracing::warn!(
                        slot = %slot,
                        pending = %pending,
                        "Ignoring answer for a slot that was not asked"
                    );
                    return Ok(Progress::Ignored);
                }
                SlotMismatchPolicy::ApplyToPending => {
                    tracing::debug!(
                        slot = %slot,
                        pending = %pending,
                        "Applying answer to pending slot"
                    );
                    pending
                }
            }
        };

        let applied = self.state.set_slot(target, value)?;
        tracing::debug!(value = %applied, "Answer applied");
        self.advance()
    }

    /// Abandons the running session without a diagnosis.
    ///
    /// Returns `true` if a pending question was abandoned. Does nothing when
    /// the engine is idle or already halted.
    pub fn halt(&mut self) -> bool {
        let EngineStatus::AwaitingAnswer(slot) = self.status else {
            return false;
        };

        tracing::warn!(pending = %slot, "Diagnosis session cancelled");
        self.status = EngineStatus::Halted(HaltReason::Cancelled);
        self.presenter.session_cancelled();
        true
    }

    /// Discards the session and returns to idle.
    pub fn reset(&mut self) {
        if self.status != EngineStatus::Idle {
            tracing::debug!(status = ?self.status, "Resetting diagnosis engine");
        }
        self.state = DeviceState::new();
        self.status = EngineStatus::Idle;
    }

    /// Evaluates the rules against the current state and acts on the result.
    fn advance(&mut self) -> Result<Progress> {
        match rules::next_step(&self.state) {
            Some(Step::Ask(slot)) => {
                tracing::debug!(slot = %slot, "Requesting input");
                self.status = EngineStatus::AwaitingAnswer(slot);
                self.presenter.request_input(&slot.question());
                Ok(Progress::Asked(slot))
            }
            Some(Step::Diagnose(diagnosis)) => {
                tracing::info!(
                    state = %self.state,
                    diagnosis = ?diagnosis,
                    "Diagnosis reached"
                );
                self.status = EngineStatus::Halted(HaltReason::Diagnosed(diagnosis));
                self.presenter.diagnosis_ready(diagnosis);
                Ok(Progress::Diagnosed(diagnosis))
            }
            None => {
                tracing::error!(state = %self.state, "No rule matches device state");
                self.status = EngineStatus::Halted(HaltReason::Cancelled);
                Err(Error::UnhandledCombination(self.state))
            }
        }
    }
}
