// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decision-flow engine.
//!
//! - [`next_step`] - Slot-filling and diagnosis rule tables
//! - [`Diagnosis`] - The seven terminal recommendations
//! - [`DiagnosisEngine`] - State machine that asks questions and emits the diagnosis

mod diagnosis;
mod diagnosis_engine;
mod rules;

pub use diagnosis::Diagnosis;
pub use diagnosis_engine::{DiagnosisEngine, EngineStatus, HaltReason, Progress};
pub use rules::{Step, diagnose, next_question, next_step};
