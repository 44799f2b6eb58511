// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Async diagnosis sessions.
//!
//! A [`DiagnosisSession`] runs a [`DiagnosisEngine`](crate::DiagnosisEngine)
//! on a tokio task and blocks that task while a question is outstanding.
//! Each question is a single-shot rendezvous: the presenter is asked, and the
//! task sleeps until a [`SessionHandle`] delivers the answer or the session is
//! cancelled.
//!
//! # Overview
//!
//! - [`DiagnosisSession`] - Spawns the task and collects its [`SessionOutcome`]
//! - [`SessionHandle`] - Cloneable input side: answers, halt, status snapshot
//! - [`CancelReason`] - Why a session ended without a diagnosis

mod driver;
mod handle;
mod outcome;

pub use driver::DiagnosisSession;
pub use handle::SessionHandle;
pub use outcome::{CancelReason, SessionOutcome};
