// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Presenter trait for the outbound side of the wizard.

use std::sync::Arc;

use crate::engine::Diagnosis;
use crate::types::SlotQuestion;

/// Narrow callback interface the engine uses to reach the presentation layer.
///
/// The presentation layer owns the engine and calls into it; the engine only
/// ever holds a `Presenter`. Answers flow back through
/// [`DiagnosisEngine::provide_answer`](crate::DiagnosisEngine::provide_answer)
/// or [`SessionHandle::provide_answer`](crate::session::SessionHandle::provide_answer).
///
/// Callbacks run synchronously on the engine's thread and must not block.
///
/// # Examples
///
/// ```
/// use diag_wizard::presenter::Presenter;
/// use diag_wizard::types::SlotQuestion;
/// use diag_wizard::Diagnosis;
///
/// struct Console;
///
/// impl Presenter for Console {
///     fn request_input(&self, question: &SlotQuestion) {
///         println!("{}? {:?}", question.slot(), question.allowed_values());
///     }
///
///     fn diagnosis_ready(&self, diagnosis: Diagnosis) {
///         println!("Diagnosis: {diagnosis}");
///     }
/// }
/// ```
pub trait Presenter: Send {
    /// Asks the user to choose a value for the question's slot.
    ///
    /// Called at most once per slot per session.
    fn request_input(&self, question: &SlotQuestion);

    /// Reports the final diagnosis.
    ///
    /// Called exactly once per completed session.
    fn diagnosis_ready(&self, diagnosis: Diagnosis);

    /// Reports that the session was abandoned without a diagnosis.
    fn session_cancelled(&self) {}
}

impl<P: Presenter + Sync + ?Sized> Presenter for Arc<P> {
    fn request_input(&self, question: &SlotQuestion) {
        (**self).request_input(question);
    }

    fn diagnosis_ready(&self, diagnosis: Diagnosis) {
        (**self).diagnosis_ready(diagnosis);
    }

    fn session_cancelled(&self) {
        (**self).session_cancelled();
    }
}
