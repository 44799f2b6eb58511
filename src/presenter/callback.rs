// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Closure-based presenter.

use std::fmt;
use std::sync::Arc;

use crate::engine::Diagnosis;
use crate::types::SlotQuestion;

use super::Presenter;

/// Type alias for question callbacks.
type RequestCallback = Arc<dyn Fn(&SlotQuestion) + Send + Sync>;

/// Type alias for diagnosis callbacks.
type DiagnosisCallback = Arc<dyn Fn(Diagnosis) + Send + Sync>;

/// Type alias for cancellation callbacks.
type CancelledCallback = Arc<dyn Fn() + Send + Sync>;

/// Presenter assembled from closures.
///
/// Useful when the presentation layer is a handful of widget updates and a
/// dedicated type would be overkill.
///
/// # Examples
///
/// ```
/// use diag_wizard::presenter::CallbackPresenter;
/// use diag_wizard::DiagnosisEngine;
///
/// let presenter = CallbackPresenter::new(
///     |question| println!("Choose value for '{}'", question.slot()),
///     |diagnosis| println!("{diagnosis}"),
/// )
/// .on_cancelled(|| println!("Diagnosis aborted"));
///
/// let mut engine = DiagnosisEngine::new(presenter);
/// engine.start().unwrap();
/// ```
#[derive(Clone)]
pub struct CallbackPresenter {
    on_request: RequestCallback,
    on_diagnosis: DiagnosisCallback,
    on_cancelled: Option<CancelledCallback>,
}

impl CallbackPresenter {
    /// Creates a presenter from question and diagnosis callbacks.
    pub fn new<R, D>(on_request: R, on_diagnosis: D) -> Self
    where
        R: Fn(&SlotQuestion) + Send + Sync + 'static,
        D: Fn(Diagnosis) + Send + Sync + 'static,
    {
        Self {
            on_request: Arc::new(on_request),
            on_diagnosis: Arc::new(on_diagnosis),
            on_cancelled: None,
        }
    }

    /// Registers a callback for abandoned sessions.
    #[must_use]
    pub fn on_cancelled<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_cancelled = Some(Arc::new(callback));
        self
    }
}

impl Presenter for CallbackPresenter {
    fn request_input(&self, question: &SlotQuestion) {
        (self.on_request)(question);
    }

    fn diagnosis_ready(&self, diagnosis: Diagnosis) {
        (self.on_diagnosis)(diagnosis);
    }

    fn session_cancelled(&self) {
        if let Some(callback) = &self.on_cancelled {
            callback();
        }
    }
}

impl fmt::Debug for CallbackPresenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackPresenter")
            .field("on_cancelled", &self.on_cancelled.is_some())
            .finish_non_exhaustive()
    }
}
