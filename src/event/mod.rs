// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event system for wizard progress.
//!
//! The [`EventBus`] is a [`Presenter`](crate::presenter::Presenter) that turns
//! engine callbacks into [`WizardEvent`]s on a tokio broadcast channel, so
//! several observers (a UI, an audit log) can follow one session.
//!
//! # Examples
//!
//! ```
//! use diag_wizard::event::{EventBus, WizardEvent};
//! use diag_wizard::DiagnosisEngine;
//!
//! let bus = EventBus::new();
//! let mut rx = bus.subscribe();
//!
//! let mut engine = DiagnosisEngine::new(bus.clone());
//! engine.start().unwrap();
//!
//! let event = rx.try_recv().unwrap();
//! assert!(matches!(event, WizardEvent::InputRequested { .. }));
//! ```

mod event_bus;
mod session_id;
mod wizard_event;

pub use event_bus::EventBus;
pub use session_id::SessionId;
pub use wizard_event::WizardEvent;
