// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Outbound interface to the presentation layer.
//!
//! The engine never knows how questions are displayed. It calls a
//! [`Presenter`] and waits for the caller to come back with an answer.
//!
//! # Overview
//!
//! - [`Presenter`] - Trait with the "request input" and "diagnosis ready" calls
//! - [`CallbackPresenter`] - Presenter built from closures
//! - [`EventBus`](crate::event::EventBus) - Presenter that broadcasts
//!   [`WizardEvent`](crate::event::WizardEvent)s to any number of subscribers

mod callback;
mod interface;

pub use callback::CallbackPresenter;
pub use interface::Presenter;
