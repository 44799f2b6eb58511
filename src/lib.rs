// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `diag_wizard` - A guided diagnostic wizard for field devices.
//!
//! The wizard collects a few observed symptoms through single-choice
//! questions and resolves them into one repair recommendation.
//!
//! # Symptoms
//!
//! - **Power**: on / off
//! - **LED color**: red / green / yellow / blue / none
//! - **Internal state**: errfile / erraddress (only asked for a yellow LED)
//!
//! # Layers
//!
//! - [`DeviceState`](state::DeviceState) holds the known symptoms
//! - [`DiagnosisEngine`] decides what to ask next and when to stop
//! - A [`Presenter`](presenter::Presenter) supplied by the caller shows
//!   questions and the final diagnosis
//! - [`DiagnosisSession`](session::DiagnosisSession) runs an engine on a tokio
//!   task with cancellation and timeouts
//!
//! # Quick Start
//!
//! ## Driving the engine directly
//!
//! ```
//! use diag_wizard::presenter::CallbackPresenter;
//! use diag_wizard::types::Slot;
//! use diag_wizard::{Diagnosis, DiagnosisEngine, Progress};
//!
//! let presenter = CallbackPresenter::new(
//!     |question| println!("{}: {:?}", question.slot(), question.allowed_values()),
//!     |diagnosis| println!("{diagnosis}"),
//! );
//!
//! let mut engine = DiagnosisEngine::new(presenter);
//! engine.start()?;
//! engine.provide_answer(Slot::Power, "on")?;
//! engine.provide_answer(Slot::LedColor, "yellow")?;
//! let progress = engine.provide_answer(Slot::InternalState, "errfile")?;
//!
//! assert_eq!(progress, Progress::Diagnosed(Diagnosis::FlashError));
//! # Ok::<(), diag_wizard::Error>(())
//! ```
//!
//! ## Async session
//!
//! ```no_run
//! use diag_wizard::event::{EventBus, WizardEvent};
//! use diag_wizard::session::DiagnosisSession;
//! use diag_wizard::WizardConfig;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> diag_wizard::Result<()> {
//!     let bus = EventBus::new();
//!     let mut events = bus.subscribe();
//!
//!     let config = WizardConfig::new().with_answer_timeout(Duration::from_secs(600));
//!     let session = DiagnosisSession::spawn(bus, config);
//!     let handle = session.handle();
//!
//!     // Forward events to the UI; the UI answers through `handle`
//!     tokio::spawn(async move {
//!         while let Ok(event) = events.recv().await {
//!             println!("{event:?}");
//!         }
//!     });
//!
//!     handle.provide_answer(diag_wizard::types::Slot::Power, "off").await?;
//!     let outcome = session.finish().await?;
//!     println!("{:?}", outcome.diagnosis());
//!     Ok(())
//! }
//! ```

mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod presenter;
pub mod session;
pub mod state;
pub mod types;

pub use config::{SlotMismatchPolicy, WizardConfig};
pub use engine::{Diagnosis, DiagnosisEngine, EngineStatus, HaltReason, Progress};
pub use error::{Error, Result, StateError, ValueError};
pub use event::{EventBus, SessionId, WizardEvent};
pub use presenter::{CallbackPresenter, Presenter};
pub use session::{CancelReason, DiagnosisSession, SessionHandle, SessionOutcome};
pub use state::{DeviceState, SlotValue};
pub use types::{InternalState, LedColor, Power, Slot, SlotQuestion};
