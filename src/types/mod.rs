// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for the diagnostic wizard.
//!
//! Every symptom has a closed domain. Answers are parsed case-insensitively
//! into these types, so an out-of-domain value can never reach the device
//! state.
//!
//! # Types
//!
//! - [`Slot`] - Name of a symptom field
//! - [`Power`] - Power supply state (on/off)
//! - [`LedColor`] - Status LED color (red/green/yellow/blue/none)
//! - [`InternalState`] - Internal error code (errfile/erraddress)
//! - [`SlotQuestion`] - A slot paired with its allowed answers

mod internal_state;
mod led_color;
mod power;
mod question;
mod slot;

pub use internal_state::InternalState;
pub use led_color::LedColor;
pub use power::Power;
pub use question::SlotQuestion;
pub use slot::Slot;
