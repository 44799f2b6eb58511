// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state management types.
//!
//! The [`DeviceState`] struct records which symptoms are known for the
//! device under diagnosis, while [`SlotValue`] is a validated answer that
//! can be written into it.
//!
//! # Examples
//!
//! ```
//! use diag_wizard::state::{DeviceState, SlotValue};
//! use diag_wizard::types::{Power, Slot};
//!
//! let mut state = DeviceState::new();
//! state.apply(SlotValue::Power(Power::On)).unwrap();
//!
//! assert!(state.is_known(Slot::Power));
//! assert_eq!(state.unknown_slots(), vec![Slot::LedColor, Slot::InternalState]);
//! ```

mod device_state;
mod slot_value;

pub use device_state::DeviceState;
pub use slot_value::SlotValue;
