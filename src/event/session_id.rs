// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Session identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Random identifier attached to every diagnosis session.
///
/// It shows up as the `session` field of the session's tracing span, so log
/// lines of concurrent sessions can be told apart. Serializes as a plain
/// UUID string.
///
/// ```
/// use diag_wizard::event::SessionId;
///
/// let id = SessionId::new();
/// assert_eq!(id.to_string().len(), 36);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Draws a fresh random (v4) identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

// Log-friendly: the first block of the UUID is enough to follow a session.
impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut short = self.0.simple().to_string();
        short.truncate(8);
        write!(f, "SessionId({short}...)")
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sessions_get_distinct_ids() {
        let ids: Vec<SessionId> = (0..8).map(|_| SessionId::new()).collect();
        for (i, id) in ids.iter().enumerate() {
            assert!(!ids[i + 1..].contains(id));
        }
    }

    #[test]
    fn debug_shows_leading_block_of_display() {
        let id = SessionId::new();
        let display = id.to_string();
        let debug = format!("{id:?}");

        assert_eq!(debug, format!("SessionId({}...)", &display[..8]));
    }

    #[test]
    fn serializes_as_uuid_string() {
        let id = SessionId::new();
        let json = serde_json::to_value(id).unwrap();

        assert_eq!(json, serde_json::Value::String(id.to_string()));
        assert_eq!(serde_json::from_value::<SessionId>(json).unwrap(), id);
    }
}
