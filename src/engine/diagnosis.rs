// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Terminal diagnosis outcomes.

use std::fmt;

/// A repair or diagnosis recommendation.
///
/// Each variant carries a fixed message shown to the technician.
///
/// | Symptoms | Diagnosis |
/// |----------|-----------|
/// | power off | [`NoPower`](Self::NoPower) |
/// | LED red | [`CpuMalfunction`](Self::CpuMalfunction) |
/// | LED green | [`Operational`](Self::Operational) |
/// | LED yellow, errfile | [`FlashError`](Self::FlashError) |
/// | LED yellow, erraddress | [`BootloaderAddressFault`](Self::BootloaderAddressFault) |
/// | LED blue | [`FirmwareUpdate`](Self::FirmwareUpdate) |
/// | LED dark | [`HardwareFault`](Self::HardwareFault) |
///
/// # Examples
///
/// ```
/// use diag_wizard::Diagnosis;
///
/// assert_eq!(
///     Diagnosis::NoPower.message(),
///     "Connect the power supply to the device"
/// );
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Diagnosis {
    /// The device receives no power.
    NoPower,
    /// The CPU is faulty and needs reballing.
    CpuMalfunction,
    /// The device works.
    Operational,
    /// Corrupt firmware; reflash with the stable image.
    FlashError,
    /// Wrong bootloader address; reflash with the recovery image.
    BootloaderAddressFault,
    /// A firmware update is in progress.
    FirmwareUpdate,
    /// Board-level hardware fault.
    HardwareFault,
}

impl Diagnosis {
    /// All diagnoses, in table order.
    pub const ALL: [Self; 7] = [
        Self::NoPower,
        Self::CpuMalfunction,
        Self::Operational,
        Self::FlashError,
        Self::BootloaderAddressFault,
        Self::FirmwareUpdate,
        Self::HardwareFault,
    ];

    /// Returns the recommendation shown to the technician.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::NoPower => "Connect the power supply to the device",
            Self::CpuMalfunction => "CPU malfunction detected. Send for reballing.",
            Self::Operational => "Device fully operational — OK.",
            Self::FlashError => "Flash error — reflash device with Stable.bin",
            Self::BootloaderAddressFault => {
                "Bootloader address fault — reflash device with Recovery.bin"
            }
            Self::FirmwareUpdate => "Firmware update process detected",
            Self::HardwareFault => {
                "Hardware fault detected — send board for physical diagnostics"
            }
        }
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_distinct() {
        let mut messages: Vec<_> = Diagnosis::ALL.iter().map(Diagnosis::message).collect();
        messages.sort_unstable();
        messages.dedup();
        assert_eq!(messages.len(), Diagnosis::ALL.len());
    }

    #[test]
    fn display_is_message() {
        assert_eq!(
            Diagnosis::FirmwareUpdate.to_string(),
            "Firmware update process detected"
        );
    }
}
