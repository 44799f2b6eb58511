// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end scenarios for the synchronous diagnosis engine.

use std::sync::Arc;

use diag_wizard::presenter::Presenter;
use diag_wizard::types::{Slot, SlotQuestion};
use diag_wizard::{Diagnosis, DiagnosisEngine, EngineStatus, Error, HaltReason, Progress, ValueError};
use parking_lot::Mutex;

/// Records every presenter call in order.
#[derive(Debug, Default)]
struct Transcript {
    questions: Mutex<Vec<SlotQuestion>>,
    diagnoses: Mutex<Vec<String>>,
    cancelled: Mutex<bool>,
}

impl Transcript {
    fn asked(&self) -> Vec<Slot> {
        self.questions.lock().iter().map(SlotQuestion::slot).collect()
    }

    fn messages(&self) -> Vec<String> {
        self.diagnoses.lock().clone()
    }
}

impl Presenter for Transcript {
    fn request_input(&self, question: &SlotQuestion) {
        self.questions.lock().push(question.clone());
    }

    fn diagnosis_ready(&self, diagnosis: Diagnosis) {
        self.diagnoses.lock().push(diagnosis.message().to_string());
    }

    fn session_cancelled(&self) {
        *self.cancelled.lock() = true;
    }
}

fn new_engine() -> (DiagnosisEngine<Arc<Transcript>>, Arc<Transcript>) {
    let transcript = Arc::new(Transcript::default());
    (DiagnosisEngine::new(Arc::clone(&transcript)), transcript)
}

/// Starts a session and answers each question in turn.
fn run(answers: &[(Slot, &str)]) -> (DiagnosisEngine<Arc<Transcript>>, Arc<Transcript>) {
    let (mut engine, transcript) = new_engine();
    engine.start().unwrap();
    for (slot, value) in answers {
        engine.provide_answer(*slot, value).unwrap();
    }
    (engine, transcript)
}

// ============================================================================
// Scenarios
// ============================================================================

mod scenarios {
    use super::*;

    #[test]
    fn power_off() {
        let (engine, transcript) = run(&[(Slot::Power, "off")]);

        assert_eq!(transcript.asked(), vec![Slot::Power]);
        assert_eq!(
            transcript.messages(),
            vec!["Connect the power supply to the device"]
        );
        assert_eq!(engine.diagnosis(), Some(Diagnosis::NoPower));
    }

    #[test]
    fn green_led() {
        let (_, transcript) = run(&[(Slot::Power, "on"), (Slot::LedColor, "green")]);

        assert_eq!(transcript.asked(), vec![Slot::Power, Slot::LedColor]);
        assert_eq!(transcript.messages(), vec!["Device fully operational — OK."]);
    }

    #[test]
    fn yellow_led_errfile() {
        let (_, transcript) = run(&[
            (Slot::Power, "on"),
            (Slot::LedColor, "yellow"),
            (Slot::InternalState, "errfile"),
        ]);

        assert_eq!(
            transcript.asked(),
            vec![Slot::Power, Slot::LedColor, Slot::InternalState]
        );
        assert_eq!(
            transcript.messages(),
            vec!["Flash error — reflash device with Stable.bin"]
        );
    }

    #[test]
    fn yellow_led_erraddress() {
        let (_, transcript) = run(&[
            (Slot::Power, "on"),
            (Slot::LedColor, "yellow"),
            (Slot::InternalState, "erraddress"),
        ]);

        assert_eq!(
            transcript.messages(),
            vec!["Bootloader address fault — reflash device with Recovery.bin"]
        );
    }

    #[test]
    fn remaining_led_colors() {
        let cases = [
            ("red", "CPU malfunction detected. Send for reballing."),
            ("blue", "Firmware update process detected"),
            (
                "none",
                "Hardware fault detected — send board for physical diagnostics",
            ),
        ];

        for (color, message) in cases {
            let (_, transcript) = run(&[(Slot::Power, "on"), (Slot::LedColor, color)]);
            assert_eq!(transcript.asked(), vec![Slot::Power, Slot::LedColor]);
            assert_eq!(transcript.messages(), vec![message], "color {color}");
        }
    }

    #[test]
    fn cancel_while_awaiting_led() {
        let (mut engine, transcript) = run(&[(Slot::Power, "on")]);
        assert_eq!(engine.status(), EngineStatus::AwaitingAnswer(Slot::LedColor));

        assert!(engine.halt());
        assert!(transcript.messages().is_empty());
        assert!(*transcript.cancelled.lock());
        assert_eq!(engine.status(), EngineStatus::Halted(HaltReason::Cancelled));

        engine.reset();
        assert_eq!(engine.status(), EngineStatus::Idle);
        assert_eq!(engine.start().unwrap(), Progress::Asked(Slot::Power));
    }
}

// ============================================================================
// Questions and answers
// ============================================================================

mod answers {
    use super::*;

    #[test]
    fn questions_carry_allowed_values() {
        let (_, transcript) = run(&[(Slot::Power, "on"), (Slot::LedColor, "yellow")]);
        let questions = transcript.questions.lock();

        assert_eq!(questions[0].allowed_values(), ["on", "off"]);
        assert_eq!(
            questions[1].allowed_values(),
            ["red", "green", "yellow", "blue", "none"]
        );
        assert_eq!(questions[2].allowed_values(), ["errfile", "erraddress"]);
    }

    #[test]
    fn answers_are_case_insensitive() {
        for value in ["ON", "On", "on", " oN "] {
            let (engine, _) = run(&[(Slot::Power, value)]);
            let state = engine.state().unwrap();
            assert_eq!(state.get(Slot::Power).unwrap().as_str(), "on");
        }
    }

    #[test]
    fn every_led_value_round_trips() {
        for value in Slot::LedColor.allowed_values() {
            let (mut engine, _) = run(&[(Slot::Power, "on")]);
            engine
                .provide_answer(Slot::LedColor, &value.to_uppercase())
                .unwrap();
            let stored = engine.state().unwrap().get(Slot::LedColor).unwrap();
            assert_eq!(stored.as_str(), value);
        }
    }

    #[test]
    fn invalid_value_rejected() {
        let (mut engine, transcript) = run(&[(Slot::Power, "on")]);

        let err = engine.provide_answer(Slot::LedColor, "orange").unwrap_err();
        assert!(matches!(
            err,
            Error::Value(ValueError::InvalidValue { slot: Slot::LedColor, ref value })
                if value == "orange"
        ));
        assert_eq!(engine.state().unwrap().led_color(), None);
        assert_eq!(engine.pending_slot(), Some(Slot::LedColor));
        assert!(transcript.messages().is_empty());
    }

    #[test]
    fn slot_parsed_from_wire_name() {
        let (mut engine, _) = new_engine();
        engine.start().unwrap();

        let slot: Slot = "power".parse().unwrap();
        engine.provide_answer(slot, "on").unwrap();

        let slot: Slot = "ledColor".parse().unwrap();
        let progress = engine.provide_answer(slot, "red").unwrap();
        assert_eq!(progress, Progress::Diagnosed(Diagnosis::CpuMalfunction));
    }

    #[test]
    fn answers_after_diagnosis_have_no_effect() {
        let (mut engine, transcript) = run(&[(Slot::Power, "off")]);

        for (slot, value) in [(Slot::Power, "on"), (Slot::LedColor, "red")] {
            assert_eq!(
                engine.provide_answer(slot, value).unwrap(),
                Progress::Ignored
            );
        }
        assert_eq!(transcript.messages().len(), 1);
        assert_eq!(transcript.asked(), vec![Slot::Power]);
    }
}
