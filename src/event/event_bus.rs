// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event bus for broadcasting wizard events.

use tokio::sync::broadcast;

use crate::engine::Diagnosis;
use crate::presenter::Presenter;
use crate::types::SlotQuestion;

use super::WizardEvent;

/// Default channel capacity for the event bus.
const DEFAULT_CHANNEL_CAPACITY: usize = 16;

/// Event bus for broadcasting wizard events to multiple subscribers.
///
/// The `EventBus` uses tokio's broadcast channel so every subscriber gets its
/// own copy of each event. It implements [`Presenter`], so it can be handed
/// straight to an engine or a session.
///
/// # Capacity
///
/// A session emits at most four events, so the default capacity (16) never
/// lags a subscriber that keeps up with one session at a time.
///
/// # Examples
///
/// ```
/// use diag_wizard::event::{EventBus, WizardEvent};
///
/// let bus = EventBus::new();
/// let mut rx = bus.subscribe();
///
/// bus.publish(WizardEvent::Cancelled);
/// assert_eq!(rx.try_recv().unwrap(), WizardEvent::Cancelled);
/// ```
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<WizardEvent>,
}

impl EventBus {
    /// Creates a bus holding up to 16 undelivered events per subscriber.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Creates a bus that buffers `capacity` events per subscriber.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sender: broadcast::channel(capacity).0,
        }
    }

    /// Subscribes to wizard events.
    ///
    /// Events published before this call are not replayed.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<WizardEvent> {
        self.sender.subscribe()
    }

    /// Returns how many receivers are currently subscribed.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Publishes an event to every subscriber.
    ///
    /// Events published while nobody is subscribed are dropped.
    pub fn publish(&self, event: WizardEvent) {
        if self.sender.send(event).is_err() {
            tracing::trace!("No subscriber for wizard event");
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for EventBus {
    fn request_input(&self, question: &SlotQuestion) {
        self.publish(WizardEvent::input_requested(question.clone()));
    }

    fn diagnosis_ready(&self, diagnosis: Diagnosis) {
        self.publish(WizardEvent::DiagnosisReady { diagnosis });
    }

    fn session_cancelled(&self) {
        self.publish(WizardEvent::Cancelled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Slot;

    #[test]
    fn subscriber_count_tracks_receivers() {
        let bus = EventBus::default();
        assert_eq!(bus.subscriber_count(), 0);

        let ui = bus.subscribe();
        let _audit = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 2);

        drop(ui);
        assert_eq!(bus.subscriber_count(), 1);
    }

    #[test]
    fn late_subscriber_misses_earlier_events() {
        let bus = EventBus::with_capacity(4);
        bus.publish(WizardEvent::Cancelled);

        let mut rx = bus.subscribe();
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn presenter_calls_become_events() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();

        bus.request_input(&Slot::Power.question());
        bus.diagnosis_ready(Diagnosis::NoPower);

        assert_eq!(rx.recv().await.unwrap().requested_slot(), Some(Slot::Power));
        assert_eq!(
            rx.recv().await.unwrap(),
            WizardEvent::DiagnosisReady {
                diagnosis: Diagnosis::NoPower
            }
        );
    }

    #[tokio::test]
    async fn clones_publish_on_one_channel() {
        let bus = EventBus::new();
        let engine_side = bus.clone();
        let mut rx = bus.subscribe();

        engine_side.session_cancelled();
        assert_eq!(rx.recv().await.unwrap(), WizardEvent::Cancelled);
    }
}
