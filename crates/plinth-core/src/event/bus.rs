// Copyright 2026 the plinth authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Manages a generic event channel over an unbounded flume pipe.
///
/// The bus is generic over the event type `T` so this crate stays decoupled
/// from the concrete events higher layers define. Scripted asset services
/// use it to stage [`crate::service::TransferUpdate`] streams, and hosts use
/// it to fan progress text out to their UI.
#[derive(Debug)]
pub struct EventBus<T: Send + 'static> {
    sender: flume::Sender<T>,
    receiver: flume::Receiver<T>,
}

impl<T: Send + 'static> EventBus<T> {
    /// Creates a new bus with an unbounded channel.
    pub fn new() -> Self {
        let (sender, receiver) = flume::unbounded();
        Self { sender, receiver }
    }

    /// Sends an event, logging if the receiving side is gone.
    ///
    /// A disconnected receiver is not an error for the publisher; the event
    /// is simply dropped.
    pub fn publish(&self, event: T) {
        if self.sender.send(event).is_err() {
            log::debug!("Event dropped: receiver disconnected.");
        }
    }

    /// A clone of the sending end, for handing to producers.
    pub fn sender(&self) -> flume::Sender<T> {
        self.sender.clone()
    }

    /// The receiving end, for the bus owner to consume events from.
    pub fn receiver(&self) -> &flume::Receiver<T> {
        &self.receiver
    }

    /// Drains every event currently queued, without blocking.
    pub fn drain(&self) -> Vec<T> {
        self.receiver.try_iter().collect()
    }

    /// Consumes the bus, keeping only the receiving end.
    ///
    /// Dropping the sending end closes the channel: already-published
    /// events remain readable, after which the receiver reports a
    /// disconnect. Scripted asset services stage a transfer stream this
    /// way.
    pub fn into_receiver(self) -> flume::Receiver<T> {
        self.receiver
    }
}

impl<T: Send + 'static> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flume::TryRecvError;

    #[test]
    fn test_publish_then_drain_preserves_order() {
        let bus = EventBus::new();
        bus.publish("Downloading: 0%");
        bus.publish("Downloading: 50%");
        bus.publish("Download Complete!");

        assert_eq!(
            bus.drain(),
            vec!["Downloading: 0%", "Downloading: 50%", "Download Complete!"]
        );
        assert_eq!(bus.receiver().try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn test_publish_survives_receiver_side_pressure() {
        let bus = EventBus::new();
        let sender = bus.sender();
        for i in 0..100 {
            sender.send(i).unwrap();
        }
        assert_eq!(bus.drain().len(), 100);
    }

    #[test]
    fn test_into_receiver_yields_staged_events_then_disconnects() {
        let bus = EventBus::new();
        bus.publish("Downloading: 100%");
        bus.publish("Download Complete!");

        let rx = bus.into_receiver();
        assert_eq!(rx.try_recv(), Ok("Downloading: 100%"));
        assert_eq!(rx.try_recv(), Ok("Download Complete!"));
        assert_eq!(rx.try_recv(), Err(TryRecvError::Disconnected));
    }

    #[test]
    fn test_publish_after_receiver_drop_is_silent() {
        let bus = EventBus::new();
        let sender = bus.sender();
        drop(bus);
        // Raw flume send reports the disconnect; publish would swallow it.
        assert!(sender.send(1u32).is_err());
    }
}
