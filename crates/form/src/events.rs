//! Single-threaded event delivery.
//!
//! Location fixes and submit presses arrive on one channel and are handled
//! in arrival order by [`run`], so the stored address has exactly one writer
//! and one reader. A submit that arrives before any fix sees no address.

use crate::{FieldSource, MessageSink, SubmissionController};
use geoform_geo::{Coordinate, Geocoder, LocationProvider};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Something the host reports to the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The platform delivered a location fix
    LocationFixed(Coordinate),
    /// The user pressed submit
    SubmitPressed,
}

/// Sending half handed to the host's callbacks.
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: mpsc::UnboundedSender<Event>,
}

impl EventSender {
    /// Queues an event; returns false once the loop has stopped.
    pub fn send(&self, event: Event) -> bool {
        self.tx.send(event).is_ok()
    }

    /// Forwards the provider's last known location, if it has one.
    pub fn deliver_location<P: LocationProvider + ?Sized>(&self, provider: &P) -> bool {
        match provider.last_known_location() {
            Some(at) => self.send(Event::LocationFixed(at)),
            None => {
                debug!("No last known location");
                false
            }
        }
    }

    /// Queues a submit press.
    pub fn submit(&self) -> bool {
        self.send(Event::SubmitPressed)
    }
}

/// Receiving half consumed by [`run`].
#[derive(Debug)]
pub struct EventReceiver {
    rx: mpsc::UnboundedReceiver<Event>,
}

/// Creates a connected sender and receiver.
pub fn channel() -> (EventSender, EventReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (EventSender { tx }, EventReceiver { rx })
}

/// Handles events until every sender is dropped, then hands the controller back.
///
/// Errors from a single event are logged and do not stop the loop.
pub async fn run<G, F, M>(
    mut controller: SubmissionController<G, F, M>,
    mut events: EventReceiver,
) -> SubmissionController<G, F, M>
where
    G: Geocoder,
    F: FieldSource,
    M: MessageSink,
{
    while let Some(event) = events.rx.recv().await {
        match event {
            Event::LocationFixed(at) => match controller.on_location_fix(at) {
                Ok(marker) => info!(
                    position = %marker.position,
                    zoom = marker.zoom,
                    title = %marker.title,
                    "Location fix handled"
                ),
                Err(e) => {
                    let report = geoform_core::Error::from(e).to_report();
                    warn!(
                        %at,
                        code = %report.code_str,
                        category = %report.category,
                        error = %report.message,
                        "Location fix ignored"
                    );
                }
            },
            Event::SubmitPressed => {
                if let Err(e) = controller.on_submit() {
                    let report = geoform_core::Error::from(e).to_report();
                    warn!(
                        code = %report.code_str,
                        category = %report.category,
                        error = %report.message,
                        "Submission failed"
                    );
                }
            }
        }
    }

    debug!(state = ?controller.state(), "Event loop finished");
    controller
}
