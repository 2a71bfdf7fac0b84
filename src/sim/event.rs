use crate::dynamics::history::Sample;

// ---------------------------------------------------------------------------
// Flight events
// ---------------------------------------------------------------------------

/// Kinds of flight events found in a recorded history.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    Apogee,
    GroundContact,
}

/// A discrete event located between two recorded samples.
#[derive(Debug, Clone)]
pub struct FlightEvent {
    pub time: f64,
    pub kind: EventKind,
    pub sample: Sample,
}

/// Trait for passive event detectors.
/// Implementations inspect consecutive samples and report events.
pub trait EventDetector {
    fn check(&mut self, prev: &Sample, current: &Sample) -> Option<EventKind>;
}

/// Detects apogee (vertical velocity going from positive to non-positive).
pub struct ApogeeDetector;

impl EventDetector for ApogeeDetector {
    fn check(&mut self, prev: &Sample, current: &Sample) -> Option<EventKind> {
        if prev.state.velocity().z() > 0.0 && current.state.velocity().z() <= 0.0 {
            Some(EventKind::Apogee)
        } else {
            None
        }
    }
}

/// Detects the first step that ends at or below the ground plane.
#[derive(Default)]
pub struct GroundContact {
    fired: bool,
}

impl EventDetector for GroundContact {
    fn check(&mut self, prev: &Sample, current: &Sample) -> Option<EventKind> {
        if self.fired {
            return None;
        }
        if prev.state.altitude() > 0.0 && current.state.altitude() <= 0.0 {
            self.fired = true;
            Some(EventKind::GroundContact)
        } else {
            None
        }
    }
}

/// Run every detector over a history and collect events in time order.
pub fn scan(history: &[Sample], detectors: &mut [&mut dyn EventDetector]) -> Vec<FlightEvent> {
    let mut events = Vec::new();
    for pair in history.windows(2) {
        for det in detectors.iter_mut() {
            if let Some(kind) = det.check(&pair[0], &pair[1]) {
                events.push(FlightEvent { time: pair[1].time, kind, sample: pair[1] });
            }
        }
    }
    events
}
