mod graham;

pub use graham::graham_scan;

use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::trace::Projection;

/// One recorded decision of a Graham scan run. Any trace prefix reconstructs
/// the monotonic stack: `Seed` resets it, `Pop` shrinks it, `Confirm` pushes
/// the inspected candidate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HullEvent {
    Seed { a: Pos2, b: Pos2 },
    Inspect { from: Pos2, to: Pos2 },
    Pop { point: Pos2 },
    Confirm { from: Pos2, to: Pos2 },
}

/// Result of one hull producer invocation: the final hull vertex list in scan
/// order plus the full event trace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HullScan {
    pub hull: Vec<Pos2>,
    pub trace: crate::trace::Trace<HullEvent>,
}

/// The monotonic stack replayed from a trace prefix, plus the edge currently
/// under inspection (shown only while an `Inspect` is the latest event).
#[derive(Debug, Clone, Default)]
pub struct HullProjection {
    stack: Vec<Pos2>,
    inspect: Option<(Pos2, Pos2)>,
}

impl HullProjection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stack contents after the applied prefix; consecutive entries are the
    /// candidate hull edges.
    pub fn stack(&self) -> &[Pos2] {
        &self.stack
    }

    pub fn inspect_edge(&self) -> Option<(Pos2, Pos2)> {
        self.inspect
    }
}

impl Projection for HullProjection {
    type Event = HullEvent;

    fn apply(&mut self, event: &HullEvent) {
        match *event {
            HullEvent::Seed { a, b } => {
                self.stack.clear();
                self.stack.push(a);
                self.stack.push(b);
                self.inspect = None;
            }
            HullEvent::Inspect { from, to } => {
                self.inspect = Some((from, to));
            }
            HullEvent::Pop { .. } => {
                self.stack.pop();
                self.inspect = None;
            }
            HullEvent::Confirm { to, .. } => {
                self.stack.push(to);
                self.inspect = None;
            }
        }
    }
}

/// Cross product of `o -> a` and `o -> b`; positive for a strict left turn.
pub(crate) fn cross(o: Pos2, a: Pos2, b: Pos2) -> f32 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

pub(crate) fn dist2(a: Pos2, b: Pos2) -> f32 {
    (a.x - b.x).powi(2) + (a.y - b.y).powi(2)
}
