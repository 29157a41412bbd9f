use instant::Instant;
use std::time::Duration;

use crate::trace::{Projection, Trace};

/// Upper bound of the delay range; the host maps a speed slider to a per-step
/// delay as `MAX_DELAY_MS - speed`.
pub const MAX_DELAY_MS: u64 = 300;

/// Replays a [`Trace`] under external timing control.
///
/// The producer runs to completion up front; the player is the only suspension
/// point. It applies at most one event per [`StepPlayer::tick`] call once the
/// configured delay has elapsed, folding each event into the owned
/// [`Projection`]. Hosts call `tick` once per frame and keep requesting
/// repaints while [`StepPlayer::is_playing`] returns true.
///
/// A new [`StepPlayer::play`] call supersedes the in-flight trace: the cursor,
/// trace and projection are replaced together and the generation counter is
/// bumped, so no event of the old trace can ever be applied afterwards.
#[derive(Debug)]
pub struct StepPlayer<P: Projection> {
    trace: Trace<P::Event>,
    projection: Option<P>,
    cursor: usize,
    delay: Duration,
    last_step: Instant,
    generation: u64,
}

impl<P: Projection> Default for StepPlayer<P> {
    fn default() -> Self {
        Self {
            trace: Trace::default(),
            projection: None,
            cursor: 0,
            delay: Duration::from_millis(MAX_DELAY_MS),
            last_step: Instant::now(),
            generation: 0,
        }
    }
}

impl<P: Projection> StepPlayer<P> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    /// Starts playback of `trace` against `projection`, superseding any
    /// in-flight run. The first event is applied only after one full delay.
    pub fn play(&mut self, trace: Trace<P::Event>, projection: P) {
        self.trace = trace;
        self.projection = Some(projection);
        self.cursor = 0;
        self.last_step = Instant::now();
        self.generation += 1;
    }

    /// Applies the next event if playback is active and the delay has
    /// elapsed. Returns `true` when an event was applied this call.
    pub fn tick(&mut self) -> bool {
        if !self.is_playing() || self.last_step.elapsed() < self.delay {
            return false;
        }
        let Some(projection) = self.projection.as_mut() else {
            return false;
        };
        let Some(event) = self.trace.get(self.cursor) else {
            return false;
        };
        projection.apply(event);
        self.cursor += 1;
        self.last_step = Instant::now();
        true
    }

    /// Discards the loaded trace and projection; counts as a supersession.
    pub fn reset(&mut self) {
        self.trace = Trace::default();
        self.projection = None;
        self.cursor = 0;
        self.generation += 1;
    }

    /// Applies all remaining events immediately.
    pub fn finish(&mut self) {
        if let Some(projection) = self.projection.as_mut() {
            while let Some(event) = self.trace.get(self.cursor) {
                projection.apply(event);
                self.cursor += 1;
            }
        }
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// True while a trace is loaded and not yet exhausted.
    pub fn is_playing(&self) -> bool {
        self.projection.is_some() && self.cursor < self.trace.len()
    }

    /// True once a loaded trace has been fully applied.
    pub fn is_finished(&self) -> bool {
        self.projection.is_some() && self.cursor >= self.trace.len()
    }

    /// Index of the next event to apply; events `[0, cursor)` are folded into
    /// the projection.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Increases by one on every [`StepPlayer::play`]; lets hosts detect that
    /// a run superseded the previous one.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn trace(&self) -> &Trace<P::Event> {
        &self.trace
    }

    pub fn projection(&self) -> Option<&P> {
        self.projection.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Sum {
        total: i64,
        applied: Vec<i64>,
    }

    impl Projection for Sum {
        type Event = i64;

        fn apply(&mut self, event: &i64) {
            self.total += event;
            self.applied.push(*event);
        }
    }

    #[test]
    fn applies_events_in_order_exactly_once() {
        let mut player = StepPlayer::new(Duration::ZERO);
        player.play(Trace::from(vec![1, 2, 3]), Sum::default());

        assert!(player.is_playing());
        while player.tick() {}
        assert!(player.is_finished());

        let projection = player.projection().unwrap();
        assert_eq!(projection.applied, vec![1, 2, 3]);
        assert_eq!(projection.total, 6);
        assert_eq!(player.cursor(), 3);

        // Exhausted traces do not advance further.
        assert!(!player.tick());
        assert_eq!(player.cursor(), 3);
    }

    #[test]
    fn delay_gates_each_step() {
        let mut player = StepPlayer::new(Duration::from_secs(3600));
        player.play(Trace::from(vec![1, 2]), Sum::default());

        assert!(!player.tick());
        assert_eq!(player.cursor(), 0);
        assert!(player.is_playing());
    }

    #[test]
    fn new_run_supersedes_old_trace() {
        let mut player = StepPlayer::new(Duration::ZERO);
        player.play(Trace::from(vec![10, 20, 30]), Sum::default());
        let first_gen = player.generation();
        player.tick();

        player.play(Trace::from(vec![7]), Sum::default());
        assert_eq!(player.generation(), first_gen + 1);
        assert_eq!(player.cursor(), 0);

        while player.tick() {}
        let projection = player.projection().unwrap();
        assert_eq!(projection.applied, vec![7]);
    }

    #[test]
    fn finish_drains_the_trace() {
        let mut player = StepPlayer::new(Duration::from_secs(3600));
        player.play(Trace::from(vec![1, 2, 3, 4]), Sum::default());
        player.finish();
        assert!(player.is_finished());
        assert_eq!(player.projection().unwrap().total, 10);
    }

    #[test]
    fn empty_trace_is_finished_immediately() {
        let mut player = StepPlayer::new(Duration::ZERO);
        player.play(Trace::default(), Sum::default());
        assert!(!player.is_playing());
        assert!(player.is_finished());
        assert!(!player.tick());
    }
}
