//! Tween state machine
//!
//! One [`Animation`] interpolates the named numeric properties of its actor
//! from their values at first start toward configured destinations, over a
//! duration, through an easing curve. A delay holds the tween before any
//! visible progress, a repeat count re-enters the running state at each
//! completion boundary, and a chained successor is started by the owning
//! [`Animator`](crate::Animator) when the final cycle completes.

use crate::animator::AnimationId;
use crate::easing::Easing;
use rustc_hash::FxHashMap;

/// Named numeric properties written during interpolation.
pub type Actor = FxHashMap<String, f64>;

/// What one [`Animation::frame`] call did, in the order events should be
/// raised for it: a frame tick, then either a repeat restart or completion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    /// Progress advanced past the delay hold this frame.
    pub ticked: bool,
    /// A repeat boundary was crossed and the tween re-entered running.
    pub restarted: bool,
    /// The final cycle finished; the tween is no longer running.
    pub completed: bool,
}

/// A time-bounded interpolation task: immutable configuration plus mutable
/// progress state.
///
/// Timing fields are milliseconds. `progress` stays clamped to `[0, 1]`;
/// `is_running` is false before the first start and after a stop or final
/// completion.
#[derive(Clone, Debug)]
pub struct Animation {
    duration: f64,
    delay: f64,
    easing: Easing,
    repeat: u32,
    actor: Option<Actor>,
    to: Option<Actor>,
    chained: Option<AnimationId>,

    running: bool,
    from: Option<Actor>,
    iteration: u32,
    start_time: Option<f64>,
    current_time: f64,
    elapsed: f64,
    delta: f64,
    progress: f64,
    frame_count: u64,
}

impl Animation {
    /// Tween with default configuration: one second, no delay, linear
    /// easing, a single cycle, no actor.
    pub fn new() -> Self {
        Self {
            duration: 1000.0,
            delay: 0.0,
            easing: Easing::Linear,
            repeat: 1,
            actor: None,
            to: None,
            chained: None,
            running: false,
            from: None,
            iteration: 0,
            start_time: None,
            current_time: 0.0,
            elapsed: 0.0,
            delta: 0.0,
            progress: 0.0,
            frame_count: 0,
        }
    }

    /// Builder: set the duration in milliseconds. Zero or negative values
    /// complete on the first non-delayed frame.
    pub fn with_duration(mut self, ms: f64) -> Self {
        self.duration = ms;
        self
    }

    /// Builder: set a hold, in milliseconds, before any visible progress.
    pub fn with_delay(mut self, ms: f64) -> Self {
        self.delay = ms;
        self
    }

    /// Builder: set the easing curve.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Builder: set how many cycles to play, clamped to at least one.
    pub fn with_repeat(mut self, count: u32) -> Self {
        self.repeat = count.max(1);
        self
    }

    /// Builder: set the actor whose properties are tweened.
    pub fn with_actor(mut self, actor: Actor) -> Self {
        self.actor = Some(actor);
        self
    }

    /// Builder: set destination values, keyed by property name. Names
    /// absent from the actor at first start are silently skipped.
    pub fn with_to(mut self, to: Actor) -> Self {
        self.to = Some(to);
        self
    }

    /// Set the tween started automatically when this one finally completes.
    /// One-directional; chains are not checked for cycles.
    pub fn chain(&mut self, next: AnimationId) {
        self.chained = Some(next);
    }

    /// Enter the running state at `now`. Returns false, doing nothing,
    /// while already running. Origin values are captured from the actor on
    /// the very first start; repeat boundaries and later restarts reuse
    /// that capture.
    pub fn start(&mut self, now: f64) -> bool {
        if self.running {
            return false;
        }
        if self.from.is_none() {
            if let (Some(actor), Some(to)) = (self.actor.as_ref(), self.to.as_ref()) {
                let mut from = Actor::default();
                for name in to.keys() {
                    if let Some(value) = actor.get(name) {
                        from.insert(name.clone(), *value);
                    }
                }
                self.from = Some(from);
            }
        }
        self.running = true;
        self.rewind(now);
        true
    }

    /// Leave the running state. Returns false while not running. Resets the
    /// repeat counter; timing fields and the chained id are left as they
    /// are, and the chained tween is not started.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        self.iteration = 0;
        true
    }

    /// Advance to `time`. The outcome is empty while not running or still
    /// inside the delay hold; otherwise the actor is updated before the
    /// caller raises any events for this frame.
    pub fn frame(&mut self, time: f64) -> FrameOutcome {
        let mut outcome = FrameOutcome::default();
        if !self.running {
            return outcome;
        }
        let Some(start_time) = self.start_time else {
            return outcome;
        };
        let raw = (time - start_time) - self.delay;
        if raw < 0.0 {
            return outcome;
        }

        let elapsed = raw.min(self.duration).max(0.0);
        self.elapsed = elapsed;
        self.progress = if self.duration > 0.0 {
            elapsed / self.duration
        } else {
            1.0
        };
        self.delta = time - self.current_time;
        self.current_time = time;
        self.frame_count += 1;
        self.write_actor(elapsed);
        outcome.ticked = true;

        if elapsed >= self.duration {
            if self.iteration + 1 < self.repeat {
                // Repeat boundary: fresh start time, same captured origin.
                self.iteration += 1;
                self.rewind(time);
                outcome.restarted = true;
            } else {
                self.running = false;
                self.iteration = 0;
                outcome.completed = true;
            }
        }
        outcome
    }

    fn rewind(&mut self, now: f64) {
        self.start_time = Some(now);
        self.current_time = now;
        self.elapsed = 0.0;
        self.delta = 0.0;
        self.progress = 0.0;
        self.frame_count = 0;
    }

    fn write_actor(&mut self, elapsed: f64) {
        let easing = self.easing;
        let duration = self.duration;
        if let (Some(actor), Some(to), Some(from)) =
            (self.actor.as_mut(), self.to.as_ref(), self.from.as_ref())
        {
            for (name, target) in to {
                if let (Some(slot), Some(begin)) = (actor.get_mut(name), from.get(name)) {
                    *slot = easing.apply(elapsed, *begin, target - begin, duration);
                }
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration
    }

    pub fn delay_ms(&self) -> f64 {
        self.delay
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn repeat(&self) -> u32 {
        self.repeat
    }

    /// Zero-based repeat cycle counter.
    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    /// Progress through the current cycle, clamped to `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Elapsed time within the current cycle, past the delay hold.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed
    }

    /// Time between the two most recent advancing frames.
    pub fn delta_ms(&self) -> f64 {
        self.delta
    }

    pub fn current_time_ms(&self) -> f64 {
        self.current_time
    }

    pub fn start_time_ms(&self) -> Option<f64> {
        self.start_time
    }

    /// Frames that advanced progress in the current cycle.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn chained(&self) -> Option<AnimationId> {
        self.chained
    }

    pub fn actor(&self) -> Option<&Actor> {
        self.actor.as_ref()
    }

    /// Mutable actor access, for seeding properties before the first start.
    pub fn actor_mut(&mut self) -> Option<&mut Actor> {
        self.actor.as_mut()
    }

    /// Origin values captured at first start, if any.
    pub fn from_values(&self) -> Option<&Actor> {
        self.from.as_ref()
    }

    pub fn to_values(&self) -> Option<&Actor> {
        self.to.as_ref()
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new()
    }
}
