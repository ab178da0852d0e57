//! Tween orchestration
//!
//! The [`Animator`] owns every tween in an arena, owns exactly one
//! [`Clock`], and forwards each delivered tick to every active tween in the
//! order they started. The clock runs if and only if the active set is
//! non-empty: the first tween to start arms it, the last one to stop or
//! complete shuts it down.

use crate::animation::Animation;
use crate::clock::Clock;
use animato_core::events::{EventDispatcher, HandlerId};
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Stable handle for a tween owned by an [`Animator`].
    pub struct AnimationId;
}

/// Events raised on behalf of a tween.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The tween entered the running state, including at repeat boundaries.
    Start,
    /// The tween was stopped explicitly before completing.
    Stop,
    /// Progress advanced this frame; the actor is already updated.
    Frame,
    /// The final cycle finished.
    Complete,
}

type TweenDispatcher = EventDispatcher<AnimationId, EventKind, Animation>;

/// Multiplexes many tweens onto one clock.
///
/// Event handlers receive the tween itself as payload: progress, elapsed
/// time, frame count, and the actor are read straight off it. Handlers run
/// synchronously and cannot re-enter the animator.
pub struct Animator {
    clock: Clock,
    animations: SlotMap<AnimationId, Animation>,
    active: SmallVec<[AnimationId; 8]>,
    handlers: TweenDispatcher,
    frame_listener: Option<Box<dyn FnMut(f64)>>,
}

impl Animator {
    /// Animator over a default clock.
    pub fn new() -> Self {
        Self::with_clock(Clock::new())
    }

    /// Animator over an injected clock.
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            clock,
            animations: SlotMap::with_key(),
            active: SmallVec::new(),
            handlers: EventDispatcher::new(),
            frame_listener: None,
        }
    }

    /// Take ownership of a configured tween. The tween is not started;
    /// call [`start`](Self::start) with the returned handle.
    pub fn animate(&mut self, animation: Animation) -> AnimationId {
        self.animations.insert(animation)
    }

    /// Start `next` automatically when `id` finally completes. Chains are
    /// one-directional and not checked for cycles.
    pub fn chain(&mut self, id: AnimationId, next: AnimationId) {
        if let Some(animation) = self.animations.get_mut(id) {
            animation.chain(next);
        }
    }

    /// Start a tween now. Starting the first active tween starts the clock.
    /// Unknown handles and already-running tweens are no-ops.
    pub fn start(&mut self, id: AnimationId) {
        let now = self.clock.now_ms();
        self.start_at(id, now);
    }

    /// Stop a tween. Stopping the last active tween stops the clock.
    /// Unknown handles and idle tweens are no-ops.
    pub fn stop(&mut self, id: AnimationId) {
        let Some(animation) = self.animations.get_mut(id) else {
            return;
        };
        if !animation.stop() {
            return;
        }
        tracing::trace!(?id, "tween stopped");
        self.deactivate(id);
        self.dispatch(id, EventKind::Stop);
    }

    /// Advance every tween that was active at entry to `time`, in the order
    /// they started, then invoke the frame listener. The listener runs even
    /// with zero active tweens.
    pub fn frame(&mut self, time: f64) {
        let ids: SmallVec<[AnimationId; 8]> = self.active.clone();
        for id in ids {
            let outcome = match self.animations.get_mut(id) {
                Some(animation) => animation.frame(time),
                None => continue,
            };
            if outcome.ticked {
                self.dispatch(id, EventKind::Frame);
            }
            if outcome.restarted {
                self.dispatch(id, EventKind::Start);
            }
            if outcome.completed {
                self.complete(id, time);
            }
        }
        if let Some(listener) = self.frame_listener.as_mut() {
            listener(time);
        }
    }

    /// Deliver one honored frame request from the host: the clock re-arms
    /// the next request, then every active tween advances.
    pub fn tick(&mut self) {
        if let Some(now) = self.clock.tick() {
            self.frame(now);
        }
    }

    /// Register a handler for a tween event. Handlers fire synchronously,
    /// in registration order.
    pub fn on<F>(&mut self, id: AnimationId, event: EventKind, handler: F) -> HandlerId
    where
        F: FnMut(&Animation) + 'static,
    {
        self.handlers.register(id, event, handler)
    }

    /// Unregister a handler; a stale token is a no-op.
    pub fn off(&mut self, id: AnimationId, event: EventKind, handler: HandlerId) -> bool {
        self.handlers.unregister(id, event, handler)
    }

    /// Replace the per-frame listener, invoked with the tick timestamp
    /// after all active tweens have advanced. One slot; the latest writer
    /// wins.
    pub fn on_frame<F>(&mut self, listener: F)
    where
        F: FnMut(f64) + 'static,
    {
        self.frame_listener = Some(Box::new(listener));
    }

    /// Read a tween's state.
    pub fn get(&self, id: AnimationId) -> Option<&Animation> {
        self.animations.get(id)
    }

    /// Mutable access, for seeding or inspecting an actor.
    pub fn get_mut(&mut self, id: AnimationId) -> Option<&mut Animation> {
        self.animations.get_mut(id)
    }

    /// Drop a tween along with its handlers. Removing the last active
    /// tween stops the clock.
    pub fn remove(&mut self, id: AnimationId) -> Option<Animation> {
        let animation = self.animations.remove(id)?;
        self.deactivate(id);
        self.handlers.clear_key(id);
        Some(animation)
    }

    /// Number of tweens currently in the active set.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    fn start_at(&mut self, id: AnimationId, now: f64) {
        let Some(animation) = self.animations.get_mut(id) else {
            return;
        };
        if !animation.start(now) {
            return;
        }
        let was_empty = self.active.is_empty();
        if !self.active.contains(&id) {
            self.active.push(id);
        }
        if was_empty {
            self.clock.start();
        }
        tracing::trace!(?id, "tween started");
        self.dispatch(id, EventKind::Start);
    }

    /// Final-cycle completion: hand off to the chained tween before the
    /// completed one leaves the active set, so the clock never stops during
    /// a chain, and `Start` for the successor precedes `Complete` for the
    /// predecessor.
    fn complete(&mut self, id: AnimationId, time: f64) {
        let chained = self.animations.get(id).and_then(Animation::chained);
        if let Some(next) = chained {
            self.start_at(next, time);
        }
        tracing::trace!(?id, "tween completed");
        self.deactivate(id);
        self.dispatch(id, EventKind::Complete);
    }

    fn deactivate(&mut self, id: AnimationId) {
        self.active.retain(|candidate| *candidate != id);
        if self.active.is_empty() {
            self.clock.stop();
        }
    }

    fn dispatch(&mut self, id: AnimationId, event: EventKind) {
        let Some(animation) = self.animations.get(id) else {
            return;
        };
        self.handlers.dispatch(id, event, animation);
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}
