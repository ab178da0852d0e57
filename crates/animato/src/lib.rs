//! Animato Tween Engine
//!
//! Time-driven property tweening: give a tween destination values and a
//! duration, and it interpolates its actor's named numeric properties over
//! that window through a configurable easing curve, at whatever frame
//! cadence the host delivers.
//!
//! # Features
//!
//! - **Easing**: the classic Penner catalogue (linear, quad, cubic, sine, circ)
//! - **Tweens**: delay, repeat, chaining, per-frame events
//! - **Multiplexing**: one clock drives every active tween, and runs only
//!   while something is animating
//!
//! # Example
//!
//! ```rust
//! use animato::{Animation, Animator, Easing};
//!
//! let mut animator = Animator::new();
//! let id = animator.animate(
//!     Animation::new()
//!         .with_duration(500.0)
//!         .with_easing(Easing::QuadIn)
//!         .with_actor([("x".to_string(), 100.0)].into_iter().collect())
//!         .with_to([("x".to_string(), 200.0)].into_iter().collect()),
//! );
//! animator.start(id);
//!
//! let now = animator.clock().now_ms();
//! animator.frame(now + 250.0);
//!
//! let x = animator.get(id).unwrap().actor().unwrap()["x"];
//! assert!(x > 100.0 && x <= 200.0);
//! ```

pub mod animation;
pub mod animator;
pub mod clock;
pub mod easing;

pub use animation::{Actor, Animation, FrameOutcome};
pub use animator::{AnimationId, Animator, EventKind};
pub use clock::{Clock, FrameRequest, FrameSource, ManualFrames, ManualTime, SteadyTime, TimeSource};
pub use easing::Easing;

pub use animato_core::events::HandlerId;
