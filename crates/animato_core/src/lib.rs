//! Animato Core Utilities
//!
//! Supporting primitives for the animato tween engine:
//!
//! - **Event Dispatch**: keyed, ordered, synchronous listener tables
//!
//! The engine advances every tween on one call stack per frame, so the
//! dispatcher takes no `Send`/`Sync` bounds on handlers.

pub mod events;

pub use events::{EventDispatcher, HandlerId};
