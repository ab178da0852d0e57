//! Drives a two-property tween in real time and prints each frame.
//!
//! Run with `RUST_LOG=trace` to watch the clock and tween transitions.

use animato::{Animation, Animator, Easing, EventKind};
use std::time::Duration;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut animator = Animator::new();
    let id = animator.animate(
        Animation::new()
            .with_duration(400.0)
            .with_easing(Easing::CubicInOut)
            .with_actor(
                [("x".to_string(), 0.0), ("y".to_string(), 20.0)]
                    .into_iter()
                    .collect(),
            )
            .with_to(
                [("x".to_string(), 640.0), ("y".to_string(), 360.0)]
                    .into_iter()
                    .collect(),
            ),
    );
    animator.on(id, EventKind::Complete, |tween| {
        println!("done after {} frames", tween.frame_count());
    });
    animator.start(id);

    while animator.active_count() > 0 {
        std::thread::sleep(Duration::from_millis(16));
        animator.tick();
        if let Some(actor) = animator.get(id).and_then(|tween| tween.actor()) {
            println!("x={:7.1}  y={:7.1}", actor["x"], actor["y"]);
        }
    }
}
