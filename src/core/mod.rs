//! Core domain: collaborator interfaces shared by traversal and combat.

mod layers;
mod probe;
#[cfg(test)]
mod tests;
mod timers;

pub use layers::GameLayer;
pub use probe::{AvianProbe, ProbeChannel, ProbeHit, SurfaceProbe};
pub use timers::{Scheduler, TimerQueue};
