//! Movement domain: fighter kinematics against the static platform set.

mod components;
mod physics;

#[cfg(test)]
mod tests;

pub use components::{Aabb, ArenaBounds, ArenaEdge, Body, Facing};
pub use physics::{clamp_to_arena, jump, resting_platform, step_body};
