//! ECS systems that operate on the scene each poll.
//!
//! Systems are pure functions that take the world (or the scene wrapper).
//! They do not own state; the components that call them do.

pub mod animation;
pub mod cleanup;
pub mod flora_motion;
pub mod flora_spawner;
pub mod snapshot;
