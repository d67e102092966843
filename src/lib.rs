//! Player events library.
//!
//! A player broadcasts typed game events to the observers registered with it.
//! This module exposes the event model, the subject and observer
//! capabilities, and the concrete player and observers, for use in
//! integration tests and as a reusable library.

pub mod events;
pub mod game;
pub mod observers;
pub mod player;
pub mod resources;
pub mod subject;
