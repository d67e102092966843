//! Long-lived data shared by the game.
//!
//! Overview
//! - `gameconfig` – starting player state and demo settings loaded from INI
pub mod gameconfig;
