//! # Strings
//!
//! All operator-facing text lives here, separated from the logic.

pub mod messages;
