//! # Application Layer
//!
//! The bot's behavior: formatting applications for the operator, the
//! claim/resolve hand-off protocol, and event routing.

pub mod formatter;
pub mod handoff;
pub mod router;
