//! # Domain Layer
//!
//! Core definitions, types, and traits for the triage bot.
//! Independent of the Telegram and CRM transports, serving as the contract for other layers.

pub mod config;
pub mod traits;
pub mod types;
