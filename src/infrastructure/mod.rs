//! # Infrastructure Layer
//!
//! Handles interactions with external systems: the CRM REST API and the
//! Telegram Bot API. Implements the traits defined in the Domain layer.

pub mod crm;
pub mod telegram;
