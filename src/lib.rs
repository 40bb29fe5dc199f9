//! # BIG Invest CRM Bot
//!
//! Telegram front end for triaging customer applications held in the BIG
//! Invest CRM. Operators pull the next pending application with `/next`,
//! then approve, reject, or request more information with inline buttons;
//! every decision is forwarded to the CRM as a status update.
//!
//! - Domain: configuration, types, and the `CrmApi`/`ChatSink` traits
//! - Infrastructure: CRM REST client and Telegram Bot API adapter
//! - Application: formatter, hand-off protocol, event router
//! - Strings: operator-facing message texts

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod strings;
