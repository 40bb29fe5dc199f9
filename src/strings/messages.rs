//! # Messages
//!
//! Constant strings and format functions for operator-facing messages.

use crate::domain::types::ApplicationStatus;

pub const GREETING: &str = "Привет! Я бот для обработки заявок из BIG Invest.\n\n\
                            Доступные команды:\n\
                            • /next — взять следующую заявку";

pub const NO_NEW_APPLICATIONS: &str = "Новых заявок пока нет ✨";

pub const CALLBACK_DONE: &str = "Готово";

pub fn claim_failed(err: &str) -> String {
    format!("Ошибка при получении заявки: {err}")
}

pub fn callback_error(err: &str) -> String {
    format!("Ошибка: {err}")
}

pub fn status_changed(app_id: &str, status: ApplicationStatus) -> String {
    format!("Статус заявки #{app_id} → {status}")
}
