//! # Presentation Formatter
//!
//! Pure rendering of an application record into operator-facing text, and
//! the three-action keyboard layout. No I/O, deterministic output.

use crate::domain::types::{Action, ActionButton, Application};

/// Placeholder for any missing optional field.
pub const DASH: &str = "—";

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or(DASH)
}

/// Render an application as the fixed-layout triage card.
pub fn render(app: &Application) -> String {
    let customer = &app.customer;
    let lot = &app.lot;

    let tags = if lot.tags.is_empty() {
        DASH.to_string()
    } else {
        lot.tags.join(", ")
    };
    let price = lot
        .price
        .as_ref()
        .map(|p| p.to_string())
        .unwrap_or_else(|| DASH.to_string());

    format!(
        "🆕 Заявка #{id}\n\
         Создана: {created}\n\
         Статус: {status}\n\
         \n\
         👤 Клиент: {name} ({phone})\n\
         Способ связи: {contact}\n\
         Удобное время: {slot}\n\
         Комментарий: {comment}\n\
         \n\
         🏢 Лот: {title}\n\
         Город: {city}\n\
         Блок: {block}\n\
         Цена: {price}\n\
         Теги: {tags}\n",
        id = app.id,
        created = or_dash(app.created_at.as_deref()),
        status = app.status,
        name = or_dash(customer.name.as_deref()),
        phone = or_dash(customer.phone.as_deref()),
        contact = or_dash(app.contact_method.as_deref()),
        slot = or_dash(app.time_slot.as_deref()),
        comment = or_dash(app.comment.as_deref()),
        title = or_dash(lot.title.as_deref()),
        city = or_dash(lot.city.as_deref()),
        block = or_dash(lot.block.as_deref()),
        price = price,
        tags = tags,
    )
}

/// The three action buttons for an application: approve and reject side by
/// side, need-info on its own row.
pub fn action_keyboard(app_id: &str) -> Vec<Vec<ActionButton>> {
    vec![
        vec![
            ActionButton {
                label: "✅ Одобрить".to_string(),
                token: Action::Approve.token(app_id),
            },
            ActionButton {
                label: "❌ Отклонить".to_string(),
                token: Action::Reject.token(app_id),
            },
        ],
        vec![ActionButton {
            label: "❓ Нужна инфо".to_string(),
            token: Action::NeedInfo.token(app_id),
        }],
    ]
}
