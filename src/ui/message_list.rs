use cosmic::iced::Length;
use cosmic::widget;
use cosmic::Element;

use crate::app::Message;
use crate::core::dates;
use crate::core::models::Email;

const PREVIEW_CHARS: usize = 60;

/// Render the emails of the selected folder.
pub fn view<'a>(emails: &[&'a Email], selected: Option<&str>) -> Element<'a, Message> {
    let mut col = widget::column().spacing(2).padding(8);

    if emails.is_empty() {
        col = col.push(widget::text::body("No messages"));
    }

    for &email in emails {
        let is_selected = selected == Some(email.id.as_str());
        let unread = if !email.read { "● " } else { "" };

        let sender = if email.read {
            widget::text::body(email.from.as_str())
        } else {
            widget::text::heading(format!("{}{}", unread, email.from))
        };
        let top = widget::row()
            .spacing(8)
            .align_y(cosmic::iced::Alignment::Center)
            .push(sender)
            .push(widget::horizontal_space())
            .push(widget::text::caption(dates::short(&email.date)));

        let subject = if email.read {
            widget::text::body(email.subject.as_str())
        } else {
            widget::text::heading(email.subject.as_str())
        };

        let row_content = widget::column()
            .push(top)
            .push(subject)
            .push(widget::text::caption(preview(&email.body, PREVIEW_CHARS)))
            .spacing(2);

        let mut btn = widget::button::custom(widget::container(row_content).padding(8))
            .on_press(Message::SelectEmail(email.id.clone()))
            .width(Length::Fill);

        btn = if is_selected {
            btn.class(cosmic::theme::Button::Suggested)
        } else {
            btn.class(cosmic::theme::Button::Text)
        };

        col = col.push(btn);
    }

    widget::scrollable(col).height(Length::Fill).into()
}

/// Single-line preview of a body, cut at `max` characters.
fn preview(body: &str, max: usize) -> String {
    let flat = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max {
        return flat;
    }
    let cut: String = flat.chars().take(max).collect();
    format!("{}…", cut.trim_end())
}
