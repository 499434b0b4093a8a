use cosmic::iced::Length;
use cosmic::widget;
use cosmic::Element;

use crate::app::Message;
use crate::core::dates;
use crate::core::models::Email;

/// Render the reading pane for the open email.
pub fn view(email: Option<&Email>) -> Element<'_, Message> {
    let Some(email) = email else {
        return widget::container(widget::text::body("Select an email to read"))
            .padding(16)
            .width(Length::Fill)
            .height(Length::Fill)
            .into();
    };

    let participants = widget::row()
        .spacing(4)
        .align_y(cosmic::iced::Alignment::Center)
        .push(widget::text::heading(email.from.as_str()))
        .push(widget::text::body("to"))
        .push(widget::text::heading(email.to.as_str()))
        .push(widget::horizontal_space())
        .push(widget::text::caption(dates::long(&email.date)));

    let col = widget::column()
        .spacing(16)
        .padding(24)
        .push(widget::text::title3(email.subject.as_str()))
        .push(participants)
        .push(widget::divider::horizontal::default())
        .push(widget::text::body(email.body.as_str()));

    widget::scrollable(col)
        .height(Length::Fill)
        .width(Length::Fill)
        .into()
}
