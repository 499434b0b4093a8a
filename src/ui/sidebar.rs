use cosmic::iced::Length;
use cosmic::widget;
use cosmic::Element;

use crate::app::Message;
use crate::core::tree::FlatFolder;
use crate::ui::{folder_icon_name, small_icon};

/// Render the folder sidebar: compose button, indented folder tree, new-folder button.
pub fn view<'a>(folders: &[FlatFolder<'a>], selected_folder: &str) -> Element<'a, Message> {
    let mut col = widget::column().spacing(4).padding(8);

    col = col.push(
        widget::button::suggested("Compose")
            .on_press(Message::Noop)
            .width(Length::Fill),
    );
    col = col.push(widget::vertical_space().height(8));

    for entry in folders {
        let folder = entry.folder;

        let mut row = widget::row()
            .spacing(8)
            .align_y(cosmic::iced::Alignment::Center)
            .push(small_icon(folder_icon_name(folder.icon)))
            .push(widget::text::body(folder.name.as_str()))
            .push(widget::horizontal_space());
        if let Some(count) = folder.count {
            row = row.push(widget::text::caption(count.to_string()));
        }

        let indent = (entry.depth.min(4) as u16) * 16;
        let padded = widget::container(row).padding([0, 0, 0, indent]);

        let mut btn = widget::button::custom(padded)
            .on_press(Message::SelectFolder(folder.id.clone()))
            .width(Length::Fill);

        btn = if folder.id == selected_folder {
            btn.class(cosmic::theme::Button::Suggested)
        } else {
            btn.class(cosmic::theme::Button::Text)
        };

        col = col.push(btn);
    }

    col = col.push(
        widget::button::custom(
            widget::row()
                .spacing(8)
                .align_y(cosmic::iced::Alignment::Center)
                .push(small_icon("list-add-symbolic"))
                .push(widget::text::body("Create new folder")),
        )
        .on_press(Message::Noop)
        .class(cosmic::theme::Button::Text)
        .width(Length::Fill),
    );

    widget::scrollable(col).height(Length::Fill).into()
}
