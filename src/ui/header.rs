use cosmic::iced::Length;
use cosmic::widget;
use cosmic::Element;

use crate::app::Message;
use crate::core::breadcrumbs::Breadcrumb;
use crate::core::models::ThemeMode;
use crate::ui::{folder_icon_name, small_icon};

pub fn search_input_id() -> widget::Id {
    widget::Id::new("search-input")
}

/// Brand row with the help, settings and account buttons.
pub fn top_bar<'a>() -> Element<'a, Message> {
    let row = widget::row()
        .spacing(4)
        .align_y(cosmic::iced::Alignment::Center)
        .push(widget::text::title4("Nexmail"))
        .push(widget::horizontal_space())
        .push(
            widget::button::icon(widget::icon::from_name("help-about-symbolic"))
                .on_press(Message::Noop)
                .class(cosmic::theme::Button::Text),
        )
        .push(
            widget::button::icon(widget::icon::from_name("preferences-system-symbolic"))
                .on_press(Message::Noop)
                .class(cosmic::theme::Button::Text),
        )
        .push(
            widget::button::icon(widget::icon::from_name("avatar-default-symbolic"))
                .on_press(Message::ToggleAccountMenu)
                .class(cosmic::theme::Button::Text),
        );

    widget::container(row)
        .padding([4, 16])
        .width(Length::Fill)
        .into()
}

/// Account menu shown under the top bar. Its entries are placeholders.
pub fn account_menu<'a>() -> Element<'a, Message> {
    let menu = widget::column()
        .spacing(2)
        .push(widget::text::heading("My Account"))
        .push(widget::divider::horizontal::default())
        .push(
            widget::button::text("Profile")
                .on_press(Message::Noop)
                .width(Length::Fill),
        )
        .push(
            widget::button::text("Settings")
                .on_press(Message::Noop)
                .width(Length::Fill),
        )
        .push(
            widget::button::text("Sign out")
                .on_press(Message::Noop)
                .width(Length::Fill),
        );

    let card = widget::container(menu)
        .padding(8)
        .width(Length::Fixed(200.0))
        .class(cosmic::style::Container::Card);

    widget::row()
        .push(widget::horizontal_space())
        .push(card)
        .padding([0, 16, 8, 16])
        .into()
}

/// Sidebar toggle, breadcrumb trail, search box and theme toggle.
pub fn view<'a>(
    crumbs: &[Breadcrumb],
    search_query: &'a str,
    theme: ThemeMode,
) -> Element<'a, Message> {
    let mut trail = widget::row()
        .spacing(4)
        .align_y(cosmic::iced::Alignment::Center);

    for (i, crumb) in crumbs.iter().enumerate() {
        if i > 0 {
            trail = trail.push(small_icon("go-next-symbolic"));
        }
        let content = widget::row()
            .spacing(8)
            .align_y(cosmic::iced::Alignment::Center)
            .push(small_icon(folder_icon_name(crumb.icon)))
            .push(widget::text::body(crumb.name.clone()));
        trail = trail.push(
            widget::button::custom(content)
                .on_press(Message::SelectFolder(crumb.id.clone()))
                .padding(4)
                .class(cosmic::theme::Button::Text),
        );
    }

    let search = widget::text_input("Search mail", search_query)
        .on_input(Message::SearchQueryChanged)
        .id(search_input_id());

    // The icon shows the theme the button switches to.
    let theme_icon = match theme {
        ThemeMode::Dark => "weather-clear-symbolic",
        ThemeMode::Light => "weather-clear-night-symbolic",
    };

    let row = widget::row()
        .spacing(8)
        .align_y(cosmic::iced::Alignment::Center)
        .push(
            widget::button::icon(widget::icon::from_name("open-menu-symbolic"))
                .on_press(Message::ToggleSidebar)
                .class(cosmic::theme::Button::Text),
        )
        .push(trail)
        .push(widget::horizontal_space())
        .push(widget::container(search).width(Length::Fixed(256.0)))
        .push(
            widget::button::icon(widget::icon::from_name(theme_icon))
                .on_press(Message::ToggleTheme)
                .class(cosmic::theme::Button::Text),
        );

    widget::container(row)
        .padding([8, 16])
        .width(Length::Fill)
        .into()
}
