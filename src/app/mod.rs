mod navigation;

use cosmic::app::{Core, Task};
use cosmic::iced::keyboard;
use cosmic::iced::{Event, Length, Subscription};
use cosmic::widget;
use cosmic::Element;

use crate::config::Config;
use crate::core::breadcrumbs;
use crate::core::filter;
use crate::core::fixtures::Mailbox;
use crate::core::models::ThemeMode;
use crate::core::selection::Selection;
use crate::core::tree;

const APP_ID: &str = "com.nexmail.Nexmail";

pub struct AppModel {
    core: Core,

    pub(super) mailbox: Mailbox,
    pub(super) selection: Selection,

    // Visual-only affordances
    pub(super) search_query: String,
    pub(super) account_menu_open: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    SelectFolder(String),
    SelectEmail(String),
    ToggleSidebar,
    ToggleTheme,

    // Keyboard navigation
    SelectionUp,
    SelectionDown,
    CloseEmail,

    SearchActivate,
    SearchQueryChanged(String),
    ToggleAccountMenu,

    Noop,
}

impl cosmic::Application for AppModel {
    type Executor = cosmic::executor::Default;
    type Flags = ();
    type Message = Message;

    const APP_ID: &'static str = APP_ID;

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, _flags: Self::Flags) -> (Self, Task<Self::Message>) {
        let config = Config::resolve();

        let theme = config.theme.unwrap_or_else(|| {
            if cosmic::theme::is_dark() {
                ThemeMode::Dark
            } else {
                ThemeMode::Light
            }
        });
        log::info!("Starting with {:?} theme", theme);

        let mailbox = Mailbox::resolve(config.fixtures.as_deref());

        let app = AppModel {
            core,
            mailbox,
            selection: Selection::new(theme),
            search_query: String::new(),
            account_menu_open: false,
        };

        let title_task = app.set_window_title("Nexmail".into());
        let theme_task = apply_theme(theme);

        (app, cosmic::task::batch(vec![title_task, theme_task]))
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        // Keys captured by the search input never reach this listener.
        cosmic::iced_futures::event::listen_raw(|event, status, _| {
            if cosmic::iced_core::event::Status::Ignored != status {
                return None;
            }
            match event {
                Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => match key {
                    keyboard::Key::Named(keyboard::key::Named::ArrowDown) => {
                        Some(Message::SelectionDown)
                    }
                    keyboard::Key::Named(keyboard::key::Named::ArrowUp) => {
                        Some(Message::SelectionUp)
                    }
                    keyboard::Key::Named(keyboard::key::Named::Escape) => {
                        Some(Message::CloseEmail)
                    }
                    keyboard::Key::Character(ref c)
                        if c.as_str() == "j" && !modifiers.control() =>
                    {
                        Some(Message::SelectionDown)
                    }
                    keyboard::Key::Character(ref c)
                        if c.as_str() == "k" && !modifiers.control() =>
                    {
                        Some(Message::SelectionUp)
                    }
                    keyboard::Key::Character(ref c)
                        if c.as_str() == "/" && !modifiers.control() =>
                    {
                        Some(Message::SearchActivate)
                    }
                    _ => None,
                },
                _ => None,
            }
        })
    }

    fn view(&self) -> Element<'_, Self::Message> {
        let folders = &self.mailbox.folders;
        let emails = filter::in_folder(&self.mailbox.emails, &self.selection.folder_id);
        let crumbs = breadcrumbs::trail(&self.selection.folder_id, folders);
        let open_email = self.selection.selected_email(&self.mailbox.emails);

        let header = crate::ui::header::view(&crumbs, &self.search_query, self.selection.theme);
        let message_list =
            crate::ui::message_list::view(&emails, self.selection.email_id.as_deref());
        let message_view = crate::ui::message_view::view(open_email);

        let reading_area = widget::row()
            .push(
                widget::container(message_list)
                    .width(Length::Fixed(320.0))
                    .height(Length::Fill),
            )
            .push(widget::divider::vertical::default())
            .push(
                widget::container(message_view)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .height(Length::Fill);

        let main_column = widget::column()
            .push(header)
            .push(widget::divider::horizontal::default())
            .push(reading_area)
            .width(Length::Fill)
            .height(Length::Fill);

        let mut main_content = widget::row().height(Length::Fill);
        if self.selection.sidebar_open {
            let flat = tree::flatten(folders);
            main_content = main_content
                .push(
                    widget::container(crate::ui::sidebar::view(
                        &flat,
                        &self.selection.folder_id,
                    ))
                    .width(Length::Fixed(256.0))
                    .height(Length::Fill),
                )
                .push(widget::divider::vertical::default());
        }
        main_content = main_content.push(main_column);

        let folder_name = crumbs
            .last()
            .map(|c| c.name.as_str())
            .unwrap_or_default();
        let noun = if emails.len() == 1 { "message" } else { "messages" };
        let status_bar = widget::container(widget::text::caption(format!(
            "{} · {} {}",
            folder_name,
            emails.len(),
            noun
        )))
        .padding([4, 8])
        .width(Length::Fill);

        let mut content = widget::column().push(crate::ui::header::top_bar());
        if self.account_menu_open {
            content = content.push(crate::ui::header::account_menu());
        }

        content
            .push(main_content)
            .push(status_bar)
            .height(Length::Fill)
            .into()
    }

    fn update(&mut self, message: Self::Message) -> Task<Self::Message> {
        match message {
            Message::SelectFolder(id) => {
                log::debug!("Select folder {:?}", id);
                self.selection.select_folder(&id);
            }

            Message::SelectEmail(id) => {
                match self.mailbox.emails.iter().find(|email| email.id == id) {
                    Some(email) => {
                        log::debug!("Select email {:?}", id);
                        self.selection.select_email(email);
                    }
                    None => log::warn!("Ignoring selection of unknown email {:?}", id),
                }
            }

            Message::ToggleSidebar => {
                self.selection.toggle_sidebar();
                log::debug!("Sidebar open: {}", self.selection.sidebar_open);
            }

            Message::ToggleTheme => {
                self.selection.toggle_theme();
                log::debug!("Theme: {:?}", self.selection.theme);
                return apply_theme(self.selection.theme);
            }

            Message::SelectionUp | Message::SelectionDown | Message::CloseEmail => {
                return self.handle_navigation(message);
            }

            Message::SearchActivate => {
                return widget::text_input::focus(crate::ui::header::search_input_id());
            }
            Message::SearchQueryChanged(q) => {
                self.search_query = q;
            }

            Message::ToggleAccountMenu => {
                self.account_menu_open = !self.account_menu_open;
            }

            Message::Noop => {}
        }
        Task::none()
    }
}

impl AppModel {
    fn set_window_title(&self, title: String) -> cosmic::app::Task<Message> {
        self.core.set_title(self.core.main_window_id(), title)
    }

    /// Dispatch a message through the update loop (for recursive calls from handlers).
    pub(super) fn dispatch(&mut self, message: Message) -> Task<Message> {
        <Self as cosmic::Application>::update(self, message)
    }
}

fn apply_theme(mode: ThemeMode) -> Task<Message> {
    let theme = match mode {
        ThemeMode::Light => cosmic::Theme::light(),
        ThemeMode::Dark => cosmic::Theme::dark(),
    };
    cosmic::command::set_theme(theme)
}
