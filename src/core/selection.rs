use crate::core::models::{Email, ThemeMode};

pub const DEFAULT_FOLDER: &str = "inbox";

/// UI selection state. Lives for the lifetime of the window, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub folder_id: String,
    pub email_id: Option<String>,
    pub sidebar_open: bool,
    pub theme: ThemeMode,
}

impl Selection {
    pub fn new(theme: ThemeMode) -> Self {
        Selection {
            folder_id: DEFAULT_FOLDER.to_string(),
            email_id: None,
            sidebar_open: true,
            theme,
        }
    }

    /// Switching folders always closes the open email.
    pub fn select_folder(&mut self, id: &str) {
        self.folder_id = id.to_string();
        self.email_id = None;
    }

    pub fn select_email(&mut self, email: &Email) {
        self.email_id = Some(email.id.clone());
    }

    pub fn clear_email(&mut self) {
        self.email_id = None;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// The open email, looked up by id in `emails`.
    pub fn selected_email<'a>(&self, emails: &'a [Email]) -> Option<&'a Email> {
        let id = self.email_id.as_deref()?;
        emails.iter().find(|email| email.id == id)
    }
}
