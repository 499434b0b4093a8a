use serde::Deserialize;

/// Icon shown next to a folder. Mapped to a desktop icon name by the UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FolderIcon {
    Inbox,
    Send,
    File,
    Alert,
    Trash,
    #[default]
    Folder,
}

/// A mail folder. `id` is a `/`-separated path; children extend it by one segment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Folder {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: FolderIcon,
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default, alias = "subfolders")]
    pub children: Vec<Folder>,
}

impl Folder {
    pub fn new(id: &str, name: &str, icon: FolderIcon) -> Self {
        Folder {
            id: id.to_string(),
            name: name.to_string(),
            icon,
            count: None,
            children: Vec::new(),
        }
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_children(mut self, children: Vec<Folder>) -> Self {
        self.children = children;
        self
    }
}

/// A single email. `folder` references a folder id by literal prefix.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Email {
    pub id: String,
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
    /// ISO-8601 timestamp, e.g. `2023-05-20T15:45:00`.
    pub date: String,
    pub read: bool,
    pub folder: String,
}

/// Color theme of the window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Case-insensitive `light` / `dark`; anything else is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_parse_is_case_insensitive() {
        assert_eq!(ThemeMode::parse("Dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::parse(" LIGHT "), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::parse("solarized"), None);
        assert_eq!(ThemeMode::parse(""), None);
    }

    #[test]
    fn folder_json_accepts_subfolders_alias() {
        let json = r#"{
            "id": "inbox",
            "name": "Inbox",
            "icon": "inbox",
            "count": 4,
            "subfolders": [{ "id": "inbox/important", "name": "Important" }]
        }"#;
        let folder: Folder = serde_json::from_str(json).unwrap();
        assert_eq!(folder.icon, FolderIcon::Inbox);
        assert_eq!(folder.count, Some(4));
        assert_eq!(folder.children.len(), 1);
        assert_eq!(folder.children[0].icon, FolderIcon::Folder);
        assert_eq!(folder.children[0].count, None);
    }
}
