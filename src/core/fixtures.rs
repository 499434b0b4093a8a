use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::models::{Email, Folder, FolderIcon};
use crate::core::tree;

/// Everything the window displays: the folder forest and all emails.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Mailbox {
    pub folders: Vec<Folder>,
    #[serde(default)]
    pub emails: Vec<Email>,
}

impl Mailbox {
    pub fn builtin() -> Self {
        Mailbox {
            folders: folders(),
            emails: emails(),
        }
    }

    /// Read a mailbox from a JSON file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let data = fs::read_to_string(path)
            .map_err(|e| format!("read fixtures {}: {e}", path.display()))?;
        Self::from_json(&data).map_err(|e| format!("{}: {e}", path.display()))
    }

    pub fn from_json(data: &str) -> Result<Self, String> {
        serde_json::from_str(data).map_err(|e| format!("parse fixtures: {e}"))
    }

    /// Load from `path` if given, falling back to the built-in mailbox on any error.
    pub fn resolve(path: Option<&Path>) -> Self {
        let mailbox = match path {
            Some(path) => match Self::load(path) {
                Ok(mailbox) => {
                    log::info!(
                        "Loaded {} folders, {} emails from {}",
                        mailbox.folders.len(),
                        mailbox.emails.len(),
                        path.display()
                    );
                    mailbox
                }
                Err(e) => {
                    log::warn!("Failed to load fixtures, using built-in mailbox: {}", e);
                    Self::builtin()
                }
            },
            None => Self::builtin(),
        };

        for problem in tree::check(&mailbox.folders) {
            log::warn!("Folder tree: {}", problem);
        }
        mailbox
    }
}

pub fn folders() -> Vec<Folder> {
    vec![
        Folder::new("inbox", "Inbox", FolderIcon::Inbox)
            .with_count(4)
            .with_children(vec![
                Folder::new("inbox/important", "Important", FolderIcon::Folder).with_count(2),
                Folder::new("inbox/starred", "Starred", FolderIcon::Folder).with_count(1),
            ]),
        Folder::new("sent", "Sent", FolderIcon::Send),
        Folder::new("drafts", "Drafts", FolderIcon::File).with_count(2),
        Folder::new("spam", "Spam", FolderIcon::Alert),
        Folder::new("trash", "Trash", FolderIcon::Trash),
    ]
}

pub fn emails() -> Vec<Email> {
    vec![
        Email {
            id: "1".into(),
            from: "john@example.com".into(),
            to: "me@example.com".into(),
            subject: "Meeting tomorrow".into(),
            body: "Hi,\n\nJust a reminder about our meeting tomorrow at 10 AM. \
                   Please bring your project updates.\n\nBest regards,\nJohn"
                .into(),
            date: "2023-05-20T15:45:00".into(),
            read: false,
            folder: "inbox".into(),
        },
        Email {
            id: "2".into(),
            from: "jane@example.com".into(),
            to: "me@example.com".into(),
            subject: "Project update".into(),
            body: "Hello,\n\nI've finished the first draft of the project proposal. \
                   Could you please review it and provide your feedback?\n\nThanks,\nJane"
                .into(),
            date: "2023-05-19T09:30:00".into(),
            read: true,
            folder: "inbox/important".into(),
        },
        Email {
            id: "3".into(),
            from: "newsletter@example.com".into(),
            to: "me@example.com".into(),
            subject: "Your weekly digest".into(),
            body: "Dear subscriber,\n\nHere are the top stories in your industry this week:\n\n\
                   1. AI advancements in healthcare\n\
                   2. New renewable energy breakthroughs\n\
                   3. Global economic trends\n\nHappy reading!"
                .into(),
            date: "2023-05-18T08:00:00".into(),
            read: true,
            folder: "inbox/starred".into(),
        },
        Email {
            id: "4".into(),
            from: "me@example.com".into(),
            to: "client@example.com".into(),
            subject: "Proposal for upcoming project".into(),
            body: "Dear Client,\n\nPlease find attached our proposal for the upcoming project. \
                   Let me know if you have any questions or need any clarifications.\n\n\
                   Best regards,\nMe"
                .into(),
            date: "2023-05-17T14:20:00".into(),
            read: true,
            folder: "sent".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_shape() {
        let mailbox = Mailbox::builtin();
        assert_eq!(mailbox.folders.len(), 5);
        assert_eq!(mailbox.folders[0].children.len(), 2);
        assert_eq!(mailbox.emails.len(), 4);
        assert_eq!(mailbox.emails.iter().filter(|e| !e.read).count(), 1);
    }

    #[test]
    fn body_continuations_keep_single_spaces() {
        let emails = emails();
        assert!(emails[0]
            .body
            .contains("tomorrow at 10 AM. Please bring your project updates."));
        assert!(emails[2].body.contains("week:\n\n1. AI advancements in healthcare\n2. New"));
    }

    #[test]
    fn from_json_reads_minimal_mailbox() {
        let json = r#"{
            "folders": [
                { "id": "work", "name": "Work", "subfolders": [
                    { "id": "work/reports", "name": "Reports", "count": 3 }
                ]}
            ],
            "emails": [
                { "id": "a", "from": "x@example.com", "to": "y@example.com",
                  "subject": "Q3", "body": "numbers", "date": "2024-01-02T03:04:05",
                  "read": false, "folder": "work/reports" }
            ]
        }"#;
        let mailbox = Mailbox::from_json(json).unwrap();
        assert_eq!(mailbox.folders[0].children[0].count, Some(3));
        assert_eq!(mailbox.emails[0].folder, "work/reports");
    }

    #[test]
    fn from_json_rejects_garbage() {
        let err = Mailbox::from_json("{ not json").unwrap_err();
        assert!(err.starts_with("parse fixtures"));
    }

    #[test]
    fn resolve_falls_back_on_missing_file() {
        let mailbox = Mailbox::resolve(Some(Path::new("/nonexistent/nexmail/fixtures.json")));
        assert_eq!(mailbox, Mailbox::builtin());
    }
}
