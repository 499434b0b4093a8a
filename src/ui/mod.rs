pub mod header;
pub mod message_list;
pub mod message_view;
pub mod sidebar;

use cosmic::widget;

use crate::core::models::FolderIcon;

/// Symbolic desktop icon for a folder.
pub fn folder_icon_name(icon: FolderIcon) -> &'static str {
    match icon {
        FolderIcon::Inbox => "mail-inbox-symbolic",
        FolderIcon::Send => "mail-send-symbolic",
        FolderIcon::File => "text-x-generic-symbolic",
        FolderIcon::Alert => "dialog-warning-symbolic",
        FolderIcon::Trash => "user-trash-symbolic",
        FolderIcon::Folder => "folder-symbolic",
    }
}

/// A 16px symbolic icon.
pub fn small_icon(name: &'static str) -> widget::Icon {
    widget::icon::from_name(name).size(16).icon()
}
