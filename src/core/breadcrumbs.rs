use crate::core::models::{Folder, FolderIcon};
use crate::core::tree;

/// One clickable entry of the breadcrumb trail.
#[derive(Debug, Clone, PartialEq)]
pub struct Breadcrumb {
    /// Cumulative path, e.g. `inbox/important`. Selecting it re-selects that folder.
    pub id: String,
    pub name: String,
    pub icon: FolderIcon,
}

/// Build the trail from the root segment down to `folder_id`.
///
/// Each prefix resolves to the folder with exactly that id anywhere in the
/// forest. Unknown prefixes fall back to the raw segment and a plain folder
/// icon, so the trail always renders.
pub fn trail(folder_id: &str, forest: &[Folder]) -> Vec<Breadcrumb> {
    let mut crumbs = Vec::new();
    let mut path = String::new();

    for segment in folder_id.split('/') {
        if !crumbs.is_empty() {
            path.push('/');
        }
        path.push_str(segment);

        let crumb = match tree::find(forest, &path) {
            Some(folder) => Breadcrumb {
                id: path.clone(),
                name: folder.name.clone(),
                icon: folder.icon,
            },
            None => Breadcrumb {
                id: path.clone(),
                name: segment.to_string(),
                icon: FolderIcon::Folder,
            },
        };
        crumbs.push(crumb);
    }

    crumbs
}
