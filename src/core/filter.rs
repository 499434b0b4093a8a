use crate::core::models::Email;

/// Emails whose `folder` starts with `folder_id`, in their original order.
///
/// This is a literal string prefix, not a path-segment match: `"inbox"` also
/// matches a folder named `"inboxes"`. An empty id matches every email.
pub fn in_folder<'a>(emails: &'a [Email], folder_id: &str) -> Vec<&'a Email> {
    emails
        .iter()
        .filter(|email| email.folder.starts_with(folder_id))
        .collect()
}
