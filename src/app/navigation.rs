use cosmic::app::Task;

use crate::core::filter;

use super::{AppModel, Message};

/// Direction of a keyboard step through the message list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Step {
    Up,
    Down,
}

/// Position to select after a step, clamped to the list. With nothing
/// selected yet, either direction lands on the first row.
pub(super) fn step_position(len: usize, current: Option<usize>, step: Step) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match (current, step) {
        (None, _) => 0,
        (Some(pos), Step::Down) => (pos + 1).min(len - 1),
        (Some(pos), Step::Up) => pos.saturating_sub(1),
    })
}

impl AppModel {
    pub(super) fn handle_navigation(&mut self, message: Message) -> Task<Message> {
        let step = match message {
            Message::SelectionDown => Step::Down,
            Message::SelectionUp => Step::Up,
            Message::CloseEmail => {
                self.selection.clear_email();
                return Task::none();
            }
            _ => return Task::none(),
        };

        let visible = filter::in_folder(&self.mailbox.emails, &self.selection.folder_id);
        let current = self
            .selection
            .email_id
            .as_deref()
            .and_then(|id| visible.iter().position(|email| email.id == id));

        if let Some(pos) = step_position(visible.len(), current, step) {
            let id = visible[pos].id.clone();
            return self.dispatch(Message::SelectEmail(id));
        }
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_has_no_position() {
        assert_eq!(step_position(0, None, Step::Down), None);
        assert_eq!(step_position(0, Some(3), Step::Up), None);
    }

    #[test]
    fn first_step_selects_first_row() {
        assert_eq!(step_position(3, None, Step::Down), Some(0));
        assert_eq!(step_position(3, None, Step::Up), Some(0));
    }

    #[test]
    fn steps_clamp_at_both_ends() {
        assert_eq!(step_position(3, Some(0), Step::Up), Some(0));
        assert_eq!(step_position(3, Some(0), Step::Down), Some(1));
        assert_eq!(step_position(3, Some(2), Step::Down), Some(2));
        assert_eq!(step_position(3, Some(2), Step::Up), Some(1));
    }
}
