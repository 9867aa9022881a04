// Modal system for TUI overlays
//
// Self-contained modal dialogs that handle their own input and return
// actions. App just holds Option<Modal>, input routing acts on the
// returned ModalAction. While any modal is open it absorbs every key,
// so background views never see input - the quote modal in particular
// traps focus entirely within its form.

use crate::forms::{ContactForm, FieldKind, SubmittedForm};
use crossterm::event::KeyCode;

/// Actions returned by modal input handling
#[derive(Debug)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    /// Close the modal
    Close,
    /// The quote form was submitted successfully
    Submitted(SubmittedForm),
}

/// Available modal types
pub enum Modal {
    /// Help overlay - shows keyboard shortcuts
    Help,
    /// Gallery lightbox - full view of one gallery item
    /// Stores the index of the item being viewed
    Lightbox(usize),
    /// Quote-request form, pre-filled with the estimator's summary.
    /// Owns its form state so a cancelled quote leaves nothing behind.
    Quote(ContactForm),
}

impl Modal {
    /// Create a help modal
    pub fn help() -> Self {
        Modal::Help
    }

    /// Create a lightbox for the given gallery index
    pub fn lightbox(index: usize) -> Self {
        Modal::Lightbox(index)
    }

    /// Create a quote-request modal with the service line pre-filled
    pub fn quote(service: &str) -> Self {
        Modal::Quote(ContactForm::quote(service))
    }

    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&mut self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::Lightbox(_) => match key {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::Quote(form) => Self::handle_quote_input(form, key),
        }
    }

    /// Quote form input: Tab wraps last→first, Shift+Tab wraps
    /// first→last, printable characters go into the focused field,
    /// Enter on the submit row validates and submits.
    fn handle_quote_input(form: &mut ContactForm, key: KeyCode) -> ModalAction {
        match key {
            KeyCode::Esc => ModalAction::Close,
            KeyCode::Tab | KeyCode::Down => {
                form.focus_next();
                ModalAction::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                form.focus_prev();
                ModalAction::None
            }
            KeyCode::Char(c) => {
                if let Some(field) = form.focused_field_mut() {
                    field.push_char(c);
                }
                ModalAction::None
            }
            KeyCode::Backspace => {
                if let Some(field) = form.focused_field_mut() {
                    field.backspace();
                }
                ModalAction::None
            }
            KeyCode::Enter => {
                if form.is_on_submit() {
                    match form.submit() {
                        Some(submitted) => ModalAction::Submitted(submitted),
                        // Invalid fields are now marked; keep the modal open
                        None => ModalAction::None,
                    }
                } else if let Some(field) = form.focused_field_mut() {
                    if field.kind == FieldKind::Multiline {
                        field.push_char('\n');
                    } else {
                        form.focus_next();
                    }
                    ModalAction::None
                } else {
                    ModalAction::None
                }
            }
            _ => ModalAction::None,
        }
    }

    /// Get the gallery index if this is a Lightbox modal
    pub fn lightbox_index(&self) -> Option<usize> {
        match self {
            Modal::Lightbox(idx) => Some(*idx),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote_modal() -> Modal {
        Modal::quote("نقل عفش - 3 غرف")
    }

    #[test]
    fn quote_form_has_all_stops() {
        let modal = quote_modal();
        let Modal::Quote(ref form) = modal else {
            unreachable!()
        };
        // name, phone, service, message fields plus the submit row
        assert_eq!(form.fields.len(), 4);
    }

    #[test]
    fn lightbox_closes_on_escape() {
        let mut modal = Modal::lightbox(2);
        assert_eq!(modal.lightbox_index(), Some(2));
        assert!(matches!(modal.handle_input(KeyCode::Esc), ModalAction::Close));
    }

    #[test]
    fn quote_submit_requires_valid_fields() {
        let mut modal = quote_modal();

        // Jump to the submit row and try to submit with empty fields
        let Modal::Quote(ref mut form) = modal else {
            unreachable!()
        };
        let submit_pos = form.fields.len();
        form.set_focus(submit_pos);

        assert!(matches!(modal.handle_input(KeyCode::Enter), ModalAction::None));

        // Fill the required fields, then submit again
        let Modal::Quote(ref mut form) = modal else {
            unreachable!()
        };
        form.set_focus(0);
        for c in "أحمد".chars() {
            modal.handle_input(KeyCode::Char(c));
        }
        modal.handle_input(KeyCode::Tab);
        for c in "0512345678".chars() {
            modal.handle_input(KeyCode::Char(c));
        }
        let Modal::Quote(ref mut form) = modal else {
            unreachable!()
        };
        form.set_focus(submit_pos);

        match modal.handle_input(KeyCode::Enter) {
            ModalAction::Submitted(submitted) => {
                assert_eq!(submitted.form_id, "modal-form");
                assert_eq!(submitted.data.get("name").map(String::as_str), Some("أحمد"));
            }
            other => panic!("expected submission, got {other:?}"),
        }
    }
}
