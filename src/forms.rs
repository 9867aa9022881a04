// Contact form state: fields, validation, focus movement
//
// Both forms on the site (the contact page and the quote-request modal)
// share the same machinery: required fields validated on submit, invalid
// marks cleared as soon as the field is edited again, and a mock
// submission that captures the data without any network I/O.
//
// The focus trap is a plain wrapping ring over the focusable elements:
// Tab from the last wraps to the first, Shift+Tab from the first wraps to
// the last.

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Wrapping focus order over a fixed number of focusable elements
#[derive(Debug, Clone, Copy)]
pub struct FocusRing {
    len: usize,
    pos: usize,
}

impl FocusRing {
    pub fn new(len: usize) -> Self {
        Self { len, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn set(&mut self, pos: usize) {
        if pos < self.len {
            self.pos = pos;
        }
    }

    /// Tab: forward, wrapping from the last element to the first
    pub fn next(&mut self) {
        if self.len > 0 {
            self.pos = (self.pos + 1) % self.len;
        }
    }

    /// Shift+Tab: backward, wrapping from the first element to the last
    pub fn prev(&mut self) {
        if self.len > 0 {
            self.pos = (self.pos + self.len - 1) % self.len;
        }
    }
}

/// Input kind of a field, drives validation and editing behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Phone,
    Multiline,
}

/// One editable form field
#[derive(Debug, Clone)]
pub struct Field {
    pub label: &'static str,
    /// Stable key used in the captured submission payload
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
    /// Set by a failed validation, cleared on the next edit
    pub invalid: bool,
}

impl Field {
    fn required(label: &'static str, name: &'static str, kind: FieldKind) -> Self {
        Self {
            label,
            name,
            kind,
            required: true,
            value: String::new(),
            invalid: false,
        }
    }

    fn optional(label: &'static str, name: &'static str, kind: FieldKind) -> Self {
        Self {
            required: false,
            ..Self::required(label, name, kind)
        }
    }

    pub fn push_char(&mut self, c: char) {
        // Newlines only make sense in the message field
        if c == '\n' && self.kind != FieldKind::Multiline {
            return;
        }
        self.value.push(c);
        self.invalid = false;
    }

    pub fn backspace(&mut self) {
        self.value.pop();
        self.invalid = false;
    }

    fn is_valid(&self) -> bool {
        let trimmed = self.value.trim();
        if self.required && trimmed.is_empty() {
            return false;
        }
        match self.kind {
            FieldKind::Phone => trimmed.is_empty() || phone_valid(trimmed),
            _ => true,
        }
    }
}

/// Saudi mobile number: 05XXXXXXXX or +9665XXXXXXXX
pub fn phone_valid(value: &str) -> bool {
    static PATTERN: OnceLock<regex::Regex> = OnceLock::new();
    let re = PATTERN.get_or_init(|| {
        regex::Regex::new(r"^(?:\+?9665|05)[0-9]{8}$").expect("phone pattern is valid")
    });
    re.is_match(value)
}

/// Captured data of a successful mock submission
#[derive(Debug, Clone, Serialize)]
pub struct SubmittedForm {
    pub form_id: String,
    pub data: BTreeMap<String, String>,
}

/// A form instance: fields plus a focus ring spanning fields + submit
pub struct ContactForm {
    pub id: &'static str,
    pub fields: Vec<Field>,
    /// Success toast text shown after submission
    pub success_message: &'static str,
    focus: FocusRing,
}

impl ContactForm {
    /// The contact-page form: name, phone, message
    pub fn contact() -> Self {
        let fields = vec![
            Field::required("الاسم", "name", FieldKind::Text),
            Field::required("رقم الجوال", "phone", FieldKind::Phone),
            Field::required("رسالتك", "message", FieldKind::Multiline),
        ];
        Self {
            id: "contact-form",
            focus: FocusRing::new(fields.len() + 1),
            fields,
            success_message: "تم إرسال رسالتك بنجاح! سنتواصل معك قريباً.",
        }
    }

    /// The quote-request modal form, with the service pre-selected
    pub fn quote(service: &str) -> Self {
        let mut service_field = Field::required("الخدمة المطلوبة", "service", FieldKind::Text);
        service_field.value = service.to_string();
        let fields = vec![
            Field::required("الاسم", "name", FieldKind::Text),
            Field::required("رقم الجوال", "phone", FieldKind::Phone),
            service_field,
            Field::optional("تفاصيل إضافية", "message", FieldKind::Multiline),
        ];
        Self {
            id: "modal-form",
            focus: FocusRing::new(fields.len() + 1),
            fields,
            success_message: "تم إرسال طلبك بنجاح! سنتواصل معك خلال 24 ساعة.",
        }
    }

    /// Focus position; `fields.len()` is the submit control
    pub fn focus(&self) -> usize {
        self.focus.pos()
    }

    pub fn focus_next(&mut self) {
        self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus.prev();
    }

    pub fn set_focus(&mut self, pos: usize) {
        self.focus.set(pos);
    }

    pub fn is_on_submit(&self) -> bool {
        self.focus.pos() == self.fields.len()
    }

    /// The field under focus, None when on the submit control
    pub fn focused_field_mut(&mut self) -> Option<&mut Field> {
        let pos = self.focus.pos();
        self.fields.get_mut(pos)
    }

    /// Validate all fields, marking the invalid ones. Returns overall
    /// validity; marks persist until the field is edited.
    pub fn validate(&mut self) -> bool {
        let mut ok = true;
        for field in &mut self.fields {
            field.invalid = !field.is_valid();
            ok &= !field.invalid;
        }
        ok
    }

    /// Mock submission: validate, capture the data, reset the fields.
    /// Returns None (leaving invalid marks in place) when validation
    /// fails. No network I/O happens anywhere.
    pub fn submit(&mut self) -> Option<SubmittedForm> {
        if !self.validate() {
            return None;
        }
        let data = self
            .fields
            .iter()
            .map(|f| (f.name.to_string(), f.value.trim().to_string()))
            .collect();
        let submitted = SubmittedForm {
            form_id: self.id.to_string(),
            data,
        };
        for field in &mut self.fields {
            field.value.clear();
            field.invalid = false;
        }
        self.focus.set(0);
        Some(submitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_trap_wraps_both_ways() {
        // Three focusable elements: Tab on the last lands on the first,
        // Shift+Tab on the first lands on the last
        let mut ring = FocusRing::new(3);
        ring.set(2);
        ring.next();
        assert_eq!(ring.pos(), 0);

        ring.set(0);
        ring.prev();
        assert_eq!(ring.pos(), 2);
    }

    #[test]
    fn empty_ring_is_inert() {
        let mut ring = FocusRing::new(0);
        ring.next();
        ring.prev();
        assert_eq!(ring.pos(), 0);
    }

    fn filled_contact() -> ContactForm {
        let mut form = ContactForm::contact();
        form.fields[0].value = "أحمد".to_string();
        form.fields[1].value = "0551234567".to_string();
        form.fields[2].value = "أحتاج نقل عفش".to_string();
        form
    }

    #[test]
    fn submit_captures_and_resets() {
        let mut form = filled_contact();
        let submitted = form.submit().expect("valid form submits");
        assert_eq!(submitted.form_id, "contact-form");
        assert_eq!(submitted.data["name"], "أحمد");
        assert_eq!(submitted.data["phone"], "0551234567");
        assert!(form.fields.iter().all(|f| f.value.is_empty()));
    }

    #[test]
    fn missing_required_field_blocks_submit() {
        let mut form = filled_contact();
        form.fields[0].value = "   ".to_string(); // whitespace only
        assert!(form.submit().is_none());
        assert!(form.fields[0].invalid);
        assert!(!form.fields[1].invalid);
    }

    #[test]
    fn editing_clears_invalid_mark() {
        let mut form = ContactForm::contact();
        assert!(!form.validate());
        assert!(form.fields[0].invalid);

        form.fields[0].push_char('م');
        assert!(!form.fields[0].invalid);
    }

    #[test]
    fn phone_validation() {
        assert!(phone_valid("0551234567"));
        assert!(phone_valid("+966512345678"));
        assert!(phone_valid("966512345678"));
        assert!(!phone_valid("12345"));
        assert!(!phone_valid("05512345"));
        assert!(!phone_valid("not a phone"));

        let mut form = filled_contact();
        form.fields[1].value = "12345".to_string();
        assert!(form.submit().is_none());
        assert!(form.fields[1].invalid);
    }

    #[test]
    fn quote_form_carries_service() {
        let form = ContactForm::quote("نقل عفش");
        let service = form.fields.iter().find(|f| f.name == "service").unwrap();
        assert_eq!(service.value, "نقل عفش");
        assert_eq!(form.id, "modal-form");
    }

    #[test]
    fn newline_only_in_multiline() {
        let mut form = ContactForm::contact();
        form.fields[0].push_char('\n');
        assert!(form.fields[0].value.is_empty());
        form.fields[2].push_char('\n');
        assert_eq!(form.fields[2].value, "\n");
    }
}
