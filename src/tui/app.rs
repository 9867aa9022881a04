// Application state
//
// App owns all mutable UI state: the active view, the per-view panel
// states, the modal/toast overlays, the analytics sink and the key
// debouncer. Rendering reads from it, input handling mutates it.

use crate::analytics::{AnalyticsPayload, CtaKind, DataLayer};
use crate::config::Config;
use crate::content::{GalleryItem, SiteContent, Testimonial};
use crate::faq::FaqPanel;
use crate::forms::{ContactForm, SubmittedForm};
use crate::logging::LogBuffer;
use crate::pricing::{Estimator, EstimatorRow};
use crate::theme::Theme;
use crate::tui::components::Toast;
use crate::tui::input::InputHandler;
use crate::tui::modal::Modal;
use crossterm::event::KeyCode;
use std::time::Instant;

/// Phone number shown by the call CTA (also the WhatsApp number)
pub const CONTACT_PHONE: &str = "+966 50 000 0000";

/// Top-level views, one per site section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Faq,
    Pricing,
    Gallery,
    Reviews,
    Contact,
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::Faq => "الأسئلة الشائعة",
            View::Pricing => "حاسبة التكلفة",
            View::Gallery => "أعمالنا",
            View::Reviews => "آراء العملاء",
            View::Contact => "تواصل معنا",
        }
    }
}

/// Application state
pub struct App {
    /// Active view
    pub view: View,

    /// FAQ accordion (the landing view)
    pub faq: FaqPanel,
    /// Cost estimator
    pub estimator: Estimator,
    /// Gallery items and paging state
    pub gallery_items: Vec<GalleryItem>,
    pub gallery_shown: usize,
    pub gallery_selected: usize,
    gallery_page_size: usize,
    /// Customer testimonials
    pub testimonials: Vec<Testimonial>,
    pub reviews_scroll: usize,
    /// Contact form (the standing one; the quote modal owns its own)
    pub contact_form: ContactForm,

    /// Active modal overlay, if any
    pub modal: Option<Modal>,
    /// Active toast notification, if any
    pub toast: Option<Toast>,

    /// Analytics event sink
    pub data_layer: DataLayer,
    /// Captured log entries (surfaced in the status bar)
    pub log_buffer: LogBuffer,

    pub theme: Theme,
    pub use_theme_background: bool,

    input_handler: InputHandler,
    pub should_quit: bool,
    start_time: Instant,
}

impl App {
    pub fn with_config(content: SiteContent, config: Config, log_buffer: LogBuffer) -> Self {
        let page_size = config.gallery_page_size;
        let gallery_shown = content.gallery.len().min(page_size);

        Self {
            view: View::Faq,
            faq: FaqPanel::new(content.faq),
            estimator: Estimator::new(config.pricing, content.addons),
            gallery_items: content.gallery,
            gallery_shown,
            gallery_selected: 0,
            gallery_page_size: page_size,
            testimonials: content.testimonials,
            reviews_scroll: 0,
            contact_form: ContactForm::contact(),
            modal: None,
            toast: None,
            data_layer: DataLayer::new(),
            log_buffer,
            theme: Theme::by_name(&config.theme),
            use_theme_background: config.use_theme_background,
            input_handler: InputHandler::with_default_config(),
            should_quit: false,
            start_time: Instant::now(),
        }
    }

    pub fn set_view(&mut self, view: View) {
        if self.view == view {
            return;
        }
        self.view = view;
        // Entering a section re-renders it from the top, collapsed
        if view == View::Faq {
            let tab = self.faq.tab();
            self.faq.render(tab);
        }
        if view == View::Reviews {
            self.reviews_scroll = 0;
        }
    }

    // ── Input debouncing ─────────────────────────────────────────────

    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    // ── Toasts ───────────────────────────────────────────────────────

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Remove the toast once its display time has elapsed
    pub fn clear_expired_toast(&mut self) {
        if let Some(ref toast) = self.toast {
            if toast.is_expired() {
                self.toast = None;
            }
        }
    }

    // ── Gallery ──────────────────────────────────────────────────────

    pub fn gallery_show_more(&mut self) {
        self.gallery_shown =
            (self.gallery_shown + self.gallery_page_size).min(self.gallery_items.len());
    }

    pub fn gallery_has_more(&self) -> bool {
        self.gallery_shown < self.gallery_items.len()
    }

    pub fn gallery_select_next(&mut self) {
        if self.gallery_selected + 1 < self.gallery_shown {
            self.gallery_selected += 1;
        }
    }

    pub fn gallery_select_prev(&mut self) {
        self.gallery_selected = self.gallery_selected.saturating_sub(1);
    }

    /// Open the lightbox over the selected gallery item
    pub fn open_lightbox(&mut self) {
        if self.gallery_selected < self.gallery_shown {
            self.modal = Some(Modal::lightbox(self.gallery_selected));
        }
    }

    // ── Estimator ────────────────────────────────────────────────────

    /// Activate the estimator row under the cursor: add-on rows toggle,
    /// the order row opens the quote-request modal pre-filled with the
    /// current estimate.
    pub fn activate_estimator_row(&mut self) {
        match self.estimator.cursor_row() {
            EstimatorRow::Addon(_) => self.estimator.toggle_addon(),
            EstimatorRow::Order => {
                let summary = self.estimator.order_summary();
                self.modal = Some(Modal::quote(&summary));
            }
            _ => {}
        }
    }

    // ── Forms and analytics ──────────────────────────────────────────

    /// Submit the standing contact form (Enter on its submit row)
    pub fn submit_contact_form(&mut self) {
        match self.contact_form.submit() {
            Some(form) => {
                let message = self.contact_form.success_message;
                self.show_toast(message);
                self.finish_submit(form);
            }
            None => self.show_toast("يرجى تصحيح الحقول المحددة"),
        }
    }

    /// A modal form submitted successfully
    pub fn record_form_submit(&mut self, form: SubmittedForm) {
        self.show_toast("تم إرسال طلبك، سنتواصل معك قريباً");
        self.finish_submit(form);
    }

    fn finish_submit(&mut self, form: SubmittedForm) {
        tracing::debug!(form_id = %form.form_id, fields = form.data.len(), "form submitted");
        self.data_layer.push(AnalyticsPayload::FormSubmit {
            form_id: form.form_id,
        });
    }

    /// Record a call-to-action activation and surface the number
    pub fn record_cta(&mut self, kind: CtaKind) {
        self.data_layer.push(AnalyticsPayload::CtaClick {
            cta_type: kind,
            cta_location: self.view.name().to_string(),
        });
        match kind {
            CtaKind::Phone => self.show_toast(format!("اتصل بنا: {CONTACT_PHONE}")),
            CtaKind::Whatsapp => self.show_toast(format!("واتساب: {CONTACT_PHONE}")),
        }
    }

    // ── Theme ────────────────────────────────────────────────────────

    pub fn cycle_theme(&mut self) {
        let next = Theme::next_name(&self.theme.name);
        self.theme = Theme::by_name(next);
        self.show_toast(format!("Theme: {next}"));
    }

    // ── Status ───────────────────────────────────────────────────────

    /// Uptime formatted as h:mm:ss
    pub fn uptime(&self) -> String {
        let secs = self.start_time.elapsed().as_secs();
        format!("{}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FaqCategory;

    fn test_app() -> App {
        let content = SiteContent {
            faq: vec![crate::content::FaqEntry {
                question: "q".into(),
                answer: "a".into(),
                category: FaqCategory::Services,
            }],
            gallery: (0..6)
                .map(|i| GalleryItem {
                    caption: format!("item {i}"),
                    detail: String::new(),
                })
                .collect(),
            testimonials: Vec::new(),
            addons: Vec::new(),
        };
        App::with_config(content, Config::default(), LogBuffer::new())
    }

    #[test]
    fn gallery_paging() {
        let mut app = test_app();
        assert_eq!(app.gallery_shown, 3);
        assert!(app.gallery_has_more());

        app.gallery_show_more();
        assert_eq!(app.gallery_shown, 6);
        assert!(!app.gallery_has_more());

        // Exhausted paging is a no-op
        app.gallery_show_more();
        assert_eq!(app.gallery_shown, 6);
    }

    #[test]
    fn gallery_selection_stays_within_shown() {
        let mut app = test_app();
        for _ in 0..10 {
            app.gallery_select_next();
        }
        assert_eq!(app.gallery_selected, 2);
        app.gallery_show_more();
        for _ in 0..10 {
            app.gallery_select_next();
        }
        assert_eq!(app.gallery_selected, 5);
    }

    #[test]
    fn cta_is_recorded_with_location() {
        let mut app = test_app();
        app.record_cta(CtaKind::Phone);
        assert_eq!(app.data_layer.len(), 1);
        assert!(app.toast.is_some());
    }

    #[test]
    fn invalid_contact_submit_leaves_no_analytics() {
        let mut app = test_app();
        app.submit_contact_form();
        assert!(app.data_layer.is_empty());
        assert!(app.toast.is_some());
    }
}
