// FAQ panel state machine
//
// The core component of the site: a category-filtered list of disclosure
// widgets with single-open accordion semantics and a one-shot entrance
// animation per render cycle. All state lives in an owned FaqPanel with an
// explicit lifecycle - no ambient globals - and none of the logic here
// touches the terminal, so every contract is unit-testable headlessly.
//
// Accordion invariant: at every point in time at most one entry is open.
// Re-rendering (including every category switch) rebuilds the visible list
// fully collapsed; there is deliberately no cross-render memory of which
// entry was open.

use crate::content::{FaqCategory, FaqEntry};
use crate::reveal::RevealTracker;

/// Filter selector on the tab bar
///
/// `All` is a pseudo-category: it selects everything but is never an
/// entry's own category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryTab {
    #[default]
    All,
    Services,
    Pricing,
    Booking,
}

impl CategoryTab {
    /// Tab order on screen
    pub const ORDER: [CategoryTab; 4] = [
        CategoryTab::All,
        CategoryTab::Services,
        CategoryTab::Pricing,
        CategoryTab::Booking,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CategoryTab::All => "الكل",
            CategoryTab::Services => FaqCategory::Services.label(),
            CategoryTab::Pricing => FaqCategory::Pricing.label(),
            CategoryTab::Booking => FaqCategory::Booking.label(),
        }
    }

    /// Whether an entry with the given category is visible under this tab
    pub fn matches(&self, category: FaqCategory) -> bool {
        match self {
            CategoryTab::All => true,
            CategoryTab::Services => category == FaqCategory::Services,
            CategoryTab::Pricing => category == FaqCategory::Pricing,
            CategoryTab::Booking => category == FaqCategory::Booking,
        }
    }

    /// Next tab, wrapping
    pub fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|t| *t == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    /// Previous tab, wrapping
    pub fn prev(self) -> Self {
        let i = Self::ORDER.iter().position(|t| *t == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Compute the visible subsequence for a tab: indices into `entries`,
/// original insertion order preserved. Single linear pass; entries are
/// never mutated.
pub fn filter_entries(entries: &[FaqEntry], tab: CategoryTab) -> Vec<usize> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, e)| tab.matches(e.category))
        .map(|(i, _)| i)
        .collect()
}

/// Owned state of the FAQ accordion panel
pub struct FaqPanel {
    /// Full ordered entry set, fixed after construction
    entries: Vec<FaqEntry>,
    /// Active tab (visual state of the tab controls follows this)
    tab: CategoryTab,
    /// Indices into `entries` visible under the active tab
    visible: Vec<usize>,
    /// Index into `visible` of the open entry, at most one
    open: Option<usize>,
    /// Selection cursor over `visible` (the TUI analogue of header focus)
    selected: usize,
    /// Scroll offset in rows, managed by the renderer
    pub scroll_offset: usize,
    /// Entrance-animation registrations for the current render cycle
    reveal: RevealTracker,
}

impl FaqPanel {
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        let mut panel = Self {
            entries,
            tab: CategoryTab::default(),
            visible: Vec::new(),
            open: None,
            selected: 0,
            scroll_offset: 0,
            reveal: RevealTracker::new(),
        };
        panel.render(CategoryTab::default());
        panel
    }

    /// Rebuild the visible list for a tab.
    ///
    /// Always restarts fully collapsed and registers the fresh widget set
    /// with the reveal tracker, invalidating prior registrations.
    /// Idempotent: rendering the same tab twice yields the same visible
    /// state (collapsed, identical list).
    pub fn render(&mut self, tab: CategoryTab) {
        self.tab = tab;
        self.visible = filter_entries(&self.entries, tab);
        self.open = None;
        self.selected = 0;
        self.scroll_offset = 0;
        self.reveal.begin_cycle(self.visible.len());
    }

    /// Switch the active tab; the tab controls' active mark follows `tab()`
    pub fn select_category(&mut self, tab: CategoryTab) {
        self.render(tab);
    }

    /// Toggle the disclosure widget at `index` (position in the visible
    /// list). Out of range is a no-op. Opening an entry closes whichever
    /// one was open - a single atomic swap, never two open at once.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.visible.len() {
            return;
        }
        self.open = match self.open {
            Some(current) if current == index => None,
            _ => Some(index),
        };
    }

    /// Activate the header under the cursor. Pointer clicks and the
    /// keyboard activation keys (Enter, Space) all funnel into this.
    pub fn activate_selected(&mut self) {
        self.toggle(self.selected);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.visible.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn next_category(&mut self) {
        self.select_category(self.tab.next());
    }

    pub fn prev_category(&mut self) {
        self.select_category(self.tab.prev());
    }

    /// Deliver viewport-entry notifications for the widgets at positions
    /// `range` in the visible list. Called by the renderer from the scroll
    /// position; stale or out-of-range notifications are discarded by the
    /// tracker.
    pub fn notify_in_view(&mut self, range: std::ops::Range<usize>) {
        for index in range {
            if let Some(reg) = self.reveal.registration(index) {
                self.reveal.notify_entered(reg);
            }
        }
    }

    pub fn tab(&self) -> CategoryTab {
        self.tab
    }

    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Entry at position `index` in the visible list
    pub fn visible_entry(&self, index: usize) -> Option<&FaqEntry> {
        self.visible.get(index).map(|&i| &self.entries[i])
    }

    /// Iterate the visible entries in display order
    pub fn visible_entries(&self) -> impl Iterator<Item = &FaqEntry> {
        self.visible.iter().map(|&i| &self.entries[i])
    }

    pub fn reveal(&self) -> &RevealTracker {
        &self.reveal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(q: &str, category: FaqCategory) -> FaqEntry {
        FaqEntry {
            question: q.to_string(),
            answer: format!("answer to {q}"),
            category,
        }
    }

    /// The four-entry set from the behavioral contract:
    /// q1 services, q2 pricing, q3 booking, q4 services.
    fn sample_panel() -> FaqPanel {
        FaqPanel::new(vec![
            entry("q1", FaqCategory::Services),
            entry("q2", FaqCategory::Pricing),
            entry("q3", FaqCategory::Booking),
            entry("q4", FaqCategory::Services),
        ])
    }

    fn questions(panel: &FaqPanel) -> Vec<String> {
        panel.visible_entries().map(|e| e.question.clone()).collect()
    }

    #[test]
    fn filter_preserves_insertion_order() {
        let mut panel = sample_panel();

        panel.render(CategoryTab::Services);
        assert_eq!(questions(&panel), ["q1", "q4"]);

        panel.render(CategoryTab::Pricing);
        assert_eq!(questions(&panel), ["q2"]);

        panel.render(CategoryTab::All);
        assert_eq!(questions(&panel), ["q1", "q2", "q3", "q4"]);
    }

    #[test]
    fn render_always_collapses() {
        let mut panel = sample_panel();
        panel.toggle(2);
        assert_eq!(panel.open(), Some(2));

        panel.render(CategoryTab::All);
        assert_eq!(panel.open(), None);

        // Category switch collapses too, even if the open entry would
        // still be visible
        panel.toggle(0);
        panel.select_category(CategoryTab::Services);
        assert_eq!(panel.open(), None);
    }

    #[test]
    fn render_is_idempotent() {
        let mut panel = sample_panel();
        panel.render(CategoryTab::Services);
        let first = questions(&panel);
        panel.render(CategoryTab::Services);
        assert_eq!(questions(&panel), first);
        assert_eq!(panel.open(), None);
    }

    #[test]
    fn at_most_one_open() {
        let mut panel = sample_panel();
        for i in [0, 3, 1, 1, 2, 0] {
            panel.toggle(i);
            let open_count = (0..panel.visible_len())
                .filter(|&j| panel.is_open(j))
                .count();
            assert!(open_count <= 1, "more than one entry open after toggle({i})");
        }
    }

    #[test]
    fn toggle_open_entry_closes_it() {
        let mut panel = sample_panel();
        panel.toggle(1);
        assert!(panel.is_open(1));
        panel.toggle(1);
        assert_eq!(panel.open(), None);
    }

    #[test]
    fn toggle_swaps_atomically() {
        let mut panel = sample_panel();
        panel.render(CategoryTab::Services); // [q1, q4]

        panel.toggle(0);
        assert!(panel.is_open(0));

        panel.toggle(1);
        assert!(!panel.is_open(0), "q1 must close when q4 opens");
        assert!(panel.is_open(1));
    }

    #[test]
    fn toggle_out_of_range_is_noop() {
        let mut panel = sample_panel();
        panel.render(CategoryTab::Pricing); // one visible entry
        panel.toggle(0);
        panel.toggle(7);
        assert_eq!(panel.open(), Some(0));
    }

    #[test]
    fn contract_scenario() {
        let mut panel = sample_panel();

        panel.render(CategoryTab::Services);
        assert_eq!(questions(&panel), ["q1", "q4"]);

        panel.toggle(0);
        assert!(panel.is_open(0)); // q1 open

        panel.toggle(1);
        assert!(!panel.is_open(0)); // q1 closed
        assert!(panel.is_open(1)); // q4 open

        panel.render(CategoryTab::All);
        assert_eq!(questions(&panel), ["q1", "q2", "q3", "q4"]);
        assert_eq!(panel.open(), None);
    }

    #[test]
    fn keyboard_and_pointer_activation_match() {
        // Enter/Space route through activate_selected(); a pointer click on
        // header i routes through toggle(i). With the cursor on i the two
        // transitions must be identical.
        let mut by_key = sample_panel();
        let mut by_pointer = sample_panel();

        by_key.select_next();
        by_key.activate_selected();
        by_pointer.toggle(1);

        assert_eq!(by_key.open(), by_pointer.open());
    }

    #[test]
    fn rerender_resets_reveal_state() {
        let mut panel = sample_panel();

        panel.notify_in_view(0..2);
        assert!(panel.reveal().is_revealed(0));
        assert!(panel.reveal().is_revealed(1));
        assert!(!panel.reveal().is_revealed(2));

        // Re-render starts a fresh cycle: the animation plays once per
        // render, and the old registrations are detached
        let stale_generation = panel.reveal().generation();
        panel.render(CategoryTab::All);
        assert!(!panel.reveal().is_revealed(0));
        assert_ne!(panel.reveal().generation(), stale_generation);
    }

    #[test]
    fn empty_entry_set_is_safe() {
        let mut panel = FaqPanel::new(Vec::new());
        assert_eq!(panel.visible_len(), 0);
        panel.toggle(0);
        panel.activate_selected();
        panel.select_next();
        panel.select_prev();
        assert_eq!(panel.open(), None);
    }

    #[test]
    fn tab_cycle_wraps() {
        assert_eq!(CategoryTab::All.next(), CategoryTab::Services);
        assert_eq!(CategoryTab::Booking.next(), CategoryTab::All);
        assert_eq!(CategoryTab::All.prev(), CategoryTab::Booking);
    }
}
