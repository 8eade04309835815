//! Projects section state
//!
//! Ties the category filter, disclosure and per-card carousels together and
//! produces one snapshot per render cycle.
//!
//! Changing the category collapses the list back to the preview. Carousels
//! exist only for cards currently visible; a card that leaves the visible
//! list loses its carousel position.

use crate::carousel::CarouselState;
use crate::directory::ProjectDirectory;
use crate::disclosure::Disclosure;
use crate::filter::{filter, CategoryFilter};
use crate::types::ProjectRecord;
use std::collections::HashMap;

/// One rendered card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView<'a> {
    pub record: &'a ProjectRecord,
    pub image_index: usize,
    pub image: &'a str,
    pub has_controls: bool,
}

/// Everything the presentation layer needs for one render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectsSnapshot<'a> {
    pub selected: &'a CategoryFilter,
    pub cards: Vec<CardView<'a>>,
    pub filtered_len: usize,
    pub expanded: bool,
    /// Render the "show more / show less" control
    pub toggle_available: bool,
    /// Render the empty state with a reset-to-all action
    pub empty_state: bool,
}

#[derive(Debug, Clone)]
pub struct ProjectsView {
    directory: ProjectDirectory,
    filter: CategoryFilter,
    disclosure: Disclosure,
    carousels: HashMap<String, CarouselState>,
}

impl ProjectsView {
    pub fn new(directory: ProjectDirectory) -> Self {
        Self::with_disclosure(directory, Disclosure::default())
    }

    pub fn with_disclosure(directory: ProjectDirectory, disclosure: Disclosure) -> Self {
        let mut view = Self {
            directory,
            filter: CategoryFilter::All,
            disclosure,
            carousels: HashMap::new(),
        };
        view.sync_carousels();
        view
    }

    pub fn directory(&self) -> &ProjectDirectory {
        &self.directory
    }

    pub fn selected(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn is_expanded(&self) -> bool {
        self.disclosure.is_expanded()
    }

    /// Category click; re-selecting the current category keeps the disclosure
    pub fn select_category(&mut self, selected: impl Into<CategoryFilter>) {
        let selected = selected.into();
        if selected != self.filter {
            self.filter = selected;
            self.disclosure.collapse();
        }
        self.sync_carousels();
    }

    /// Empty-state "view all projects" action
    pub fn reset_filter(&mut self) {
        self.select_category(CategoryFilter::All);
    }

    pub fn toggle_disclosure(&mut self) {
        self.disclosure.toggle();
        self.sync_carousels();
    }

    /// Advance a visible card; `false` when the card is not mounted
    pub fn next_image(&mut self, id: &str) -> bool {
        match self.carousels.get_mut(id) {
            Some(carousel) => {
                carousel.next();
                true
            }
            None => false,
        }
    }

    pub fn previous_image(&mut self, id: &str) -> bool {
        match self.carousels.get_mut(id) {
            Some(carousel) => {
                carousel.previous();
                true
            }
            None => false,
        }
    }

    pub fn snapshot(&self) -> ProjectsSnapshot<'_> {
        let filtered = filter(self.directory.list(), &self.filter);
        let visible = self.disclosure.visible(filtered.records());

        let cards = visible
            .iter()
            .copied()
            .map(|record| {
                let carousel = self
                    .carousels
                    .get(&record.id)
                    .copied()
                    .unwrap_or_else(|| CarouselState::for_record(record));
                CardView {
                    record,
                    image_index: carousel.index(),
                    image: carousel.current_image(record),
                    has_controls: carousel.has_controls(),
                }
            })
            .collect();

        ProjectsSnapshot {
            selected: &self.filter,
            cards,
            filtered_len: filtered.len(),
            expanded: self.disclosure.is_expanded(),
            toggle_available: self.disclosure.toggle_available(filtered.len()),
            empty_state: filtered.is_empty_match(),
        }
    }

    fn sync_carousels(&mut self) {
        let filtered = filter(self.directory.list(), &self.filter);
        let visible = self.disclosure.visible(filtered.records());

        self.carousels
            .retain(|id, _| visible.iter().any(|r| r.id == *id));
        for record in visible {
            self.carousels
                .entry(record.id.clone())
                .or_insert_with(|| CarouselState::for_record(record));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn record(id: &str, category: &str, images: usize) -> ProjectRecord {
        ProjectRecord {
            id: id.to_string(),
            title: format!("Project {}", id),
            description: String::new(),
            category: category.to_string(),
            tags: vec![],
            image_url: format!("{}.png", id),
            image_urls: (0..images).map(|i| format!("{}-{}.png", id, i)).collect(),
            link: None,
        }
    }

    fn view(records: Vec<ProjectRecord>) -> ProjectsView {
        ProjectsView::new(ProjectDirectory::new(records).unwrap())
    }

    fn card_ids(snapshot: &ProjectsSnapshot<'_>) -> Vec<String> {
        snapshot.cards.iter().map(|c| c.record.id.clone()).collect()
    }

    #[test]
    fn test_initial_snapshot() {
        let v = view((1..=5).map(|i| record(&i.to_string(), "Web Dev", 0)).collect());
        let s = v.snapshot();

        assert_eq!(s.selected, &CategoryFilter::All);
        assert_eq!(card_ids(&s), vec!["1", "2", "3"]);
        assert_eq!(s.filtered_len, 5);
        assert!(s.toggle_available);
        assert!(!s.expanded);
        assert!(!s.empty_state);
    }

    #[test]
    fn test_category_change_collapses() {
        let mut v = view((1..=5).map(|i| record(&i.to_string(), "Web Dev", 0)).collect());
        v.toggle_disclosure();
        assert!(v.is_expanded());

        v.select_category(Category::Web);
        assert!(!v.is_expanded());
        assert_eq!(v.snapshot().cards.len(), 3);
    }

    #[test]
    fn test_reselecting_same_category_keeps_expanded() {
        let mut v = view((1..=5).map(|i| record(&i.to_string(), "Web Dev", 0)).collect());
        v.select_category(Category::Web);
        v.toggle_disclosure();
        v.select_category(Category::Web);
        assert!(v.is_expanded());
    }

    #[test]
    fn test_empty_state_and_reset() {
        let mut v = view(vec![record("1", "Web Dev", 0)]);
        v.select_category(Category::Writing);

        let s = v.snapshot();
        assert!(s.empty_state);
        assert!(s.cards.is_empty());
        assert!(!s.toggle_available);

        v.reset_filter();
        let s = v.snapshot();
        assert!(!s.empty_state);
        assert_eq!(card_ids(&s), vec!["1"]);
    }

    #[test]
    fn test_carousel_per_card() {
        let mut v = view(vec![record("1", "Web Dev", 3), record("2", "Web Dev", 2)]);
        assert!(v.next_image("1"));
        assert!(v.next_image("1"));
        assert!(v.previous_image("2"));

        let s = v.snapshot();
        assert_eq!(s.cards[0].image_index, 2);
        assert_eq!(s.cards[0].image, "1-2.png");
        assert_eq!(s.cards[1].image_index, 1);
        assert!(s.cards[1].has_controls);
    }

    #[test]
    fn test_single_image_card_has_no_controls() {
        let mut v = view(vec![record("1", "Web Dev", 0)]);
        assert!(v.next_image("1"));

        let s = v.snapshot();
        assert!(!s.cards[0].has_controls);
        assert_eq!(s.cards[0].image_index, 0);
        assert_eq!(s.cards[0].image, "1.png");
    }

    #[test]
    fn test_hidden_card_carousel_is_dropped() {
        let mut v = view(vec![record("1", "Web Dev", 3), record("2", "Writing", 3)]);
        v.next_image("1");

        v.select_category(Category::Writing);
        assert!(!v.next_image("1"));

        v.reset_filter();
        assert_eq!(v.snapshot().cards[0].image_index, 0);
    }

    #[test]
    fn test_collapsed_cards_are_unmounted() {
        let mut v = view((1..=4).map(|i| record(&i.to_string(), "Web Dev", 2)).collect());
        assert!(!v.next_image("4"));

        v.toggle_disclosure();
        assert!(v.next_image("4"));
        assert_eq!(v.snapshot().cards[3].image_index, 1);

        v.toggle_disclosure();
        assert!(!v.next_image("4"));
    }
}
