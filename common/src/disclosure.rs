//! Preview / expanded disclosure of the filtered project list

/// Cards shown before "show more"
pub const PREVIEW_COUNT: usize = 3;

/// Visible prefix of `filtered`
///
/// # Arguments
/// * `filtered` - output of the category filter
/// * `expanded` - user toggled "show more"
/// * `preview_count` - cap applied while collapsed
pub fn visible<T>(filtered: &[T], expanded: bool, preview_count: usize) -> &[T] {
    if expanded {
        filtered
    } else {
        &filtered[..preview_count.min(filtered.len())]
    }
}

/// The "show more / show less" control only renders when something is hidden
pub fn toggle_available(filtered_len: usize, preview_count: usize) -> bool {
    filtered_len > preview_count
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disclosure {
    expanded: bool,
    preview_count: usize,
}

impl Default for Disclosure {
    fn default() -> Self {
        Self::new(PREVIEW_COUNT)
    }
}

impl Disclosure {
    pub fn new(preview_count: usize) -> Self {
        Self {
            expanded: false,
            preview_count,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn preview_count(&self) -> usize {
        self.preview_count
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Back to preview; called when the category changes
    pub fn collapse(&mut self) {
        self.expanded = false;
    }

    pub fn visible<'a, T>(&self, filtered: &'a [T]) -> &'a [T] {
        visible(filtered, self.expanded, self.preview_count)
    }

    pub fn toggle_available(&self, filtered_len: usize) -> bool {
        toggle_available(filtered_len, self.preview_count)
    }
}
