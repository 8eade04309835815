//! Per-card image carousel

use crate::types::ProjectRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    image_count: usize,
}

impl CarouselState {
    /// `image_count` of zero is treated as one; a gallery is never empty
    pub fn new(image_count: usize) -> Self {
        Self {
            index: 0,
            image_count: image_count.max(1),
        }
    }

    pub fn for_record(record: &ProjectRecord) -> Self {
        Self::new(record.gallery().len())
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn image_count(&self) -> usize {
        self.image_count
    }

    /// Prev/next buttons are hidden for single-image galleries
    pub fn has_controls(&self) -> bool {
        self.image_count > 1
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.image_count;
    }

    pub fn previous(&mut self) {
        self.index = (self.index + self.image_count - 1) % self.image_count;
    }

    /// Image currently shown for `record`
    pub fn current_image<'a>(&self, record: &'a ProjectRecord) -> &'a str {
        let gallery = record.gallery();
        &gallery[self.index.min(gallery.len() - 1)]
    }
}
