//! Caller-side merge of a generated suggestion into a directory
//!
//! The directory itself stays read-only; merging yields a new directory.

use crate::directory::ProjectDirectory;
use crate::error::Result;
use crate::types::{Category, ProjectRecord, SuggestionResult};
use std::collections::HashSet;

/// Image used for entries created from a suggestion
pub const DEFAULT_IMAGE_URL: &str = "/resources/projects/placeholder.jpg";

/// One past the largest numeric id in the directory
///
/// Non-numeric ids are ignored. When the largest id is `u64::MAX` the
/// smallest positive number not already used as an id is taken instead.
pub fn next_id(directory: &ProjectDirectory) -> String {
    let max = directory
        .list()
        .iter()
        .filter_map(|r| r.id.parse::<u64>().ok())
        .max()
        .unwrap_or(0);

    if let Some(next) = max.checked_add(1) {
        return next.to_string();
    }

    let taken: HashSet<&str> = directory.list().iter().map(|r| r.id.as_str()).collect();
    (1..=u64::MAX)
        .map(|n| n.to_string())
        .find(|candidate| !taken.contains(candidate.as_str()))
        .unwrap_or_else(|| format!("{}-1", u64::MAX))
}

/// Turn a suggestion into a record
///
/// Categories outside the record labels (including the `All` label) are
/// stored as `Category::Other`.
pub fn suggestion_to_record(id: String, suggestion: &SuggestionResult, image_url: &str) -> ProjectRecord {
    let category = match Category::from_label(suggestion.category.trim()) {
        Some(c) if c != Category::All => c,
        _ => Category::Other,
    };

    ProjectRecord {
        id,
        title: suggestion.title.trim().to_string(),
        description: suggestion.description.trim().to_string(),
        category: category.label().to_string(),
        tags: suggestion
            .tags
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
        image_url: image_url.to_string(),
        image_urls: Vec::new(),
        link: None,
    }
}

/// Append `suggestion` as a new record with a fresh id and the default image
pub fn merge_suggestion(
    directory: &ProjectDirectory,
    suggestion: &SuggestionResult,
) -> Result<ProjectDirectory> {
    let record = suggestion_to_record(next_id(directory), suggestion, DEFAULT_IMAGE_URL);
    let mut records = directory.list().to_vec();
    records.push(record);
    ProjectDirectory::new(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestion(category: &str) -> SuggestionResult {
        SuggestionResult {
            title: "  Kasir Online ".to_string(),
            description: "Aplikasi kasir berbasis web.".to_string(),
            category: category.to_string(),
            tags: vec!["Laravel".to_string(), " ".to_string(), "MySQL ".to_string()],
        }
    }

    #[test]
    fn test_next_id_on_seed() {
        assert_eq!(next_id(&ProjectDirectory::seed()), "4");
        assert_eq!(next_id(&ProjectDirectory::default()), "1");
    }

    #[test]
    fn test_next_id_ignores_non_numeric() {
        let mut records = ProjectDirectory::seed().list().to_vec();
        records[0].id = "alpha".to_string();
        let dir = ProjectDirectory::new(records).unwrap();
        assert_eq!(next_id(&dir), "4");
    }

    #[test]
    fn test_next_id_at_u64_max_does_not_overflow() {
        let mut records = ProjectDirectory::seed().list().to_vec();
        records[1].id = u64::MAX.to_string();
        let dir = ProjectDirectory::new(records).unwrap();

        // "1" and "3" are taken, "2" was replaced
        assert_eq!(next_id(&dir), "2");
    }

    #[test]
    fn test_merge_after_u64_max_id_keeps_ids_unique() {
        let mut records = ProjectDirectory::seed().list().to_vec();
        records[0].id = u64::MAX.to_string();
        let dir = ProjectDirectory::new(records).unwrap();

        let merged = merge_suggestion(&dir, &suggestion("Writing")).unwrap();
        assert_eq!(merged.len(), 4);
        assert_eq!(merged.list()[3].id, "1");
    }

    #[test]
    fn test_suggestion_to_record() {
        let record = suggestion_to_record("9".to_string(), &suggestion("Web Dev"), "x.png");
        assert_eq!(record.id, "9");
        assert_eq!(record.title, "Kasir Online");
        assert_eq!(record.category, "Web Dev");
        assert_eq!(record.tags, vec!["Laravel".to_string(), "MySQL".to_string()]);
        assert_eq!(record.gallery(), &["x.png".to_string()]);
    }

    #[test]
    fn test_unknown_category_becomes_other() {
        let record = suggestion_to_record("1".to_string(), &suggestion("Game Dev"), "x.png");
        assert_eq!(record.category, "Lainnya");

        let record = suggestion_to_record("1".to_string(), &suggestion("Semua"), "x.png");
        assert_eq!(record.category, "Lainnya");
    }

    #[test]
    fn test_merge_leaves_input_directory_untouched() {
        let dir = ProjectDirectory::seed();
        let merged = merge_suggestion(&dir, &suggestion("Mobile App")).unwrap();

        assert_eq!(dir.len(), 3);
        assert_eq!(merged.len(), 4);
        assert_eq!(&merged.list()[..3], dir.list());

        let added = &merged.list()[3];
        assert_eq!(added.id, "4");
        assert_eq!(added.image_url, DEFAULT_IMAGE_URL);
    }
}
