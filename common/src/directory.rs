//! Project directory
//!
//! Ordered, read-only collection of portfolio entries for one session.

use crate::error::{Error, Result};
use crate::types::{Category, ProjectRecord};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDirectory {
    records: Vec<ProjectRecord>,
}

impl ProjectDirectory {
    /// Build a directory, keeping insertion order
    ///
    /// # Returns
    /// * `Err(Error::DuplicateId)` - two records share an id
    pub fn new(records: Vec<ProjectRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(Error::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self { records })
    }

    /// Parse a JSON array of records
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<ProjectRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.records)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn list(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Featured projects shown when no directory file is supplied
    pub fn seed() -> Self {
        let records = vec![
            seed_record(
                "1",
                "E-Commerce Dashboard",
                "A comprehensive admin dashboard to monitor sales, inventory, and customer analytics with real-time data visualization.",
                Category::Web,
                &["React", "TypeScript", "Tailwind", "ChartJS"],
                Some("#"),
            ),
            seed_record(
                "2",
                "Finance Tracker App",
                "A cross-platform mobile application for personal finance tracking with an automatic OCR-based receipt scanning feature.",
                Category::Mobile,
                &["Flutter", "Dart", "Firebase", "OCR"],
                Some("#"),
            ),
            seed_record(
                "3",
                "Modern Brand Identity",
                "Complete visual identity design for a financial technology startup, including logo, color palette, and typography.",
                Category::Design,
                &["Figma", "Illustrator", "Branding"],
                None,
            ),
        ];
        Self { records }
    }
}

fn seed_record(
    id: &str,
    title: &str,
    description: &str,
    category: Category,
    tags: &[&str],
    link: Option<&str>,
) -> ProjectRecord {
    ProjectRecord {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: category.label().to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        image_url: format!("/resources/projects/{}.jpg", id),
        image_urls: Vec::new(),
        link: link.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> ProjectRecord {
        seed_record(id, "T", "D", Category::Writing, &[], None)
    }

    #[test]
    fn test_new_keeps_insertion_order() {
        let dir = ProjectDirectory::new(vec![record("b"), record("a"), record("c")]).unwrap();
        let ids: Vec<_> = dir.list().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_new_rejects_duplicate_id() {
        let result = ProjectDirectory::new(vec![record("1"), record("2"), record("1")]);
        assert!(matches!(result, Err(Error::DuplicateId(id)) if id == "1"));
    }

    #[test]
    fn test_seed_is_valid() {
        let seed = ProjectDirectory::seed();
        assert_eq!(seed.len(), 3);
        assert!(ProjectDirectory::new(seed.list().to_vec()).is_ok());
        assert!(seed
            .list()
            .iter()
            .all(|r| Category::from_label(&r.category).is_some_and(|c| c != Category::All)));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id": "1", "title": "A", "description": "", "category": "Web Dev", "imageUrl": "a.png"},
            {"id": "2", "title": "B", "description": "", "category": "Writing", "imageUrl": "b.png"}
        ]"#;

        let dir = ProjectDirectory::from_json(json).unwrap();
        assert_eq!(dir.len(), 2);
        assert_eq!(dir.list()[1].title, "B");
    }

    #[test]
    fn test_from_json_invalid() {
        let result = ProjectDirectory::from_json("{ not an array }");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_empty_directory() {
        let dir = ProjectDirectory::default();
        assert!(dir.is_empty());
        assert!(dir.list().is_empty());
    }
}
