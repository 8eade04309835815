//! Prompt generation for project suggestions
//!
//! - DESCRIPTION_MAX_CHARS: description length the model is asked to respect
//! - build_suggestion_prompt: instruction embedding the user's rough note
//! - suggestion_response_schema: JSON schema sent as `responseSchema`

use crate::types::Category;
use serde_json::{json, Value};

/// Advisory only; responses are not rejected for exceeding it
pub const DESCRIPTION_MAX_CHARS: usize = 200;

/// Fields every suggestion must carry
pub const REQUIRED_FIELDS: [&str; 4] = ["title", "description", "category", "tags"];

/// Build the instruction for one generation call
///
/// # Arguments
/// * `raw_input` - the user's rough note, embedded verbatim
///
/// # Returns
/// Prompt text asking for a title, description, category and 3-4 tags
pub fn build_suggestion_prompt(raw_input: &str) -> String {
    let categories = Category::record_labels().collect::<Vec<_>>().join(", ");

    format!(
        r#"Saya ingin menambahkan project ke portofolio saya.
Berdasarkan catatan kasar berikut: "{raw_input}".

Tolong buatkan:
1. Judul yang menarik dan profesional.
2. Deskripsi yang persuasif (maksimal {DESCRIPTION_MAX_CHARS} karakter).
3. Kategori yang sesuai (Pilih salah satu: {categories}).
4. 3-4 teknologi atau skill tags yang relevan."#
    )
}

/// Response schema in the generateContent `responseSchema` dialect
pub fn suggestion_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "description": { "type": "STRING" },
            "category": { "type": "STRING" },
            "tags": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }
        },
        "required": REQUIRED_FIELDS
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_raw_input() {
        let prompt = build_suggestion_prompt("aplikasi kasir pakai laravel");
        assert!(prompt.contains("\"aplikasi kasir pakai laravel\""));
    }

    #[test]
    fn test_prompt_lists_record_categories_only() {
        let prompt = build_suggestion_prompt("x");
        assert!(prompt.contains("Web Dev, Mobile App, UI/UX Design, Writing, Lainnya"));
        assert!(!prompt.contains("Semua"));
        assert!(prompt.contains("200 karakter"));
    }

    #[test]
    fn test_prompt_with_empty_input() {
        let prompt = build_suggestion_prompt("");
        assert!(prompt.contains("catatan kasar berikut: \"\""));
    }

    #[test]
    fn test_schema_requires_all_fields() {
        let schema = suggestion_response_schema();
        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(schema["properties"]["tags"]["type"], "ARRAY");
        assert_eq!(schema["properties"]["tags"]["items"]["type"], "STRING");

        let required: Vec<&str> = schema["required"]
            .as_array()
            .expect("required must be an array")
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(required, vec!["title", "description", "category", "tags"]);
    }
}
