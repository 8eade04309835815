//! Portfolio Common Library
//!
//! Types and state shared by the CLI and any presentation layer:
//! project directory, category filter, disclosure, carousels, and the
//! prompt/parser pair of the suggestion flow.

pub mod types;
pub mod error;
pub mod directory;
pub mod filter;
pub mod disclosure;
pub mod carousel;
pub mod view;
pub mod prompts;
pub mod parser;
pub mod merge;

pub use types::{Category, ProjectRecord, SuggestionResult};
pub use error::{Error, Result};
pub use directory::ProjectDirectory;
pub use filter::{filter, CategoryFilter, Filtered};
pub use disclosure::{Disclosure, PREVIEW_COUNT};
pub use carousel::CarouselState;
pub use view::{CardView, ProjectsSnapshot, ProjectsView};
pub use prompts::{build_suggestion_prompt, suggestion_response_schema};
pub use parser::{extract_json, parse_suggestion_response};
pub use merge::merge_suggestion;
