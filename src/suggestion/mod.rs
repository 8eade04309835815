//! Project suggestion generation
//!
//! One free-text note in, one validated SuggestionResult out, at most one
//! round trip to the generation service per call. Nothing is retried or
//! cached; the caller retries by calling again.

pub mod gemini;

pub use gemini::{GeminiClient, GeminiSettings};

use crate::error::Result;
use portfolio_common::{merge_suggestion, ProjectDirectory, SuggestionResult};
use std::future::Future;

/// Seam between callers and the generation backend
///
/// Build one implementation at startup and pass it by reference; tests
/// substitute their own.
pub trait SuggestionService {
    /// Turn a rough note into a structured project suggestion
    ///
    /// Dropping the returned future abandons the request.
    fn generate(&self, raw_input: &str) -> impl Future<Output = Result<SuggestionResult>> + Send;
}

/// Generate a suggestion and append it to a copy of `directory`
///
/// # Returns
/// The suggestion as returned by the service and the merged directory.
/// `directory` itself is untouched, also on failure.
pub async fn suggest_and_merge<S: SuggestionService>(
    service: &S,
    directory: &ProjectDirectory,
    raw_input: &str,
) -> Result<(SuggestionResult, ProjectDirectory)> {
    let suggestion = service.generate(raw_input).await?;
    let merged = merge_suggestion(directory, &suggestion)?;
    Ok((suggestion, merged))
}
