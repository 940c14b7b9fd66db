/// Instructions for a one-paragraph summary of a single document file.
pub const FILE_SUMMARY_INSTRUCTIONS: &str = "You are a helpful assistant that summarizes documents in one paragraph. Do not include any other text than the summary.";

/// Prefix of the search-result instructions; the user's query is appended.
pub const SEARCH_SUMMARY_INSTRUCTIONS: &str = "You are a helpful assistant that summarizes documents in roughly one sentence. Do not include any other text than the summary. Keep in mind, the user is looking for: ";

/// Build the instructions for a search-result summary.
///
/// The query is embedded verbatim; the service treats the whole string as a
/// system prompt.
#[must_use]
pub fn search_result_instructions(query: &str) -> String {
    format!("{SEARCH_SUMMARY_INSTRUCTIONS}{query}")
}
