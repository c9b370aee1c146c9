//! Word counting tool definition.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::super::ToolDefinition;
use super::super::common::json_result;
use crate::domains::tools::ToolContext;

/// Parameters for the word counting tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CountWordsParams {
    /// The text to analyze
    pub text: String,
}

/// Word and character statistics for a text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WordCountResult {
    pub text: String,
    pub word_count: usize,
    pub character_count: usize,
    pub character_count_no_spaces: usize,
    pub words: Vec<String>,
}

/// Word separators: Unicode whitespace plus the ASCII information
/// separators U+001C..U+001F.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

impl WordCountResult {
    /// Split on separators; characters are Unicode scalar values and only
    /// U+0020 counts as a space for `character_count_no_spaces`.
    pub fn analyze(text: &str) -> Self {
        let words: Vec<String> = text
            .split(is_separator)
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();
        let character_count = text.chars().count();
        let spaces = text.chars().filter(|c| *c == ' ').count();

        Self {
            text: text.to_string(),
            word_count: words.len(),
            character_count,
            character_count_no_spaces: character_count - spaces,
            words,
        }
    }
}

/// Word counting tool.
pub struct CountWordsTool;

#[async_trait]
impl ToolDefinition for CountWordsTool {
    const NAME: &'static str = "count_words";
    const DESCRIPTION: &'static str = "Count words in a given text. Returns the text, word count, \
         character count with and without spaces, and the list of whitespace-separated words.";

    type Params = CountWordsParams;

    #[instrument(skip_all, fields(len = params.text.len()))]
    async fn execute(params: CountWordsParams, _context: &ToolContext) -> CallToolResult {
        let result = WordCountResult::analyze(&params.text);
        debug!("Counted {} words", result.word_count);
        json_result(&result)
    }
}
