#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InlineError {
    /// A delimiter occurred an odd number of times within one text node.
    #[error("Markdown syntax error: missing closing delimiter `{delimiter}`")]
    MalformedDelimiter { delimiter: String },
    #[error("Markdown syntax error: delimiter must not be empty")]
    EmptyDelimiter,
}
