/// Code span inline type with owned delimiter constant.
///
/// Code runs after bold and italic, so `**` or `_` inside backticks has
/// already been consumed by the time this delimiter is split.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that opens and closes a code span.
    pub const DELIMITER: &'static str = "`";
}
