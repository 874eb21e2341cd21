use super::{DelimitedMatch, match_delimited};

/// Inline code span. No other styling is recognised inside it.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: char = '`';

    /// Matches a code span anchored at the start of `s`.
    pub fn match_at(s: &str) -> Option<DelimitedMatch<'_>> {
        if !s.starts_with(Self::TICK) {
            return None;
        }
        match_delimited(s, 1, |rest| rest.starts_with(CodeSpan::TICK).then_some(1))
    }
}
