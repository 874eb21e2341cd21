use super::{DelimitedMatch, match_delimited};

/// Bold span: `**text**`.
pub struct Strong;

impl Strong {
    /// The delimiter on both sides of a bold span.
    pub const MARKER: &'static str = "**";

    /// Matches a bold span anchored at the start of `s`.
    pub fn match_at(s: &str) -> Option<DelimitedMatch<'_>> {
        if !s.starts_with(Self::MARKER) {
            return None;
        }
        match_delimited(s, Self::MARKER.len(), |rest| {
            rest.starts_with(Strong::MARKER)
                .then_some(Strong::MARKER.len())
        })
    }
}
