use super::{DelimitedMatch, match_delimited};

/// Italic span: `*text*` or `_text_`. Mixed pairs such as `*text_` also count.
pub struct Emphasis;

impl Emphasis {
    pub const MARKERS: [char; 2] = ['*', '_'];

    /// Matches an italic span anchored at the start of `s`.
    pub fn match_at(s: &str) -> Option<DelimitedMatch<'_>> {
        if !s.starts_with(Self::MARKERS) {
            return None;
        }
        match_delimited(s, 1, |rest| {
            rest.starts_with(Emphasis::MARKERS).then_some(1)
        })
    }
}
