use super::{
    cursor::Cursor,
    kinds::{CodeSpan, DelimitedMatch, Emphasis, SPECIALS, Strong},
    types::InlineFragment,
};

/// Scans one line into a sequence of [`InlineFragment`]s.
///
/// # Precedence
/// At each cursor position a bold span is tried first, then italic, then
/// code. All three are anchored at the cursor and take the shortest non-empty
/// interior. Fragments are never scanned again for nested styling.
///
/// # Fallback
/// When nothing matches at the cursor, text up to the next `*`, `_` or `` ` ``
/// becomes a `PlainText` fragment. A delimiter sitting at the cursor that
/// could not be paired is emitted on its own as `PlainText`, so every step
/// consumes at least one character.
///
/// Adjacent `PlainText` fragments are left separate.
pub fn scan(line: &str) -> Vec<InlineFragment> {
    let mut cur = Cursor::new(line);
    let mut out = vec![];

    while !cur.eof() {
        if let Some(node) = try_parse_span(&mut cur, Strong::match_at, InlineFragment::Bold) {
            out.push(node);
            continue;
        }
        if let Some(node) = try_parse_span(&mut cur, Emphasis::match_at, InlineFragment::Italic) {
            out.push(node);
            continue;
        }
        if let Some(node) = try_parse_span(&mut cur, CodeSpan::match_at, InlineFragment::Code) {
            out.push(node);
            continue;
        }

        match cur.find_any(&SPECIALS) {
            None => {
                out.push(InlineFragment::PlainText(cur.rest().to_string()));
                break;
            }
            Some(0) => {
                // unpaired delimiter
                if let Some(c) = cur.bump() {
                    out.push(InlineFragment::PlainText(c.to_string()));
                }
            }
            Some(n) => {
                out.push(InlineFragment::PlainText(cur.rest()[..n].to_string()));
                cur.bump_n(n);
            }
        }
    }

    out
}

/// Tries one anchored span kind at the cursor, advancing past it on success.
fn try_parse_span(
    cur: &mut Cursor<'_>,
    matcher: fn(&str) -> Option<DelimitedMatch<'_>>,
    wrap: fn(String) -> InlineFragment,
) -> Option<InlineFragment> {
    let m = matcher(cur.rest())?;
    cur.bump_n(m.len);
    Some(wrap(m.inner.to_string()))
}
