//! List line markers: `12. ` for numbered items, `- ` or `* ` for bullets.

use crate::parsing::inline::kinds::is_line_terminator;

/// Numbered list lines: ASCII digits followed by `.`.
pub struct NumberedList;

impl NumberedList {
    pub const DOT: char = '.';

    /// Strips the `<digits>.` prefix, returning what follows the dot.
    pub fn strip_marker(line: &str) -> Option<&str> {
        let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
        if rest.len() == line.len() {
            return None;
        }
        rest.strip_prefix(Self::DOT)
    }
}

/// Bullet list lines: `-` or `*`.
pub struct BulletList;

impl BulletList {
    pub const MARKERS: [char; 2] = ['-', '*'];

    /// Strips the bullet character, returning what follows it.
    pub fn strip_marker(line: &str) -> Option<&str> {
        line.strip_prefix(Self::MARKERS)
    }
}

/// Splits the whitespace gap after a marker from the text that follows it.
/// The gap must hold at least one character.
pub fn split_gap(after_marker: &str) -> Option<(&str, &str)> {
    let rest = after_marker.trim_start();
    let gap = &after_marker[..after_marker.len() - rest.len()];
    if gap.is_empty() {
        None
    } else {
        Some((gap, rest))
    }
}

/// Item text after a marker: a whitespace gap, then one or more characters to
/// end of line.
///
/// When only whitespace follows the marker, the gap gives up its last
/// character as the item text, so `"-  "` yields `" "` while `"- "` is not a
/// list line at all.
pub fn item_content(after_marker: &str) -> Option<&str> {
    let (gap, rest) = split_gap(after_marker)?;
    let content = if rest.is_empty() {
        let (idx, _) = gap.char_indices().next_back()?;
        if idx == 0 {
            return None;
        }
        &gap[idx..]
    } else {
        rest
    };

    if content.chars().any(is_line_terminator) {
        return None;
    }
    Some(content)
}
