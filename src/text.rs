//! Text utilities for working with a single line of source at a cursor.

/// Check if a character is considered part of a word (identifier).
///
/// Uses Unicode Standard Annex #31 rules for identifier characters.
#[inline]
pub fn is_word_character(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// Find the boundaries of a word at the given character index.
///
/// Returns `Some((start, end))` where `start` is the character index of the
/// word start and `end` is the index after the last word character.
/// Returns `None` if there is no word at the index.
pub fn find_word_boundaries(chars: &[char], position: usize) -> Option<(usize, usize)> {
    if position >= chars.len() {
        return None;
    }

    // Check if we're on a word character
    if !is_word_character(chars[position]) {
        return None;
    }

    // Find start of word
    let mut start = position;
    while start > 0 && is_word_character(chars[start - 1]) {
        start -= 1;
    }

    // Find end of word
    let mut end = position;
    while end < chars.len() && is_word_character(chars[end]) {
        end += 1;
    }

    Some((start, end))
}

/// Find the word range at a cursor column.
///
/// Unlike [`find_word_boundaries`] this accepts the usual typing position:
/// a cursor sitting immediately after the last character of a word still
/// counts as being on that word.
pub fn word_range_at_cursor(line: &str, column: usize) -> Option<(usize, usize)> {
    let chars: Vec<char> = line.chars().collect();

    let probe = if column < chars.len() && is_word_character(chars[column]) {
        column
    } else if column > 0 && column <= chars.len() && is_word_character(chars[column - 1]) {
        column - 1
    } else {
        return None;
    };

    find_word_boundaries(&chars, probe)
}

/// Extract the word (identifier) at the cursor column in a line of text.
///
/// Returns the word as a `String`, or `None` if there is no word at the
/// position.
///
/// # Example
/// ```
/// use velang::text::word_at_cursor;
///
/// let line = "let foo = bar";
/// assert_eq!(word_at_cursor(line, 4), Some("foo".to_string()));
/// assert_eq!(word_at_cursor(line, 13), Some("bar".to_string()));
/// assert_eq!(word_at_cursor(line, 8), None); // on the `=`
/// ```
pub fn word_at_cursor(line: &str, column: usize) -> Option<String> {
    let (start, end) = word_range_at_cursor(line, column)?;
    let chars: Vec<char> = line.chars().collect();
    Some(chars[start..end].iter().collect())
}
