//! Textarea auto-bullet mode
//!
//! Works on the previous and next value of a change event rather than on key
//! codes, so pasted text and IME composition go through the same path: every
//! newline the edit inserted gets a bullet after it, and the text always
//! starts with one. Positions are counted in `char`s.

pub const BULLET: char = '\u{2022}';
pub const BULLET_PREFIX: &str = "\u{2022} ";

pub fn auto_bullet(previous: &str, next: &str) -> String {
    let before: Vec<char> = previous.chars().collect();
    let after: Vec<char> = next.chars().collect();

    // Suffix first, so an inserted newline next to an existing one is
    // attributed to the earliest position.
    let suffix = before
        .iter()
        .rev()
        .zip(after.iter().rev())
        .take_while(|(a, b)| a == b)
        .count();
    let max_prefix = before.len().min(after.len()) - suffix;
    let prefix = before
        .iter()
        .zip(&after)
        .take(max_prefix)
        .take_while(|(a, b)| a == b)
        .count();
    let inserted_end = after.len() - suffix;

    let mut out = String::with_capacity(next.len() + 8);
    for (i, c) in after.iter().enumerate() {
        out.push(*c);
        let inserted = i >= prefix && i < inserted_end;
        let bulleted_by_edit = i + 1 < inserted_end && after[i + 1] == BULLET;
        if *c == '\n' && inserted && !bulleted_by_edit {
            out.push_str(BULLET_PREFIX);
        }
    }
    if !out.starts_with(BULLET) {
        out.insert_str(0, BULLET_PREFIX);
    }
    out
}
