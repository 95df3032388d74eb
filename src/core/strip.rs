//! Purpose: Remove `//` and `/* */` comments from JSON-with-comments text.
//! Exports: `strip_comments`.
//! Role: Pure pre-processor run before any JSON parsing.
//! Invariants: Every non-comment character is copied to the output verbatim.
//! Invariants: Comment markers inside string literals are never honored.
//! Invariants: The function is total; malformed input yields malformed output,
//! never an error or a panic.

/// Strips line and block comments from `text`, leaving all other characters
/// (including string contents) untouched.
///
/// A single left-to-right scan with one boolean of state: whether the cursor
/// is inside a string literal. String context is decided before comment
/// markers are looked for, so `"http://example"` survives intact. Backslash
/// escapes consume the following character wholesale, so `\"` never closes a
/// string early.
///
/// A `//` comment runs through the next newline; the newline is consumed with
/// the comment rather than copied. A `/*` comment runs through the first `*/`
/// (block comments do not nest). Unterminated strings and comments fall
/// through to end of input.
pub fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_string = false;

    while let Some(ch) = chars.next() {
        if in_string {
            match ch {
                '\\' => {
                    out.push(ch);
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => {
                    out.push(ch);
                    in_string = false;
                }
                _ => out.push(ch),
            }
            continue;
        }

        match ch {
            '"' => {
                out.push(ch);
                in_string = true;
            }
            '/' if chars.peek() == Some(&'/') => {
                chars.next();
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut saw_star = false;
                for skipped in chars.by_ref() {
                    if saw_star && skipped == '/' {
                        break;
                    }
                    saw_star = skipped == '*';
                }
            }
            _ => out.push(ch),
        }
    }

    out
}
