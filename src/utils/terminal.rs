//! Sanitization of item text before it reaches the terminal
//!
//! Index files are user-supplied, so titles and descriptions may carry ANSI
//! escape sequences that would move the cursor or recolor the TUI. They are
//! stripped once at load time by [`strip_ansi_codes`].

/// Removes ANSI CSI sequences and control characters other than `\t`, `\n`, `\r`
///
/// # Examples
///
/// ```
/// use trudy_search::utils::terminal::strip_ansi_codes;
///
/// assert_eq!(strip_ansi_codes("\x1b[1mSales\x1b[0m Assistant"), "Sales Assistant");
/// ```
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // CSI ends at the first ASCII letter
            for next_ch in chars.by_ref() {
                if next_ch.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }

        if ch.is_control() && !matches!(ch, '\t' | '\n' | '\r') {
            continue;
        }

        result.push(ch);
    }

    result
}
