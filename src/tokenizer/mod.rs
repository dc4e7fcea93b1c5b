//! Escape-aware splitting of one input line into raw field tokens.

/// Split `line` (no trailing newline) into field tokens appended to `out`.
///
/// A byte equal to `escape` is consumed and the byte after it is appended
/// to the current token literally, even if it is the separator or the
/// escape byte itself; the escape applies to exactly one following byte.
/// A byte equal to `separator` outside an escape terminates the current
/// token. An `escape` of `0` disables escaping.
///
/// Tokens are appended after any existing elements of `out`; callers doing
/// per-line tokenization clear the vector between lines themselves. The
/// return value is the number of tokens appended: `0` for an empty line,
/// otherwise separator count plus one.
///
/// An escape byte at the very end of the line has nothing to apply to and
/// is appended literally to the final token.
///
/// `separator` and `escape` must be ASCII so that splitting at byte
/// boundaries cannot cut a multi-byte character. This function never fails;
/// malformed field data is rejected later, during coercion.
pub fn tokenize_line(line: &str, separator: u8, escape: u8, out: &mut Vec<String>) -> usize {
    if line.is_empty() {
        return 0;
    }

    let escaping = escape != 0;
    let mut token: Vec<u8> = Vec::new();
    let mut count = 0usize;
    let mut bytes = line.bytes();

    while let Some(ch) = bytes.next() {
        if escaping && ch == escape {
            match bytes.next() {
                Some(next) => token.push(next),
                // Trailing escape: keep it as literal data.
                None => token.push(ch),
            }
            continue;
        }

        if ch == separator {
            out.push(String::from_utf8_lossy(&token).into_owned());
            token.clear();
            count += 1;
            continue;
        }

        token.push(ch);
    }

    out.push(String::from_utf8_lossy(&token).into_owned());
    count + 1
}
