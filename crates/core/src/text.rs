use std::io::{self, BufRead};

/// Copy at most `max_chars` characters of `value`.
///
/// Longer values are cut silently; this is the documented behavior for every
/// free-text field and path token, never an error.
pub fn bounded(value: &str, max_chars: usize) -> String {
    match value.char_indices().nth(max_chars) {
        Some((cut, _)) => value[..cut].to_string(),
        None => value.to_string(),
    }
}

/// Lines of `reader` with invalid UTF-8 replaced by U+FFFD.
///
/// Line endings (`\n` or `\r\n`) are stripped as with [`BufRead::lines`],
/// but a stray byte in a label no longer aborts the read.
pub fn lossy_lines<R: BufRead>(reader: R) -> LossyLines<R> {
    LossyLines {
        reader,
        buf: Vec::new(),
    }
}

pub struct LossyLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.ends_with(b"\n") {
                    self.buf.pop();
                    if self.buf.ends_with(b"\r") {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect(bytes: &[u8]) -> Vec<String> {
        lossy_lines(Cursor::new(bytes.to_vec()))
            .collect::<io::Result<_>>()
            .unwrap()
    }

    #[test]
    fn test_short_value_untouched() {
        assert_eq!(bounded("TP53", 15), "TP53");
    }

    #[test]
    fn test_exact_length_untouched() {
        assert_eq!(bounded("abcde", 5), "abcde");
    }

    #[test]
    fn test_long_value_cut() {
        assert_eq!(bounded("ABCDEFGHIJKLMNOPQRST", 15), "ABCDEFGHIJKLMNO");
    }

    #[test]
    fn test_multibyte_cut_on_char_boundary() {
        assert_eq!(bounded("αβγδ", 2), "αβ");
    }

    #[test]
    fn test_lines_strip_endings() {
        assert_eq!(collect(b"a\r\nb\n\nc"), vec!["a", "b", "", "c"]);
    }

    #[test]
    fn test_invalid_byte_replaced() {
        assert_eq!(collect(b"Caf\xE9\nok\n"), vec!["Caf\u{FFFD}", "ok"]);
    }

    #[test]
    fn test_empty_input_has_no_lines() {
        assert!(collect(b"").is_empty());
    }
}
