//! Whitespace stripping applied before comparison.
//!
//! The comparator treats spaces and newlines as "invisible": two
//! submissions that differ only in layout should compare as equal.
//! Stripping is a pure, order-preserving filter and is applied
//! identically to both sides of a pair, so distances stay symmetric.

/// Bytes removed when whitespace stripping is enabled. Carriage
/// returns are deliberately kept; only `' '` and `'\n'` are ignorable.
const IGNORABLE: [u8; 2] = [b' ', b'\n'];

/// Remove every ignorable byte from `content`, preserving the relative
/// order of everything else.
pub fn strip_ignorable(content: &[u8]) -> Vec<u8> {
    content
        .iter()
        .copied()
        .filter(|byte| !IGNORABLE.contains(byte))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_spaces_and_newlines() {
        assert_eq!(strip_ignorable(b"a b\nc"), b"abc");
    }

    #[test]
    fn test_preserves_order_and_other_bytes() {
        assert_eq!(strip_ignorable(b"fn main() {\n}\n"), b"fnmain(){}");
        assert_eq!(strip_ignorable(b"a\r\nb"), b"a\rb");
    }

    #[test]
    fn test_idempotent() {
        let once = strip_ignorable(b" a b \n c ");
        let twice = strip_ignorable(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(strip_ignorable(b""), Vec::<u8>::new());
        assert_eq!(strip_ignorable(b" \n \n"), Vec::<u8>::new());
    }
}
