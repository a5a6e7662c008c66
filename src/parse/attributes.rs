// Attribute list parsing.
//
// Accepts the forms `key="value"`, `key='value'`, `key=value` and bare `key`.
// Nothing here fails: an unterminated quote runs to the end of the input and
// a key without `=` gets the empty string.

use super::entities::unescape;
use crate::node::Attributes;

/// Parse the raw text between a tag name and its `>` into an attribute map.
///
/// Values are entity-unescaped. When a key repeats, the last value wins and
/// the key keeps its original position.
///
/// # Examples
///
/// ```
/// let attrs = fragdown::parse_attributes("disabled class='a &amp; b'");
/// assert_eq!(attrs["disabled"], "");
/// assert_eq!(attrs["class"], "a & b");
/// ```
pub fn parse_attributes(input: &str) -> Attributes {
    let mut cursor = Cursor { input, pos: 0 };
    let mut attrs = Attributes::new();

    while let Some(b) = cursor.peek() {
        if is_space(b) {
            cursor.pos += 1;
            continue;
        }
        let key = cursor.take_until(|b| b == b'=' || is_space(b));
        let value = unescape(cursor.value());
        attrs.insert(key.to_string(), value);
    }

    attrs
}

fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

// Every delimiter is ASCII, so stopping on one always leaves `pos` on a
// char boundary.
struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn take_until(&mut self, stop: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if stop(b) {
                break;
            }
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }

    /// Raw (still escaped) value following a key, or `""` without `=`.
    fn value(&mut self) -> &'a str {
        if self.peek() != Some(b'=') {
            return "";
        }
        self.pos += 1;

        match self.peek() {
            Some(quote @ (b'"' | b'\'')) => {
                self.pos += 1;
                let value = self.take_until(|b| b == quote);
                // Skip the closing quote, if there is one.
                self.pos = (self.pos + 1).min(self.input.len());
                value
            }
            _ => self.take_until(is_space),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_attributes(""), Attributes::new());
        assert_eq!(parse_attributes("  \t\r\n"), Attributes::new());
    }

    #[test]
    fn test_single_quoted() {
        assert_eq!(parse_attributes("class='test'"), attrs(&[("class", "test")]));
    }

    #[test]
    fn test_double_quoted() {
        assert_eq!(parse_attributes(r#"class="test""#), attrs(&[("class", "test")]));
    }

    #[test]
    fn test_unquoted() {
        assert_eq!(parse_attributes("class=test"), attrs(&[("class", "test")]));
    }

    #[test]
    fn test_multiple() {
        assert_eq!(
            parse_attributes("class='test1' id='test2'"),
            attrs(&[("class", "test1"), ("id", "test2")])
        );
    }

    #[test]
    fn test_boolean_attribute() {
        assert_eq!(parse_attributes("disabled"), attrs(&[("disabled", "")]));
        assert_eq!(
            parse_attributes("disabled class='test'"),
            attrs(&[("disabled", ""), ("class", "test")])
        );
    }

    #[test]
    fn test_keys_keep_insertion_order() {
        let parsed = parse_attributes("b=1 a=2 c");
        let keys: Vec<&str> = parsed.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_duplicate_key_last_write_wins() {
        let parsed = parse_attributes("id=a class=x id=b");
        assert_eq!(parsed["id"], "b");
        let keys: Vec<&str> = parsed.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["id", "class"]);
    }

    #[test]
    fn test_quoted_value_keeps_spaces_and_other_quote() {
        assert_eq!(
            parse_attributes(r#"face="arial, helvetica" title='say "hi"'"#),
            attrs(&[("face", "arial, helvetica"), ("title", r#"say "hi""#)])
        );
    }

    #[test]
    fn test_unterminated_quote_runs_to_end() {
        assert_eq!(
            parse_attributes("title='never closed id=x"),
            attrs(&[("title", "never closed id=x")])
        );
    }

    #[test]
    fn test_values_are_unescaped() {
        assert_eq!(
            parse_attributes("href='/a?x=1&amp;y=2' alt=&lt;b&gt;"),
            attrs(&[("href", "/a?x=1&y=2"), ("alt", "<b>")])
        );
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        assert_eq!(
            parse_attributes("ID=a id=b"),
            attrs(&[("ID", "a"), ("id", "b")])
        );
    }

    #[test]
    fn test_empty_value_after_equals() {
        assert_eq!(parse_attributes("alt= src=x"), attrs(&[("alt", ""), ("src", "x")]));
        assert_eq!(parse_attributes("alt=''"), attrs(&[("alt", "")]));
    }

    #[test]
    fn test_stray_equals_gives_empty_key() {
        assert_eq!(parse_attributes("=x"), attrs(&[("", "x")]));
    }

    #[test]
    fn test_whitespace_separators() {
        assert_eq!(
            parse_attributes("a=1\tb=2\r\nc"),
            attrs(&[("a", "1"), ("b", "2"), ("c", "")])
        );
    }

    #[test]
    fn test_non_ascii_values() {
        assert_eq!(
            parse_attributes("alt='café' title=naïve"),
            attrs(&[("alt", "café"), ("title", "naïve")])
        );
    }
}
