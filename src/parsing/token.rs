use log::trace;

/// Produces the replacement for the content of one delimited region
pub trait TokenHandler {
    /// Return the text that replaces `content` (delimiters excluded)
    fn handle_token(&mut self, content: &str) -> String;
}

impl<F> TokenHandler for F
where
    F: FnMut(&str) -> String,
{
    fn handle_token(&mut self, content: &str) -> String {
        self(content)
    }
}

const ESCAPE: u8 = b'\\';

/// Replaces `open…close` delimited regions of a text through a [`TokenHandler`].
///
/// A backslash directly before the open delimiter escapes it: the backslash is dropped
/// and the delimiter is copied literally. A region ends at the first close delimiter
/// after its open delimiter. An open delimiter without a matching close delimiter is
/// copied through together with the rest of the text.
pub struct TokenScanner<H: TokenHandler> {
    open: String,
    close: String,
    handler: H,
}

impl<H: TokenHandler> TokenScanner<H> {
    /// Create a scanner for the given delimiters
    pub fn new(open: &str, close: &str, handler: H) -> Self {
        TokenScanner {
            open: open.to_string(),
            close: close.to_string(),
            handler,
        }
    }

    /// Access the handler, e.g. to inspect state it accumulated
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Consume the scanner and return its handler
    pub fn into_handler(self) -> H {
        self.handler
    }

    /// Substitute every delimited region of `text`
    pub fn parse(&mut self, text: &str) -> String {
        if text.is_empty() || self.open.is_empty() || self.close.is_empty() {
            return text.to_string();
        }

        let bytes = text.as_bytes();
        let mut output = String::with_capacity(text.len());
        let mut offset = 0;

        while let Some(found) = text[offset..].find(&self.open) {
            let start = offset + found;

            if start > 0 && bytes[start - 1] == ESCAPE {
                output.push_str(&text[offset..start - 1]);
                output.push_str(&self.open);
                offset = start + self.open.len();
                continue;
            }

            output.push_str(&text[offset..start]);
            let content_start = start + self.open.len();

            match text[content_start..].find(&self.close) {
                Some(found) => {
                    let end = content_start + found;
                    let content = &text[content_start..end];
                    trace!("Replacing token '{}'", content);
                    output.push_str(&self.handler.handle_token(content));
                    offset = end + self.close.len();
                }
                None => {
                    output.push_str(&text[start..]);
                    return output;
                }
            }
        }

        output.push_str(&text[offset..]);
        output
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn substitute(text: &str) -> String {
        let values: HashMap<&str, &str> = [("a", "A"), ("b", "B"), ("first_name", "James")]
            .into_iter()
            .collect();

        TokenScanner::new("${", "}", |key: &str| {
            values.get(key).map_or_else(String::new, |v| (*v).to_string())
        })
        .parse(text)
    }

    #[test]
    fn test_substitution() {
        assert_eq!(substitute("${a} and ${b}"), "A and B");
        assert_eq!(substitute("Hello ${first_name}!"), "Hello James!");
        assert_eq!(substitute("${a}${b}"), "AB");
        assert_eq!(substitute("no tokens"), "no tokens");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(substitute(""), "");
    }

    #[test]
    fn test_escaped_open() {
        assert_eq!(substitute("\\${a}"), "${a}");
        assert_eq!(substitute("\\${a} and ${b}"), "${a} and B");
        assert_eq!(substitute("x\\${"), "x${");
    }

    #[test]
    fn test_backslash_before_close_is_content() {
        let mut seen = Vec::new();
        let mut scanner = TokenScanner::new("${", "}", |key: &str| {
            seen.push(key.to_string());
            String::from("<h>")
        });

        assert_eq!(scanner.parse("${a\\}b}"), "<h>b}");
        drop(scanner);
        assert_eq!(seen, ["a\\"]);
    }

    #[test]
    fn test_unterminated() {
        assert_eq!(substitute("${a} then ${b"), "A then ${b");
        assert_eq!(substitute("${"), "${");
    }

    #[test]
    fn test_empty_region() {
        let mut scanner = TokenScanner::new("#{", "}", |key: &str| format!("[{key}]"));
        assert_eq!(scanner.parse("#{}"), "[]");
        assert_eq!(scanner.parse("${a}"), "${a}");
    }

    #[test]
    fn test_handler_state() {
        let mut count = 0usize;
        let mut scanner = TokenScanner::new("${", "}", |_: &str| {
            count += 1;
            "?".to_string()
        });

        assert_eq!(scanner.parse("${a}, ${b}, ${c}"), "?, ?, ?");
        drop(scanner);
        assert_eq!(count, 3);
    }

    #[test]
    fn test_multichar_delimiters() {
        let mut scanner = TokenScanner::new("{{", "}}", |key: &str| key.to_uppercase());
        assert_eq!(scanner.parse("a {{b}} c {{d}}"), "a B c D");
    }
}
