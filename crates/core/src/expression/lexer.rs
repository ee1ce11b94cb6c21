use super::ParseError;

/// A lexical token with its byte offset in the source.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Token<'src> {
    pub(super) kind: TokenKind<'src>,
    pub(super) position: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum TokenKind<'src> {
    Number(f64),
    Ident(&'src str),
    Plus,
    Minus,
    Star,
    Slash,
    /// Either `^` or `**`.
    Caret,
    LParen,
    RParen,
}

impl TokenKind<'_> {
    /// Describes the token for error messages.
    pub(super) fn describe(&self) -> String {
        match self {
            Self::Number(value) => format!("number {value}"),
            Self::Ident(name) => format!("'{name}'"),
            Self::Plus => "'+'".into(),
            Self::Minus => "'-'".into(),
            Self::Star => "'*'".into(),
            Self::Slash => "'/'".into(),
            Self::Caret => "'^'".into(),
            Self::LParen => "'('".into(),
            Self::RParen => "')'".into(),
        }
    }
}

/// Splits source text into tokens.
///
/// Identifiers may contain dots so that `math.sin` reaches the parser as one
/// name. A number's exponent marker is only consumed when digits follow, so
/// `2*e` still lexes the constant `e`.
pub(super) fn tokenize(source: &str) -> Result<Vec<Token<'_>>, ParseError> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let start = pos;
        let byte = bytes[pos];

        let kind = match byte {
            b' ' | b'\t' | b'\n' | b'\r' => {
                pos += 1;
                continue;
            }
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' if bytes.get(pos + 1) == Some(&b'*') => {
                pos += 1;
                TokenKind::Caret
            }
            b'*' => TokenKind::Star,
            b'/' => TokenKind::Slash,
            b'^' => TokenKind::Caret,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'0'..=b'9' | b'.' => {
                pos = scan_number(bytes, pos);
                // Swallow a stray second point so `1.2.3` fails as one number.
                while pos < bytes.len() && (bytes[pos] == b'.' || bytes[pos].is_ascii_digit()) {
                    pos += 1;
                }
                let text = &source[start..pos];
                // Literals that overflow to infinity are malformed, not undefined.
                let value = text
                    .parse::<f64>()
                    .ok()
                    .filter(|value| value.is_finite())
                    .ok_or_else(|| ParseError::InvalidNumber {
                        text: text.to_owned(),
                        position: start,
                    })?;
                tokens.push(Token {
                    kind: TokenKind::Number(value),
                    position: start,
                });
                continue;
            }
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => {
                while pos < bytes.len()
                    && (bytes[pos].is_ascii_alphanumeric() || matches!(bytes[pos], b'_' | b'.'))
                {
                    pos += 1;
                }
                tokens.push(Token {
                    kind: TokenKind::Ident(&source[start..pos]),
                    position: start,
                });
                continue;
            }
            _ => {
                let ch = source[start..].chars().next().unwrap_or_default();
                return Err(ParseError::UnexpectedChar {
                    ch,
                    position: start,
                });
            }
        };

        pos += 1;
        tokens.push(Token {
            kind,
            position: start,
        });
    }

    Ok(tokens)
}

/// Returns the end offset of the number starting at `pos`.
fn scan_number(bytes: &[u8], mut pos: usize) -> usize {
    let digits = |bytes: &[u8], mut pos: usize| {
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        pos
    };

    pos = digits(bytes, pos);
    if bytes.get(pos) == Some(&b'.') {
        pos = digits(bytes, pos + 1);
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        if bytes.get(exp).is_some_and(u8::is_ascii_digit) {
            pos = digits(bytes, exp);
        }
    }

    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind<'_>> {
        tokenize(source)
            .expect("valid tokens")
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn tokenizes_operators_and_numbers() {
        assert_eq!(
            kinds("2.5*x ** 2 - 1e-3"),
            vec![
                TokenKind::Number(2.5),
                TokenKind::Star,
                TokenKind::Ident("x"),
                TokenKind::Caret,
                TokenKind::Number(2.0),
                TokenKind::Minus,
                TokenKind::Number(1e-3),
            ]
        );
    }

    #[test]
    fn exponent_marker_needs_digits() {
        assert_eq!(
            kinds("2*e"),
            vec![TokenKind::Number(2.0), TokenKind::Star, TokenKind::Ident("e")]
        );
        assert_eq!(
            kinds("2e"),
            vec![TokenKind::Number(2.0), TokenKind::Ident("e")]
        );
    }

    #[test]
    fn overflowing_literals_are_invalid() {
        assert_eq!(
            tokenize("1e400 * x - 1"),
            Err(ParseError::InvalidNumber {
                text: "1e400".into(),
                position: 0,
            })
        );
        assert_eq!(kinds("1e-400"), vec![TokenKind::Number(0.0)]);
        assert_eq!(kinds("1.7e308"), vec![TokenKind::Number(1.7e308)]);
    }

    #[test]
    fn dotted_names_stay_together() {
        assert_eq!(
            kinds("math.sqrt(x)"),
            vec![
                TokenKind::Ident("math.sqrt"),
                TokenKind::LParen,
                TokenKind::Ident("x"),
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn records_positions() {
        let tokens = tokenize("  x +1").expect("valid tokens");
        let positions: Vec<_> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![2, 4, 5]);
    }

    #[test]
    fn rejects_unknown_characters() {
        assert_eq!(
            tokenize("x; import"),
            Err(ParseError::UnexpectedChar {
                ch: ';',
                position: 1
            })
        );
    }

    #[test]
    fn rejects_malformed_numbers() {
        assert!(matches!(
            tokenize("1.2.3"),
            Err(ParseError::InvalidNumber { .. })
        ));
    }
}
