//! Tokenizer for the formula language.

use crate::error::ExpressionError;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Power,
    LParen,
    RParen,
    Comma,
}

impl TokenKind {
    /// Short human-readable form used in error messages.
    pub(crate) fn describe(&self) -> String {
        match self {
            TokenKind::Number(n) => format!("number {n}"),
            TokenKind::Ident(name) => format!("name '{name}'"),
            TokenKind::Plus => "'+'".to_string(),
            TokenKind::Minus => "'-'".to_string(),
            TokenKind::Star => "'*'".to_string(),
            TokenKind::Slash => "'/'".to_string(),
            TokenKind::Power => "'**'".to_string(),
            TokenKind::LParen => "'('".to_string(),
            TokenKind::RParen => "')'".to_string(),
            TokenKind::Comma => "','".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    /// Byte offset of the token's first character
    pub pos: usize,
}

/// Splits `source` into tokens.
///
/// Only digits, ASCII identifiers, the arithmetic operators, parentheses and
/// commas are recognised; any other character is rejected outright.
pub(crate) fn tokenize(source: &str) -> Result<Vec<Token>, ExpressionError> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let c = bytes[pos];
        let start = pos;

        let kind = match c {
            b' ' | b'\t' | b'\n' | b'\r' => {
                pos += 1;
                continue;
            }
            b'0'..=b'9' | b'.' => {
                pos = scan_number(bytes, pos);
                let text = &source[start..pos];
                if text == "." {
                    return Err(ExpressionError::UnexpectedChar { ch: '.', pos: start });
                }
                let value = text
                    .parse::<f64>()
                    .map_err(|_| ExpressionError::InvalidNumber {
                        text: text.to_string(),
                        pos: start,
                    })?;
                TokenKind::Number(value)
            }
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => {
                while pos < bytes.len() && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'_')
                {
                    pos += 1;
                }
                TokenKind::Ident(source[start..pos].to_string())
            }
            b'+' => {
                pos += 1;
                TokenKind::Plus
            }
            b'-' => {
                pos += 1;
                TokenKind::Minus
            }
            b'*' => {
                if bytes.get(pos + 1) == Some(&b'*') {
                    pos += 2;
                    TokenKind::Power
                } else {
                    pos += 1;
                    TokenKind::Star
                }
            }
            b'/' => {
                pos += 1;
                TokenKind::Slash
            }
            b'(' => {
                pos += 1;
                TokenKind::LParen
            }
            b')' => {
                pos += 1;
                TokenKind::RParen
            }
            b',' => {
                pos += 1;
                TokenKind::Comma
            }
            _ => {
                // Report the full character, not a UTF-8 fragment.
                let ch = source[start..].chars().next().unwrap_or('\u{FFFD}');
                return Err(ExpressionError::UnexpectedChar { ch, pos: start });
            }
        };

        tokens.push(Token { kind, pos: start });
    }

    Ok(tokens)
}

/// Returns the end offset of the numeric literal starting at `pos`.
fn scan_number(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    if pos < bytes.len() && bytes[pos] == b'.' {
        pos += 1;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
    }
    // Exponent only when digits follow, so `2e` stays a number then a name.
    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut probe = pos + 1;
        if probe < bytes.len() && (bytes[probe] == b'+' || bytes[probe] == b'-') {
            probe += 1;
        }
        if probe < bytes.len() && bytes[probe].is_ascii_digit() {
            pos = probe;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
        }
    }
    pos
}
