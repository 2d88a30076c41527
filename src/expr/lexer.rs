use crate::error::CompileError;

#[derive(Debug, Clone, PartialEq)]
pub(super) enum TokenKind {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    Comma,
    OpenParen,
    CloseParen,
}

impl TokenKind {
    pub(super) fn describe(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Ident(name) => name.clone(),
            Self::Plus => "+".to_owned(),
            Self::Minus => "-".to_owned(),
            Self::Star => "*".to_owned(),
            Self::Slash => "/".to_owned(),
            Self::Caret => "^".to_owned(),
            Self::Comma => ",".to_owned(),
            Self::OpenParen => "(".to_owned(),
            Self::CloseParen => ")".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(super) struct Token {
    pub(super) kind: TokenKind,
    pub(super) offset: usize,
}

/// Splits expression text into tokens, rejecting characters outside the
/// supported alphabet.
pub(super) fn tokenize(text: &str) -> Result<Vec<Token>, CompileError> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some(&(offset, ch)) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
            continue;
        }

        if ch.is_ascii_digit() || ch == '.' {
            let mut end = offset;
            while let Some(&(idx, c)) = chars.peek() {
                if c.is_ascii_digit() || c == '.' {
                    end = idx + c.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }
            let literal = &text[offset..end];
            let value = literal
                .parse::<f64>()
                .map_err(|_| CompileError::InvalidNumber {
                    text: literal.to_owned(),
                    offset,
                })?;
            tokens.push(Token {
                kind: TokenKind::Number(value),
                offset,
            });
            continue;
        }

        if ch.is_ascii_alphabetic() || ch == '_' {
            let mut end = offset;
            while let Some(&(idx, c)) = chars.peek() {
                if c.is_ascii_alphanumeric() || c == '_' {
                    end = idx + c.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }
            tokens.push(Token {
                kind: TokenKind::Ident(text[offset..end].to_owned()),
                offset,
            });
            continue;
        }

        let kind = match ch {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '^' => TokenKind::Caret,
            ',' => TokenKind::Comma,
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            other => return Err(CompileError::UnexpectedChar { ch: other, offset }),
        };
        chars.next();
        tokens.push(Token { kind, offset });
    }

    Ok(tokens)
}
