use crate::error::{GraphError, GraphResult};

/// Builtin single-argument functions accepted by the expression grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FunctionKind {
    Sin,
    Cos,
    Tan,
    /// Base-10 logarithm.
    Log,
    /// Natural logarithm.
    Ln,
    Sqrt,
}

impl FunctionKind {
    pub(crate) fn apply(self, value: f64) -> f64 {
        match self {
            Self::Sin => value.sin(),
            Self::Cos => value.cos(),
            Self::Tan => value.tan(),
            Self::Log => value.log10(),
            Self::Ln => value.ln(),
            Self::Sqrt => value.sqrt(),
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Sqrt => "sqrt",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum TokenKind {
    Number(f64),
    Variable,
    Function(FunctionKind),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

/// Token plus the byte offset it starts at, kept for error reporting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SpannedToken {
    pub kind: TokenKind,
    pub position: usize,
}

/// Splits expression text into tokens.
///
/// Identifiers are matched case-insensitively. Whitespace separates tokens
/// and is otherwise ignored.
pub(crate) fn tokenize(input: &str) -> GraphResult<Vec<SpannedToken>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(position, ch)) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
            continue;
        }

        let kind = match ch {
            '+' => single(&mut chars, TokenKind::Plus),
            '-' => single(&mut chars, TokenKind::Minus),
            '*' => single(&mut chars, TokenKind::Star),
            '/' => single(&mut chars, TokenKind::Slash),
            '^' => single(&mut chars, TokenKind::Caret),
            '(' => single(&mut chars, TokenKind::LParen),
            ')' => single(&mut chars, TokenKind::RParen),
            c if c.is_ascii_digit() || c == '.' => number(input, &mut chars, position)?,
            c if c.is_alphabetic() => identifier(input, &mut chars, position)?,
            other => {
                return Err(GraphError::Parse {
                    position,
                    message: format!("unexpected character `{other}`"),
                });
            }
        };

        tokens.push(SpannedToken { kind, position });
    }

    Ok(tokens)
}

fn single(
    chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
    kind: TokenKind,
) -> TokenKind {
    chars.next();
    kind
}

fn number(
    input: &str,
    chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
    start: usize,
) -> GraphResult<TokenKind> {
    let mut end = start;
    while let Some(&(position, ch)) = chars.peek() {
        if ch.is_ascii_digit() || ch == '.' {
            end = position + ch.len_utf8();
            chars.next();
        } else {
            break;
        }
    }

    let literal = &input[start..end];
    let value = literal.parse::<f64>().map_err(|_| GraphError::Parse {
        position: start,
        message: format!("malformed number literal `{literal}`"),
    })?;
    Ok(TokenKind::Number(value))
}

fn identifier(
    input: &str,
    chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
    start: usize,
) -> GraphResult<TokenKind> {
    let mut end = start;
    while let Some(&(position, ch)) = chars.peek() {
        if ch.is_alphabetic() {
            end = position + ch.len_utf8();
            chars.next();
        } else {
            break;
        }
    }

    let word = input[start..end].to_ascii_lowercase();
    let kind = match word.as_str() {
        "x" => TokenKind::Variable,
        "pi" => TokenKind::Number(std::f64::consts::PI),
        "e" => TokenKind::Number(std::f64::consts::E),
        "sin" => TokenKind::Function(FunctionKind::Sin),
        "cos" => TokenKind::Function(FunctionKind::Cos),
        "tan" => TokenKind::Function(FunctionKind::Tan),
        "log" => TokenKind::Function(FunctionKind::Log),
        "ln" => TokenKind::Function(FunctionKind::Ln),
        "sqrt" => TokenKind::Function(FunctionKind::Sqrt),
        _ => {
            return Err(GraphError::Parse {
                position: start,
                message: format!("unknown name `{word}`"),
            });
        }
    };
    Ok(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_operators_and_literals() {
        let tokens = tokenize("2.5*x + 1").expect("valid input");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Number(2.5),
                TokenKind::Star,
                TokenKind::Variable,
                TokenKind::Plus,
                TokenKind::Number(1.0),
            ]
        );
    }

    #[test]
    fn identifiers_are_case_insensitive() {
        let tokens = tokenize("SIN(PI)").expect("valid input");
        assert_eq!(tokens[0].kind, TokenKind::Function(FunctionKind::Sin));
        assert_eq!(tokens[2].kind, TokenKind::Number(std::f64::consts::PI));
    }

    #[test]
    fn unknown_character_reports_position() {
        let err = tokenize("x + $").expect_err("should reject");
        match err {
            crate::error::GraphError::Parse { position, .. } => assert_eq!(position, 4),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_number_is_rejected() {
        assert!(tokenize("1.2.3").is_err());
    }
}
