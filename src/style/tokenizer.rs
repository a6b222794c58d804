//! logos-based style sheet tokenizer.
//!
//! Token priority in logos is determined by:
//! 1. Longest match wins (e.g. `#ff00aa80` as HexColor beats `#` as Hash)
//! 2. For equal length matches, earlier-defined variants win
//!
//! Selector names are recovered from token spans rather than token kinds, so
//! the lexer only has to agree with the parser about punctuation. Characters
//! logos cannot match become [`Token::Other`] instead of being dropped.

use logos::Logos;

/// Style sheet token produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    // ── Compound tokens ──────────────────────────────────────────────

    /// Hex color: `#fff`, `#ff00aa`, `#ff00aa80` (3-8 hex digits).
    #[regex(r"#[0-9a-fA-F]{3,8}")]
    HexColor,

    /// Double-quoted string literal.
    #[regex(r#""[^"]*""#)]
    StringLiteral,

    /// Single-quoted string literal.
    #[regex(r"'[^']*'")]
    StringLiteralSingle,

    /// Number: integer or float, possibly negative.
    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    #[regex(r"-?\.[0-9]+")]
    Number,

    /// Identifier: attribute names, selector names, keywords, function names.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,

    // ── Single-character punctuation ─────────────────────────────────

    /// `{`
    #[token("{")]
    BraceOpen,

    /// `}`
    #[token("}")]
    BraceClose,

    /// `(`
    #[token("(")]
    ParenOpen,

    /// `)`
    #[token(")")]
    ParenClose,

    /// `:`
    #[token(":")]
    Colon,

    /// `;`
    #[token(";")]
    Semicolon,

    /// `,`
    #[token(",")]
    Comma,

    /// Any other single character (`#`, `*`, `@`, `/`, `.`, ...).
    Other,
}

/// A token with its source text and byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    pub token: Token,
    pub text: String,
    /// Byte offset where this token starts in the source.
    pub start: usize,
    /// Byte offset where this token ends in the source.
    pub end: usize,
}

/// Tokenize `input`, keeping byte spans. Unlexable characters become
/// [`Token::Other`] so that selector text stays intact.
pub fn tokenize(input: &str) -> Vec<Spanned> {
    Token::lexer(input)
        .spanned()
        .map(|(result, span)| Spanned {
            token: result.unwrap_or(Token::Other),
            text: input[span.clone()].to_string(),
            start: span.start,
            end: span.end,
        })
        .collect()
}

/// Strip block comments (`/* ... */`), replacing each with a single space.
///
/// An unterminated comment swallows the rest of the input.
pub fn strip_comments(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("/*") {
        result.push_str(&rest[..start]);
        result.push(' ');
        match rest[start + 2..].find("*/") {
            Some(end) => rest = &rest[start + 2 + end + 2..],
            None => {
                rest = "";
                break;
            }
        }
    }
    result.push_str(rest);

    result
}
