//! Recursive descent style sheet parser.
//!
//! Parses text of the form `name, name { attr: value; ... } ...` into a map of
//! selector name to [`Selector`]. Top-level structure errors are hard errors;
//! malformed values degrade to [`Value::String`] holding the raw text.

use std::collections::HashMap;

use crate::style::functions;
use crate::style::names;
use crate::style::sheet::Selector;
use crate::style::tokenizer::{strip_comments, tokenize, Spanned, Token};
use crate::style::value::Value;
use crate::geometry::Color;

/// Errors from style sheet parsing. Positions are byte offsets into the
/// comment-stripped source.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected token at byte {position}: {message}")]
    UnexpectedToken { position: usize, message: String },
    #[error("unexpected end of input: {0}")]
    UnexpectedEof(String),
}

/// Parse style sheet text into a fresh selector map.
pub(crate) fn parse_selectors(input: &str) -> Result<HashMap<String, Selector>, ParseError> {
    let cleaned = strip_comments(input);
    let mut parser = Parser::new(&cleaned);
    let mut selectors: HashMap<String, Selector> = HashMap::new();

    while !parser.is_eof() {
        let names = parser.parse_selector_names()?;
        parser.expect(Token::BraceOpen)?;
        let declarations = parser.parse_declarations()?;
        parser.expect(Token::BraceClose)?;

        for name in names {
            let selector = selectors.entry(name).or_default();
            for (attr, value) in &declarations {
                selector.insert(attr.clone(), value.clone());
            }
        }
    }

    Ok(selectors)
}

/// Parse a single value string, e.g. `"border(solid, 1, red, 2)"`.
///
/// Anything after the first complete value is ignored.
pub fn parse_value(input: &str) -> Value {
    let mut parser = Parser::new(input);
    parser.parse_value()
}

/// Recursive descent parser state. Function parsers in
/// [`crate::style::functions`] drive it through the `pub(crate)` methods.
pub(crate) struct Parser<'s> {
    src: &'s str,
    tokens: Vec<Spanned>,
    cursor: usize,
}

impl<'s> Parser<'s> {
    fn new(src: &'s str) -> Self {
        Self { src, tokens: tokenize(src), cursor: 0 }
    }

    // ── Cursor primitives ────────────────────────────────────────────

    fn is_eof(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    pub(crate) fn peek(&self) -> Option<Token> {
        self.tokens.get(self.cursor).map(|t| t.token)
    }

    fn peek_at(&self, ahead: usize) -> Option<&Spanned> {
        self.tokens.get(self.cursor + ahead)
    }

    pub(crate) fn advance(&mut self) -> Option<&Spanned> {
        let tok = self.tokens.get(self.cursor)?;
        self.cursor += 1;
        Some(tok)
    }

    /// Consume `token` if it is next. Returns whether it was consumed.
    pub(crate) fn eat(&mut self, token: Token) -> bool {
        if self.peek() == Some(token) {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    fn position(&self) -> usize {
        self.tokens
            .get(self.cursor)
            .map(|t| t.start)
            .unwrap_or(self.src.len())
    }

    fn expect(&mut self, expected: Token) -> Result<(), ParseError> {
        let position = self.position();
        match self.advance() {
            Some(tok) if tok.token == expected => Ok(()),
            Some(tok) => Err(ParseError::UnexpectedToken {
                position,
                message: format!("expected {:?}, got {:?} '{}'", expected, tok.token, tok.text),
            }),
            None => Err(ParseError::UnexpectedEof(format!("expected {:?}", expected))),
        }
    }

    /// Source text covering tokens `from..to` (token indices), trimmed.
    fn slice(&self, from: usize, to: usize) -> &'s str {
        if from >= to {
            return "";
        }
        let src: &'s str = self.src;
        src[self.tokens[from].start..self.tokens[to - 1].end].trim()
    }

    // ── Top level ────────────────────────────────────────────────────

    /// Parse the selector names in front of a `{`.
    ///
    /// Names are separated by commas or whitespace. A name is the raw source
    /// text of a run of adjacent tokens, so `ok#button:hover` is one name.
    fn parse_selector_names(&mut self) -> Result<Vec<String>, ParseError> {
        let mut names = Vec::new();
        let mut start: Option<usize> = None;

        loop {
            let Some(tok) = self.tokens.get(self.cursor) else {
                return Err(ParseError::UnexpectedEof("expected '{' after selector".into()));
            };
            match tok.token {
                Token::BraceOpen | Token::Comma => {
                    if let Some(s) = start.take() {
                        names.push(self.slice(s, self.cursor).to_string());
                    }
                    if tok.token == Token::BraceOpen {
                        break;
                    }
                    self.cursor += 1;
                }
                Token::BraceClose => {
                    return Err(ParseError::UnexpectedToken {
                        position: tok.start,
                        message: "unmatched '}'".into(),
                    });
                }
                _ => {
                    let gap = self.cursor > 0 && self.tokens[self.cursor - 1].end != tok.start;
                    match start {
                        Some(s) if gap => {
                            names.push(self.slice(s, self.cursor).to_string());
                            start = Some(self.cursor);
                        }
                        Some(_) => {}
                        None => start = Some(self.cursor),
                    }
                    self.cursor += 1;
                }
            }
        }

        if names.is_empty() {
            return Err(ParseError::UnexpectedToken {
                position: self.position(),
                message: "expected selector name before '{'".into(),
            });
        }
        Ok(names)
    }

    /// Parse `attr: value;` entries up to (not including) the closing `}`.
    fn parse_declarations(&mut self) -> Result<Vec<(String, Value)>, ParseError> {
        let mut declarations = Vec::new();

        loop {
            match self.peek() {
                None => return Err(ParseError::UnexpectedEof("expected '}'".into())),
                Some(Token::BraceClose) => break,
                Some(Token::Semicolon) => {
                    self.cursor += 1;
                }
                Some(_) => declarations.push(self.parse_declaration()?),
            }
        }

        Ok(declarations)
    }

    fn parse_declaration(&mut self) -> Result<(String, Value), ParseError> {
        let position = self.position();
        let name = match self.advance() {
            Some(tok) if tok.token == Token::Ident => tok.text.clone(),
            Some(tok) => {
                return Err(ParseError::UnexpectedToken {
                    position,
                    message: format!("expected attribute name, got '{}'", tok.text),
                })
            }
            None => return Err(ParseError::UnexpectedEof("expected attribute name".into())),
        };
        self.expect(Token::Colon)?;

        let value = self.parse_value();

        // Anything between the value and `;` is junk from a malformed value;
        // skip it rather than failing the whole sheet.
        while let Some(tok) = self.peek() {
            match tok {
                Token::Semicolon => {
                    self.cursor += 1;
                    break;
                }
                Token::BraceClose => break,
                _ => {
                    log::warn!("ignoring trailing token in value of '{name}'");
                    self.cursor += 1;
                }
            }
        }

        Ok((name, value))
    }

    // ── Values ───────────────────────────────────────────────────────

    /// Parse one value, stopping before a `,`, `;`, `)` or `}`.
    pub(crate) fn parse_value(&mut self) -> Value {
        match self.peek() {
            Some(Token::HexColor) => {
                let text = self.tokens[self.cursor].text.clone();
                self.cursor += 1;
                match Color::from_hex(&text[1..]) {
                    Some(c) => Value::Color(c),
                    None => Value::String(text),
                }
            }
            Some(Token::StringLiteral | Token::StringLiteralSingle) => {
                let text = &self.tokens[self.cursor].text;
                let inner = text[1..text.len() - 1].to_string();
                self.cursor += 1;
                Value::String(inner)
            }
            Some(Token::Ident) if self.is_call() => {
                let start = self.cursor;
                let name = self.tokens[start].text.clone();
                match functions::lookup(&name) {
                    Some(parse_fn) => {
                        self.cursor += 1;
                        match parse_fn(self) {
                            Some(value) => value,
                            None => {
                                self.cursor = start;
                                let raw = self.parse_raw();
                                log::warn!("malformed {name}() value, keeping raw text {raw:?}");
                                raw
                            }
                        }
                    }
                    None => {
                        log::warn!("unknown style function '{name}'");
                        self.parse_raw()
                    }
                }
            }
            _ => self.parse_raw(),
        }
    }

    /// Whether the cursor sits on `ident(` with no whitespace before `(`.
    fn is_call(&self) -> bool {
        match (self.peek_at(0), self.peek_at(1)) {
            (Some(name), Some(open)) => open.token == Token::ParenOpen && open.start == name.end,
            _ => false,
        }
    }

    /// Accumulate tokens up to a terminator at paren depth zero and classify
    /// the trimmed text.
    fn parse_raw(&mut self) -> Value {
        let text = self.raw_text();
        if text.is_empty() {
            Value::None
        } else {
            classify(text)
        }
    }

    /// Accumulate tokens up to a terminator at paren depth zero, unclassified.
    pub(crate) fn raw_text(&mut self) -> &'s str {
        let start = self.cursor;
        let mut depth = 0usize;
        while let Some(tok) = self.peek() {
            match tok {
                Token::Comma | Token::ParenClose if depth == 0 => break,
                Token::Semicolon | Token::BraceClose | Token::BraceOpen => break,
                Token::ParenOpen => depth += 1,
                Token::ParenClose => depth -= 1,
                _ => {}
            }
            self.cursor += 1;
        }
        self.slice(start, self.cursor)
    }

    /// Parse a parenthesised, comma-separated argument list. The cursor must
    /// sit on `(`. Returns `None` if the list is not closed properly.
    pub(crate) fn parse_args(&mut self) -> Option<Vec<Value>> {
        if !self.eat(Token::ParenOpen) {
            return None;
        }
        let mut args = Vec::new();
        if self.eat(Token::ParenClose) {
            return Some(args);
        }
        loop {
            args.push(self.parse_value());
            match self.peek() {
                Some(Token::Comma) => self.cursor += 1,
                Some(Token::ParenClose) => {
                    self.cursor += 1;
                    return Some(args);
                }
                _ => return None,
            }
        }
    }
}

/// Classify a bare token: `inherit`, integer, float, flag keyword, color name,
/// or raw string, in that order.
pub(crate) fn classify(text: &str) -> Value {
    if text == "inherit" {
        return Value::Inherit;
    }

    let tokens = tokenize(text);
    if let [tok] = tokens.as_slice() {
        if tok.token == Token::Number && tok.start == 0 && tok.end == text.len() {
            if !text.contains('.') {
                if let Ok(i) = text.parse::<i32>() {
                    return Value::Int(i);
                }
            }
            if let Ok(f) = text.parse::<f32>() {
                return Value::Float(f);
            }
        }
    }

    if let Some(flags) = names::flag(text) {
        return Value::Flags(flags);
    }
    if let Some(color) = names::color(text) {
        return Value::Color(color);
    }
    Value::String(text.to_string())
}
