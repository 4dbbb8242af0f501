//! Lexer implementation using winnow.
//!
//! Tokenizes input into a stream of tokens with source spans. Fails fast
//! on the first lexical error with a clear, actionable message. In lenient
//! mode, characters that are not legal inside an IRI are accepted and
//! reported as diagnostics instead of aborting the scan.

use std::sync::Arc;

use winnow::ascii::digit1;
use winnow::combinator::{alt, delimited, opt, peek, preceded};
use winnow::error::ContextError;
use winnow::stream::{AsChar, Location, Stream};
use winnow::token::{any, one_of, take_till, take_while};
use winnow::{LocatingSlice, ModalResult, Parser};

use super::chars::*;
use super::token::{Token, TokenKind};
use crate::error::{Diagnostic, RdfError, Result};

/// Input type for the lexer - tracks position for spans.
pub type Input<'a> = LocatingSlice<&'a str>;

/// Result of a successful scan: tokens plus any lenient-mode diagnostics.
#[derive(Debug)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Lexer for Turtle-family documents.
pub struct Lexer<'a> {
    input: &'a str,
    lax_iris: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    ///
    /// With `lax_iris` set, illegal IRI characters are kept and reported
    /// as diagnostics rather than rejected.
    pub fn new(input: &'a str, lax_iris: bool) -> Self {
        Self { input, lax_iris }
    }

    /// Tokenize the entire input.
    ///
    /// Returns an error immediately on the first invalid token, providing
    /// a clear error message with line/column and source context.
    pub fn tokenize(self) -> Result<LexOutput> {
        let mut tokens = Vec::new();
        let mut diagnostics = Vec::new();
        let mut input = LocatingSlice::new(self.input);

        loop {
            // Skip whitespace and comments
            skip_ws_and_comments(&mut input);

            if input.is_empty() {
                let pos = input.current_token_start();
                tokens.push(Token::new(TokenKind::Eof, pos, pos));
                break;
            }

            let start = input.current_token_start();

            // IRIs get their own entry point so lenient handling can
            // record diagnostics while scanning.
            let parsed = if input.starts_with('<') {
                parse_iri_ref(&mut input, self.lax_iris, &mut diagnostics)
            } else {
                next_token(&mut input)
            };

            match parsed {
                Ok(kind) => {
                    let end = input.current_token_start();
                    tokens.push(Token::new(kind, start, end));
                }
                Err(_) => {
                    // Fail fast with a descriptive error message
                    return Err(self.make_error(start, &input));
                }
            }
        }

        Ok(LexOutput {
            tokens,
            diagnostics,
        })
    }

    /// Create a descriptive error message for an invalid token.
    fn make_error(&self, position: usize, input: &Input<'_>) -> RdfError {
        // Get the problematic character
        let remaining = input.as_ref();
        let bad_char = remaining.chars().next().unwrap_or('?');

        // Get line and column information
        let (line, col) = self.line_col(position);

        // Get context: the line containing the error
        let line_content = self.get_line(line);

        // Build a helpful error message with source pointer
        let pointer = " ".repeat(col.saturating_sub(1));
        let message = if bad_char == '"' || bad_char == '\'' {
            format!(
                "unterminated string literal at line {}, column {}\n  |\n{} | {}\n  | {}^",
                line, col, line, line_content, pointer
            )
        } else if bad_char == '<' || self.input[position..].starts_with('<') {
            format!(
                "invalid or unterminated IRI at line {}, column {}\n  |\n{} | {}\n  | {}^",
                line, col, line, line_content, pointer
            )
        } else if bad_char.is_ascii_digit()
            || (matches!(bad_char, '+' | '-')
                && remaining[1..].starts_with(|c: char| c.is_ascii_digit()))
        {
            // Digits only fail to lex when the literal exceeds the value range
            format!(
                "numeric literal out of range at line {}, column {}\n  |\n{} | {}\n  | {}^",
                line, col, line, line_content, pointer
            )
        } else if !bad_char.is_ascii() && !is_pn_chars_base(bad_char) {
            format!(
                "unexpected character '{}' (U+{:04X}) at line {}, column {}\n  |\n{} | {}\n  | {}^",
                bad_char.escape_unicode(),
                bad_char as u32,
                line,
                col,
                line,
                line_content,
                pointer
            )
        } else {
            format!(
                "unexpected character '{}' at line {}, column {}\n  |\n{} | {}\n  | {}^",
                bad_char, line, col, line, line_content, pointer
            )
        };

        RdfError::Syntax { position, message }
    }

    /// Convert a byte position to (line, column), 1-indexed.
    fn line_col(&self, position: usize) -> (usize, usize) {
        let mut line = 1;
        let mut col = 1;

        for (i, c) in self.input.char_indices() {
            if i >= position {
                break;
            }
            if c == '\n' {
                line += 1;
                col = 1;
            } else {
                col += 1;
            }
        }

        (line, col)
    }

    /// Get the content of a specific line (1-indexed).
    fn get_line(&self, line_num: usize) -> &str {
        self.input
            .lines()
            .nth(line_num.saturating_sub(1))
            .unwrap_or("")
    }
}

/// Skip whitespace and comments.
fn skip_ws_and_comments(input: &mut Input<'_>) {
    loop {
        let _: ModalResult<&str, ContextError> = take_while(0.., is_ws).parse_next(input);

        if input.starts_with('#') {
            let _: ModalResult<&str, ContextError> =
                take_till(0.., |c| c == '\n' || c == '\r').parse_next(input);
            let _: ModalResult<Option<char>, ContextError> =
                opt(one_of(['\n', '\r'])).parse_next(input);
        } else {
            break;
        }
    }
}

/// Parse the next token (everything except IRIs).
fn next_token(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    alt((
        // Multi-char operators (must come before single-char)
        parse_double_caret,
        // Blank nodes (must come before prefixed names)
        parse_blank_node_label,
        parse_anon,
        // NIL: () with optional whitespace
        parse_nil,
        // Directives (@prefix, @base, @lang)
        parse_at_directive,
        // Default prefix (:name or just :)
        parse_default_prefix,
        // Prefixed names and keywords (a, true, false, PREFIX, BASE, GRAPH)
        parse_prefixed_name_or_keyword,
        // String literals
        parse_string_literal,
        // Numbers
        parse_number,
        // Single-char punctuation
        parse_punctuation,
    ))
    .parse_next(input)
}

// =============================================================================
// IRI Parsing
// =============================================================================

/// Parse an IRI reference: `<...>`
///
/// In lenient mode, illegal characters other than `>` and line breaks are
/// kept with a diagnostic recorded per character.
fn parse_iri_ref(
    input: &mut Input<'_>,
    lax: bool,
    diagnostics: &mut Vec<Diagnostic>,
) -> ModalResult<TokenKind> {
    '<'.parse_next(input)?;

    let mut result = String::new();

    loop {
        let chunk: &str = take_while(0.., is_iri_char).parse_next(input)?;
        result.push_str(chunk);

        if input.starts_with('>') {
            '>'.parse_next(input)?;
            break;
        }

        if input.is_empty() {
            return Err(winnow::error::ErrMode::Backtrack(ContextError::new()));
        }

        if input.starts_with('\\')
            && (input.as_ref().starts_with("\\u") || input.as_ref().starts_with("\\U"))
        {
            '\\'.parse_next(input)?;
            if let Some(c) = parse_unicode_escape(input)? {
                result.push(c);
            } else {
                return Err(winnow::error::ErrMode::Backtrack(ContextError::new()));
            }
        } else {
            // Character not legal inside an IRI
            let pos = input.current_token_start();
            let c: char = any.parse_next(input)?;
            if lax && c != '\n' && c != '\r' {
                diagnostics.push(Diagnostic {
                    position: pos,
                    message: format!("character '{}' is not allowed in an IRI", c.escape_debug()),
                });
                result.push(c);
            } else {
                return Err(winnow::error::ErrMode::Backtrack(ContextError::new()));
            }
        }
    }

    // Empty IRIs are allowed (relative reference to base)
    Ok(TokenKind::Iri(Arc::from(result)))
}

/// Parse a Unicode escape sequence (\uXXXX or \UXXXXXXXX).
fn parse_unicode_escape(input: &mut Input<'_>) -> ModalResult<Option<char>> {
    if input.starts_with('u') {
        'u'.parse_next(input)?;
        let hex: &str = take_while(4..=4, AsChar::is_hex_digit).parse_next(input)?;
        let code = u32::from_str_radix(hex, 16).unwrap_or(0xFFFD);
        Ok(char::from_u32(code))
    } else if input.starts_with('U') {
        'U'.parse_next(input)?;
        let hex: &str = take_while(8..=8, AsChar::is_hex_digit).parse_next(input)?;
        let code = u32::from_str_radix(hex, 16).unwrap_or(0xFFFD);
        Ok(char::from_u32(code))
    } else {
        Ok(None)
    }
}

// =============================================================================
// Directives (@prefix, @base, language tags)
// =============================================================================

/// Parse @ directives and language tags
fn parse_at_directive(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    '@'.parse_next(input)?;

    // Read the word after @
    let word: &str =
        take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '-').parse_next(input)?;

    match word.to_lowercase().as_str() {
        "prefix" => Ok(TokenKind::KwPrefix),
        "base" => Ok(TokenKind::KwBase),
        _ => Ok(TokenKind::LangTag(Arc::from(word))),
    }
}

// =============================================================================
// Prefixed Names and Keywords
// =============================================================================

/// Parse a default prefix name (`:local`) or default prefix namespace (`:`).
fn parse_default_prefix(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    ':'.parse_next(input)?;

    let local = opt(parse_pn_local).parse_next(input)?;

    match local {
        Some(local) => Ok(TokenKind::PrefixedName {
            prefix: Arc::from(""),
            local: Arc::from(local.as_str()),
        }),
        None => Ok(TokenKind::PrefixedNameNs(Arc::from(""))),
    }
}

/// Parse a prefixed name or keyword (a, true, false, PREFIX, BASE, GRAPH).
fn parse_prefixed_name_or_keyword(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let start = input.checkpoint();

    let first_char = input
        .chars()
        .next()
        .ok_or_else(|| winnow::error::ErrMode::Backtrack(ContextError::new()))?;

    let is_valid_prefix_start = is_pn_prefix_start(first_char);

    let mut word = String::new();
    let c: char = any.parse_next(input)?;
    word.push(c);

    loop {
        let chunk: &str = take_while(0.., is_pn_chars).parse_next(input)?;
        word.push_str(chunk);

        if input.is_empty() {
            break;
        }

        if input.starts_with('.') {
            let rest = &input.as_ref()[1..];
            if let Some(next_char) = rest.chars().next() {
                if is_pn_chars(next_char) {
                    '.'.parse_next(input)?;
                    word.push('.');
                    continue;
                }
            }
            break;
        } else {
            break;
        }
    }

    // Check if followed by a colon (prefixed name)
    if peek(opt(':')).parse_next(input)?.is_some() {
        if !is_valid_prefix_start {
            input.reset(&start);
            return Err(winnow::error::ErrMode::Backtrack(ContextError::new()));
        }

        ':'.parse_next(input)?;

        let local = opt(parse_pn_local).parse_next(input)?;

        match local {
            Some(local) => Ok(TokenKind::PrefixedName {
                prefix: Arc::from(word.as_str()),
                local: Arc::from(local.as_str()),
            }),
            None => Ok(TokenKind::PrefixedNameNs(Arc::from(word.as_str()))),
        }
    } else {
        // Check if it's a keyword
        match word.as_str() {
            "a" => Ok(TokenKind::KwA),
            "true" => Ok(TokenKind::KwTrue),
            "false" => Ok(TokenKind::KwFalse),
            "PREFIX" => Ok(TokenKind::KwSparqlPrefix),
            "BASE" => Ok(TokenKind::KwSparqlBase),
            w if w.eq_ignore_ascii_case("graph") => Ok(TokenKind::KwGraph),
            _ => {
                input.reset(&start);
                Err(winnow::error::ErrMode::Backtrack(ContextError::new()))
            }
        }
    }
}

/// Parse a local name (after the colon in a prefixed name).
fn parse_pn_local(input: &mut Input<'_>) -> ModalResult<String> {
    let first_char = input
        .chars()
        .next()
        .ok_or_else(|| winnow::error::ErrMode::Backtrack(ContextError::new()))?;

    if !is_pn_local_start(first_char) && first_char != '%' && first_char != '\\' {
        return Err(winnow::error::ErrMode::Backtrack(ContextError::new()));
    }

    let mut result = String::new();

    loop {
        let chunk: &str =
            take_while(0.., |c: char| is_pn_chars(c) || c == ':').parse_next(input)?;
        result.push_str(chunk);

        if input.is_empty() {
            break;
        }

        if input.starts_with('.') {
            let rest = &input.as_ref()[1..];
            if let Some(next_char) = rest.chars().next() {
                if is_pn_chars(next_char)
                    || next_char == ':'
                    || next_char == '%'
                    || next_char == '\\'
                {
                    '.'.parse_next(input)?;
                    result.push('.');
                    continue;
                }
            }
            break;
        }

        if input.starts_with('%') {
            '%'.parse_next(input)?;
            let hex: &str = take_while(2..=2, AsChar::is_hex_digit).parse_next(input)?;
            if hex.len() != 2 {
                return Err(winnow::error::ErrMode::Backtrack(ContextError::new()));
            }
            result.push('%');
            result.push_str(hex);
        } else if input.starts_with('\\') {
            '\\'.parse_next(input)?;
            let escaped: char = any.parse_next(input)?;
            if "_~.-!$&'()*+,;=/?#@%".contains(escaped) {
                result.push(escaped);
            } else {
                return Err(winnow::error::ErrMode::Backtrack(ContextError::new()));
            }
        } else {
            break;
        }
    }

    if result.is_empty() {
        return Err(winnow::error::ErrMode::Backtrack(ContextError::new()));
    }

    Ok(result)
}

// =============================================================================
// Blank Nodes
// =============================================================================

/// Parse a blank node label: `_:name`
fn parse_blank_node_label(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    preceded("_:", parse_blank_node_name)
        .map(|name: &str| TokenKind::BlankNodeLabel(Arc::from(name)))
        .parse_next(input)
}

/// Parse a blank node name (after `_:`).
fn parse_blank_node_name<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    let result: &str = (
        take_while(1, |c: char| is_pn_chars_u(c) || c.is_ascii_digit()),
        take_while(0.., |c: char| is_pn_chars(c) || c == '.'),
    )
        .take()
        .parse_next(input)?;

    if result.ends_with('.') {
        return Err(winnow::error::ErrMode::Backtrack(ContextError::new()));
    }

    Ok(result)
}

/// Parse anonymous blank node: `[]`
fn parse_anon(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    ('[', take_while(0.., is_ws), ']')
        .map(|_| TokenKind::Anon)
        .parse_next(input)
}

/// Parse NIL (empty list): `()`
fn parse_nil(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    ('(', take_while(0.., is_ws), ')')
        .map(|_| TokenKind::Nil)
        .parse_next(input)
}

// =============================================================================
// String Literals
// =============================================================================

/// Parse a string literal (single or double quotes, short or long).
fn parse_string_literal(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    alt((
        parse_string_long_double,
        parse_string_long_single,
        parse_string_short_double,
        parse_string_short_single,
    ))
    .parse_next(input)
}

fn parse_string_short_double(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    delimited('"', parse_string_content_double, '"')
        .map(|s| TokenKind::String(Arc::from(s)))
        .parse_next(input)
}

fn parse_string_short_single(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    delimited('\'', parse_string_content_single, '\'')
        .map(|s| TokenKind::String(Arc::from(s)))
        .parse_next(input)
}

fn parse_string_long_double(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    delimited("\"\"\"", parse_long_string_content_double, "\"\"\"")
        .map(|s| TokenKind::String(Arc::from(s)))
        .parse_next(input)
}

fn parse_string_long_single(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    delimited("'''", parse_long_string_content_single, "'''")
        .map(|s| TokenKind::String(Arc::from(s)))
        .parse_next(input)
}

fn parse_string_content_double(input: &mut Input<'_>) -> ModalResult<String> {
    let mut result = String::new();

    loop {
        let chunk: &str = take_while(0.., |c| c != '"' && c != '\\' && c != '\n' && c != '\r')
            .parse_next(input)?;
        result.push_str(chunk);

        if input.is_empty() || input.starts_with('"') {
            break;
        }

        if input.starts_with('\\') {
            '\\'.parse_next(input)?;
            let escaped = parse_escape_char(input)?;
            result.push(escaped);
        } else {
            break;
        }
    }

    Ok(result)
}

fn parse_string_content_single(input: &mut Input<'_>) -> ModalResult<String> {
    let mut result = String::new();

    loop {
        let chunk: &str = take_while(0.., |c| c != '\'' && c != '\\' && c != '\n' && c != '\r')
            .parse_next(input)?;
        result.push_str(chunk);

        if input.is_empty() || input.starts_with('\'') {
            break;
        }

        if input.starts_with('\\') {
            '\\'.parse_next(input)?;
            let escaped = parse_escape_char(input)?;
            result.push(escaped);
        } else {
            break;
        }
    }

    Ok(result)
}

fn parse_long_string_content_double(input: &mut Input<'_>) -> ModalResult<String> {
    let mut result = String::new();

    loop {
        let chunk: &str = take_while(0.., |c| c != '"' && c != '\\').parse_next(input)?;
        result.push_str(chunk);

        if input.is_empty() {
            break;
        }

        if input.starts_with("\"\"\"") {
            break;
        }

        if input.starts_with('\\') {
            '\\'.parse_next(input)?;
            let escaped = parse_escape_char(input)?;
            result.push(escaped);
        } else if input.starts_with('"') {
            let c: char = any.parse_next(input)?;
            result.push(c);
        } else {
            break;
        }
    }

    Ok(result)
}

fn parse_long_string_content_single(input: &mut Input<'_>) -> ModalResult<String> {
    let mut result = String::new();

    loop {
        let chunk: &str = take_while(0.., |c| c != '\'' && c != '\\').parse_next(input)?;
        result.push_str(chunk);

        if input.is_empty() {
            break;
        }

        if input.starts_with("'''") {
            break;
        }

        if input.starts_with('\\') {
            '\\'.parse_next(input)?;
            let escaped = parse_escape_char(input)?;
            result.push(escaped);
        } else if input.starts_with('\'') {
            let c: char = any.parse_next(input)?;
            result.push(c);
        } else {
            break;
        }
    }

    Ok(result)
}

fn parse_escape_char(input: &mut Input<'_>) -> ModalResult<char> {
    let c: char = any.parse_next(input)?;
    match c {
        't' => Ok('\t'),
        'b' => Ok('\x08'),
        'n' => Ok('\n'),
        'r' => Ok('\r'),
        'f' => Ok('\x0C'),
        '"' => Ok('"'),
        '\'' => Ok('\''),
        '\\' => Ok('\\'),
        'u' => {
            let hex: &str = take_while(4..=4, AsChar::is_hex_digit).parse_next(input)?;
            if hex.len() != 4 {
                return Err(winnow::error::ErrMode::Backtrack(ContextError::new()));
            }
            let code = u32::from_str_radix(hex, 16)
                .map_err(|_| winnow::error::ErrMode::Backtrack(ContextError::new()))?;
            char::from_u32(code)
                .ok_or_else(|| winnow::error::ErrMode::Backtrack(ContextError::new()))
        }
        'U' => {
            let hex: &str = take_while(8..=8, AsChar::is_hex_digit).parse_next(input)?;
            if hex.len() != 8 {
                return Err(winnow::error::ErrMode::Backtrack(ContextError::new()));
            }
            let code = u32::from_str_radix(hex, 16)
                .map_err(|_| winnow::error::ErrMode::Backtrack(ContextError::new()))?;
            char::from_u32(code)
                .ok_or_else(|| winnow::error::ErrMode::Backtrack(ContextError::new()))
        }
        _ => Err(winnow::error::ErrMode::Backtrack(ContextError::new())),
    }
}

// =============================================================================
// Numbers
// =============================================================================

fn parse_number(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    alt((parse_double, parse_decimal, parse_integer)).parse_next(input)
}

fn parse_integer(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let sign = opt(one_of(['+', '-'])).parse_next(input)?;
    let digits: &str = digit1.parse_next(input)?;

    if peek(opt(one_of(['e', 'E']))).parse_next(input)?.is_some() {
        return Err(winnow::error::ErrMode::Backtrack(ContextError::new()));
    }

    if input.starts_with('.') {
        let rest = &input.as_ref()[1..];
        if rest.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            return Err(winnow::error::ErrMode::Backtrack(ContextError::new()));
        }
    }

    let mut num_str = String::new();
    if let Some(s) = sign {
        num_str.push(s);
    }
    num_str.push_str(digits);

    // Out of i64 range fails the token rather than mangling the value
    let value = num_str
        .parse::<i64>()
        .map_err(|_| winnow::error::ErrMode::Backtrack(ContextError::new()))?;
    Ok(TokenKind::Integer(value))
}

fn parse_decimal(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let sign = opt(one_of(['+', '-'])).parse_next(input)?;

    let (whole, frac) = alt((
        (digit1, preceded('.', digit1)).map(|(w, f): (&str, &str)| (Some(w), f)),
        preceded('.', digit1).map(|f: &str| (None, f)),
    ))
    .parse_next(input)?;

    if peek(opt(one_of(['e', 'E']))).parse_next(input)?.is_some() {
        return Err(winnow::error::ErrMode::Backtrack(ContextError::new()));
    }

    let mut num_str = String::new();
    if let Some(s) = sign {
        num_str.push(s);
    }
    if let Some(w) = whole {
        num_str.push_str(w);
    }
    num_str.push('.');
    num_str.push_str(frac);

    Ok(TokenKind::Decimal(Arc::from(num_str)))
}

fn parse_double(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let sign = opt(one_of(['+', '-'])).parse_next(input)?;

    let mantissa = alt((
        (digit1, '.', opt(digit1)).take(),
        ('.', digit1).take(),
        digit1,
    ))
    .parse_next(input)?;

    one_of(['e', 'E']).parse_next(input)?;
    let exp_sign = opt(one_of(['+', '-'])).parse_next(input)?;
    let exp_digits: &str = digit1.parse_next(input)?;

    let mut num_str = String::new();
    if let Some(s) = sign {
        num_str.push(s);
    }
    num_str.push_str(mantissa);
    num_str.push('e');
    if let Some(s) = exp_sign {
        num_str.push(s);
    }
    num_str.push_str(exp_digits);

    let value = num_str
        .parse::<f64>()
        .map_err(|_| winnow::error::ErrMode::Backtrack(ContextError::new()))?;
    Ok(TokenKind::Double(value))
}

// =============================================================================
// Operators and Punctuation
// =============================================================================

fn parse_double_caret(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    "^^".map(|_| TokenKind::DoubleCaret).parse_next(input)
}

fn parse_punctuation(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    any.verify_map(|c| match c {
        '.' => Some(TokenKind::Dot),
        ',' => Some(TokenKind::Comma),
        ';' => Some(TokenKind::Semicolon),
        '[' => Some(TokenKind::LBracket),
        ']' => Some(TokenKind::RBracket),
        '(' => Some(TokenKind::LParen),
        ')' => Some(TokenKind::RParen),
        '{' => Some(TokenKind::LBrace),
        '}' => Some(TokenKind::RBrace),
        _ => None,
    })
    .parse_next(input)
}

/// Tokenize a document string.
///
/// Returns an error immediately on the first invalid token, with a clear
/// error message including line/column information and source context.
pub fn tokenize(input: &str, lax_iris: bool) -> Result<LexOutput> {
    Lexer::new(input, lax_iris).tokenize()
}
