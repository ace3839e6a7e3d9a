//! The scanner.
//!
//! Converts source text into a stream of tokens. Trivia is never skipped:
//! whitespace runs, line breaks and comments are tokens of their own, so the
//! token texts concatenate back to the input.

use memchr::{memchr3, memmem};
use verbatim_ast::syntax_kind::SyntaxKind;
use verbatim_ast::types::TokenFlags;
use verbatim_core::text::{LineColumn, TextSpan};
use verbatim_diagnostics::{messages, Diagnostic, DiagnosticCollection, DiagnosticMessage};

use crate::char_codes::*;
use crate::token::Token;

/// The scanner converts source text into tokens.
pub struct Scanner<'a> {
    /// The source text being scanned.
    text: &'a str,
    /// Current byte position in the text.
    pos: usize,
    /// Start of the current token.
    token_start: usize,
    /// The current token kind.
    token: SyntaxKind,
    /// Token flags for the current token.
    token_flags: TokenFlags,
    /// Line and column of `pos`.
    line: u32,
    column: u32,
    /// Line and column of `token_start`.
    token_line: u32,
    token_column: u32,
    /// Accumulated diagnostics.
    diagnostics: DiagnosticCollection,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given source text.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            token_start: 0,
            token: SyntaxKind::Unknown,
            token_flags: TokenFlags::NONE,
            line: 1,
            column: 1,
            token_line: 1,
            token_column: 1,
            diagnostics: DiagnosticCollection::new(),
        }
    }

    /// Get the current token kind.
    #[inline]
    pub fn token(&self) -> SyntaxKind {
        self.token
    }

    /// Get the current token's source text.
    #[inline]
    pub fn token_text(&self) -> &'a str {
        &self.text[self.token_start..self.pos]
    }

    /// Get the start position of the current token.
    #[inline]
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Get the current position (end of current token).
    #[inline]
    pub fn token_end(&self) -> usize {
        self.pos
    }

    /// Get the current token flags.
    #[inline]
    pub fn token_flags(&self) -> TokenFlags {
        self.token_flags
    }

    /// Line and column of the current token.
    #[inline]
    pub fn token_position(&self) -> LineColumn {
        LineColumn::new(self.token_line, self.token_column)
    }

    /// Get the accumulated diagnostics.
    pub fn diagnostics(&self) -> &DiagnosticCollection {
        &self.diagnostics
    }

    /// Take the accumulated diagnostics, leaving an empty collection.
    pub fn take_diagnostics(&mut self) -> DiagnosticCollection {
        std::mem::take(&mut self.diagnostics)
    }

    /// Get a Token for the current token.
    pub fn token_info(&self) -> Token<'a> {
        Token::new(
            self.token,
            self.token_text(),
            self.token_line,
            self.token_column,
            self.token_start as u32,
        )
        .with_flags(self.token_flags)
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    /// Look at the character at the current position without advancing.
    #[inline]
    fn current_char(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    /// Look at the character starting `offset` bytes past the current position.
    #[inline]
    fn char_at(&self, offset: usize) -> Option<char> {
        self.text
            .get(self.pos + offset..)
            .and_then(|rest| rest.chars().next())
    }

    /// Whether we've reached the end of the text.
    #[inline]
    fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn error(&mut self, message: &DiagnosticMessage) {
        let span = TextSpan::from_bounds(self.token_start as u32, self.pos as u32);
        let position = self.token_position();
        let found = &self.text[self.token_start..self.pos];
        self.diagnostics
            .add(Diagnostic::with_location(span, position, found, message, &[]));
    }

    /// Scan the next token and return its kind.
    pub fn scan(&mut self) -> SyntaxKind {
        self.token_flags = TokenFlags::NONE;
        self.token_start = self.pos;
        self.token_line = self.line;
        self.token_column = self.column;

        let ch = match self.current_char() {
            Some(ch) => ch,
            None => {
                self.token = SyntaxKind::EndOfFileToken;
                return self.token;
            }
        };

        self.token = match ch {
            '(' => { self.pos += 1; SyntaxKind::OpenParenToken }
            ')' => { self.pos += 1; SyntaxKind::CloseParenToken }
            '{' => { self.pos += 1; SyntaxKind::OpenBraceToken }
            '}' => { self.pos += 1; SyntaxKind::CloseBraceToken }
            '[' => { self.pos += 1; SyntaxKind::OpenBracketToken }
            ']' => { self.pos += 1; SyntaxKind::CloseBracketToken }
            ';' => { self.pos += 1; SyntaxKind::SemicolonToken }
            ',' => { self.pos += 1; SyntaxKind::CommaToken }
            ':' => { self.pos += 1; SyntaxKind::ColonToken }

            '.' => self.scan_dot(),
            '<' => self.scan_less_than(),
            '>' => self.scan_greater_than(),
            '=' => self.scan_equals(),
            '!' => self.scan_exclamation(),
            '+' => self.scan_plus(),
            '-' => self.scan_minus(),
            '*' => self.scan_asterisk(),
            '/' => self.scan_slash(),
            '%' => self.scan_percent(),
            '&' => self.scan_ampersand(),
            '|' => self.scan_bar(),

            '\'' | '"' => self.scan_string_literal(ch),

            '0'..='9' => self.scan_number(),

            _ if is_line_break(ch) => self.scan_new_line(ch),
            _ if is_white_space_single_line(ch) => self.scan_whitespace(),
            _ if is_identifier_start(ch) => self.scan_identifier(),

            _ => {
                self.pos += ch.len_utf8();
                self.error(&messages::INVALID_CHARACTER);
                SyntaxKind::Unknown
            }
        };

        self.advance_line_column();
        self.token
    }

    /// Move `line`/`column` past the text of the token just scanned.
    fn advance_line_column(&mut self) {
        let mut chars = self.text[self.token_start..self.pos].chars().peekable();
        while let Some(ch) = chars.next() {
            if ch == CARRIAGE_RETURN && chars.peek() == Some(&LINE_FEED) {
                continue;
            }
            if is_line_break(ch) {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    // ========================================================================
    // Trivia
    // ========================================================================

    fn scan_new_line(&mut self, ch: char) -> SyntaxKind {
        if ch == CARRIAGE_RETURN && self.char_at(1) == Some(LINE_FEED) {
            self.pos += 2;
        } else {
            self.pos += ch.len_utf8();
        }
        SyntaxKind::NewLineTrivia
    }

    fn scan_whitespace(&mut self) -> SyntaxKind {
        while let Some(ch) = self.current_char() {
            if !is_white_space_single_line(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
        SyntaxKind::WhitespaceTrivia
    }

    /// Single-line comments stop before the line break.
    fn scan_single_line_comment(&mut self) -> SyntaxKind {
        let bytes = self.text.as_bytes();
        let mut search = self.pos + 2;
        self.pos = loop {
            match memchr3(b'\n', b'\r', 0xE2, &bytes[search..]) {
                None => break bytes.len(),
                Some(i) => {
                    let at = search + i;
                    // U+2028 and U+2029 encode as E2 80 A8 and E2 80 A9.
                    if bytes[at] != 0xE2
                        || matches!(bytes.get(at + 1..at + 3), Some([0x80, 0xA8 | 0xA9]))
                    {
                        break at;
                    }
                    search = at + 1;
                }
            }
        };
        SyntaxKind::SingleLineCommentTrivia
    }

    /// Multi-line comments run to the first `*/`, or to end of input.
    fn scan_multi_line_comment(&mut self) -> SyntaxKind {
        let body = self.pos + 2;
        match memmem::find(&self.text.as_bytes()[body..], b"*/") {
            Some(i) => self.pos = body + i + 2,
            None => {
                self.pos = self.text.len();
                self.token_flags |= TokenFlags::UNTERMINATED;
                self.error(&messages::ASTERISK_SLASH_EXPECTED);
            }
        }
        SyntaxKind::MultiLineCommentTrivia
    }

    // ========================================================================
    // Token-specific scanning methods
    // ========================================================================

    fn scan_dot(&mut self) -> SyntaxKind {
        if self.char_at(1).map_or(false, is_digit) {
            self.scan_number()
        } else {
            self.pos += 1;
            SyntaxKind::DotToken
        }
    }

    fn scan_less_than(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('=') {
            self.pos += 2;
            SyntaxKind::LessThanEqualsToken
        } else {
            self.pos += 1;
            SyntaxKind::LessThanToken
        }
    }

    fn scan_greater_than(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('=') {
            self.pos += 2;
            SyntaxKind::GreaterThanEqualsToken
        } else {
            self.pos += 1;
            SyntaxKind::GreaterThanToken
        }
    }

    fn scan_equals(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('=') {
            if self.char_at(2) == Some('=') {
                self.pos += 3;
                SyntaxKind::EqualsEqualsEqualsToken
            } else {
                self.pos += 2;
                SyntaxKind::EqualsEqualsToken
            }
        } else {
            self.pos += 1;
            SyntaxKind::EqualsToken
        }
    }

    fn scan_exclamation(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('=') {
            if self.char_at(2) == Some('=') {
                self.pos += 3;
                SyntaxKind::ExclamationEqualsEqualsToken
            } else {
                self.pos += 2;
                SyntaxKind::ExclamationEqualsToken
            }
        } else {
            self.pos += 1;
            SyntaxKind::ExclamationToken
        }
    }

    fn scan_plus(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('+') {
            self.pos += 2;
            SyntaxKind::PlusPlusToken
        } else if self.char_at(1) == Some('=') {
            self.pos += 2;
            SyntaxKind::PlusEqualsToken
        } else {
            self.pos += 1;
            SyntaxKind::PlusToken
        }
    }

    fn scan_minus(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('-') {
            self.pos += 2;
            SyntaxKind::MinusMinusToken
        } else if self.char_at(1) == Some('=') {
            self.pos += 2;
            SyntaxKind::MinusEqualsToken
        } else {
            self.pos += 1;
            SyntaxKind::MinusToken
        }
    }

    fn scan_asterisk(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('=') {
            self.pos += 2;
            SyntaxKind::AsteriskEqualsToken
        } else {
            self.pos += 1;
            SyntaxKind::AsteriskToken
        }
    }

    fn scan_slash(&mut self) -> SyntaxKind {
        match self.char_at(1) {
            Some('/') => self.scan_single_line_comment(),
            Some('*') => self.scan_multi_line_comment(),
            Some('=') => {
                self.pos += 2;
                SyntaxKind::SlashEqualsToken
            }
            _ => {
                self.pos += 1;
                SyntaxKind::SlashToken
            }
        }
    }

    fn scan_percent(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('=') {
            self.pos += 2;
            SyntaxKind::PercentEqualsToken
        } else {
            self.pos += 1;
            SyntaxKind::PercentToken
        }
    }

    fn scan_ampersand(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('&') {
            self.pos += 2;
            SyntaxKind::AmpersandAmpersandToken
        } else {
            self.pos += 1;
            self.error(&messages::INVALID_CHARACTER);
            SyntaxKind::Unknown
        }
    }

    fn scan_bar(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('|') {
            self.pos += 2;
            SyntaxKind::BarBarToken
        } else {
            self.pos += 1;
            self.error(&messages::INVALID_CHARACTER);
            SyntaxKind::Unknown
        }
    }

    /// Strings keep their quotes and escapes; an unterminated string stops
    /// before the line break.
    fn scan_string_literal(&mut self, quote: char) -> SyntaxKind {
        self.pos += 1; // skip opening quote
        loop {
            let ch = match self.current_char() {
                Some(ch) => ch,
                None => {
                    self.token_flags |= TokenFlags::UNTERMINATED;
                    self.error(&messages::UNTERMINATED_STRING_LITERAL);
                    break;
                }
            };
            if ch == quote {
                self.pos += 1;
                break;
            }
            if ch == '\\' {
                self.pos += 1;
                if let Some(escaped) = self.current_char() {
                    self.pos += escaped.len_utf8();
                }
                continue;
            }
            if is_line_break(ch) {
                self.token_flags |= TokenFlags::UNTERMINATED;
                self.error(&messages::UNTERMINATED_STRING_LITERAL);
                break;
            }
            self.pos += ch.len_utf8();
        }
        SyntaxKind::StringLiteral
    }

    fn scan_number(&mut self) -> SyntaxKind {
        if self.current_char() == Some('0') {
            match self.char_at(1) {
                Some('x') | Some('X') => {
                    self.token_flags |= TokenFlags::HEX_SPECIFIER;
                    return self.scan_prefixed_number(is_hex_digit);
                }
                Some('b') | Some('B') => {
                    self.token_flags |= TokenFlags::BINARY_SPECIFIER;
                    return self.scan_prefixed_number(is_binary_digit);
                }
                Some('o') | Some('O') => {
                    self.token_flags |= TokenFlags::OCTAL_SPECIFIER;
                    return self.scan_prefixed_number(is_octal_digit);
                }
                _ => {}
            }
        }

        // Decimal number; a leading `.` has no integer part.
        self.scan_digits(is_digit);

        if self.current_char() == Some('.') {
            self.pos += 1;
            self.scan_digits(is_digit);
        }

        // Exponent, only when digits follow.
        if let Some('e') | Some('E') = self.current_char() {
            let sign = matches!(self.char_at(1), Some('+') | Some('-')) as usize;
            if self.char_at(1 + sign).map_or(false, is_digit) {
                self.pos += 1 + sign;
                self.token_flags |= TokenFlags::SCIENTIFIC;
                self.scan_digits(is_digit);
            }
        }

        SyntaxKind::NumericLiteral
    }

    fn scan_prefixed_number(&mut self, is_valid_digit: fn(char) -> bool) -> SyntaxKind {
        self.pos += 2; // skip 0x / 0b / 0o
        self.scan_digits(is_valid_digit);
        SyntaxKind::NumericLiteral
    }

    fn scan_digits(&mut self, is_valid_digit: fn(char) -> bool) {
        while let Some(ch) = self.current_char() {
            if ch == '_' {
                self.token_flags |= TokenFlags::CONTAINS_SEPARATOR;
                self.pos += 1;
            } else if is_valid_digit(ch) {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn scan_identifier(&mut self) -> SyntaxKind {
        while let Some(ch) = self.current_char() {
            if !is_identifier_part(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
        SyntaxKind::from_keyword(self.token_text()).unwrap_or(SyntaxKind::Identifier)
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        match self.scan() {
            SyntaxKind::EndOfFileToken => None,
            _ => Some(self.token_info()),
        }
    }
}

/// Tokenize `source`, returning every token including trivia.
///
/// Never fails: unrecognized characters become `Unknown` tokens.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Scanner::new(source).collect()
}

/// Tokenize `source` and return the scanner's diagnostics alongside.
pub fn tokenize_with_diagnostics(source: &str) -> (Vec<Token<'_>>, DiagnosticCollection) {
    let mut scanner = Scanner::new(source);
    let tokens = scanner.by_ref().collect();
    (tokens, scanner.take_diagnostics())
}

/// Concatenate token texts back into source text.
pub fn restore(tokens: &[Token<'_>]) -> String {
    let mut out = String::with_capacity(tokens.iter().map(|t| t.text.len()).sum());
    for token in tokens {
        out.push_str(token.text);
    }
    out
}
