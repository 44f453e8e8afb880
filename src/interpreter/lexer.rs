use logos::{Logos, Skip};
use tracing::trace;

use crate::error::SyntaxError;

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, SyntaxError>;

/// Text carried by the sentinel token that terminates every token stream.
pub const END_TEXT: &str = "END";

/// The lexical category of a token.
///
/// The variants double as the logos patterns that recognise them. Keywords
/// such as `if` or `while` are plain identifiers at this level; the parser
/// tells them apart by their text.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
#[logos(error = LexFault)]
#[logos(skip r"[ \t\r\f\v]+")]
#[logos(skip("\n", callback = newline))]
pub enum TokenKind {
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `[`
    #[token("[")]
    LeftBracket,
    /// `]`
    #[token("]")]
    RightBracket,
    /// Arithmetic, comparison and logical operators, and the braces that
    /// delimit blocks.
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("%")]
    #[token("<")]
    #[token(">")]
    #[token("<=")]
    #[token(">=")]
    #[token("==")]
    #[token("!=")]
    #[token("&")]
    #[token("^")]
    #[token("|")]
    #[token("{")]
    #[token("}")]
    Operator,
    /// Numeric literals: a digit run with at most one fractional part, such
    /// as `42` or `3.14`.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    #[regex(r"[0-9]+\.", reject_dangling_decimal)]
    Number,
    /// Names of variables, functions and arrays, and keywords.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,
    /// `=`
    #[token("=")]
    Assignment,
    /// `true` or `false`.
    #[token("true")]
    #[token("false")]
    Boolean,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// The sentinel that ends every token stream.
    End,
}

/// Why logos refused a slice of input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LexFault {
    /// No pattern matches the character at the current position.
    #[default]
    Unrecognized,
    /// A number ended with a `.` that is not followed by a digit.
    DanglingDecimal,
}

/// Position bookkeeping carried by the lexer while it runs.
///
/// The line count is bumped on every `\n`, and the byte offset of the first
/// character of the current line is remembered so that columns can be
/// recovered from token spans.
#[derive(Debug)]
pub struct LexerExtras {
    /// The current 1-based line.
    pub line:       usize,
    /// Byte offset at which the current line starts.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// A lexical token with its source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The 1-based line of the first character.
    pub line:   usize,
    /// The 1-based column of the first character.
    pub column: usize,
    /// The exact source text, or [`END_TEXT`] for the sentinel.
    pub text:   String,
    /// The lexical category.
    pub kind:   TokenKind,
}

impl Token {
    /// Creates the sentinel token at the given position.
    #[must_use]
    pub fn end(line: usize, column: usize) -> Self {
        Self { line,
               column,
               text: END_TEXT.to_string(),
               kind: TokenKind::End }
    }

    /// Tests whether this token is an operator with the given symbol.
    #[must_use]
    pub fn is_operator(&self, symbol: &str) -> bool {
        self.kind == TokenKind::Operator && self.text == symbol
    }

    /// Tests whether this token is the identifier `word`.
    #[must_use]
    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == TokenKind::Identifier && self.text == word
    }
}

/// Converts source text into [`Token`]s one at a time.
///
/// Once the input is exhausted every further call to
/// [`Lexer::next_token`] yields the `End` sentinel again.
pub struct Lexer<'s> {
    inner:  logos::Lexer<'s, TokenKind>,
    source: &'s str,
}

impl<'s> Lexer<'s> {
    /// Creates a lexer positioned at line 1, column 1 of `source`.
    #[must_use]
    pub fn new(source: &'s str) -> Self {
        Self { inner: TokenKind::lexer_with_extras(source, LexerExtras::default()),
               source }
    }

    /// Produces the next token.
    ///
    /// # Errors
    /// Returns a [`SyntaxError`] positioned at the offending character when
    /// the input contains an unknown character or a malformed number.
    pub fn next_token(&mut self) -> LexResult<Token> {
        let Some(result) = self.inner.next() else {
            return Ok(Token::end(self.inner.extras.line, self.column_at(self.source.len())));
        };

        let span = self.inner.span();
        let line = self.inner.extras.line;

        match result {
            Ok(kind) => {
                let token = Token { line,
                                    column: self.column_at(span.start),
                                    text: self.inner.slice().to_string(),
                                    kind };
                trace!(line, column = token.column, text = %token.text, "token");
                Ok(token)
            },
            Err(LexFault::Unrecognized) => Err(SyntaxError { line,
                                                             column: self.column_at(span.start) }),
            // Points at whatever follows the dot, where a digit was required.
            Err(LexFault::DanglingDecimal) => Err(SyntaxError { line,
                                                                column: self.column_at(span.end) }),
        }
    }

    /// Lexes the whole input.
    ///
    /// The returned vector always ends with exactly one `End` token.
    ///
    /// # Errors
    /// Returns the first [`SyntaxError`] encountered.
    pub fn tokenize(&mut self) -> LexResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::End;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    fn column_at(&self, offset: usize) -> usize {
        let line_start = self.inner.extras.line_start.min(offset);
        self.source
            .get(line_start..offset)
            .map_or(0, |prefix| prefix.chars().count())
        + 1
    }
}

/// Lexes `source` into a token vector terminated by `End`.
///
/// # Errors
/// Returns a [`SyntaxError`] for the first invalid character or malformed
/// number.
///
/// # Example
/// ```
/// use scrypt::interpreter::lexer::{TokenKind, lex};
///
/// let tokens = lex("x = 3.5;").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Identifier,
///             TokenKind::Assignment,
///             TokenKind::Number,
///             TokenKind::Semicolon,
///             TokenKind::End]);
/// assert_eq!(tokens[2].column, 5);
/// ```
pub fn lex(source: &str) -> LexResult<Vec<Token>> {
    Lexer::new(source).tokenize()
}

/// Line breaks only move the position; they never become tokens.
fn newline(lex: &mut logos::Lexer<TokenKind>) -> Skip {
    lex.extras.line += 1;
    lex.extras.line_start = lex.span().end;
    Skip
}

fn reject_dangling_decimal(_: &mut logos::Lexer<TokenKind>) -> Result<(), LexFault> {
    Err(LexFault::DanglingDecimal)
}
