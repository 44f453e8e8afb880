use std::collections::HashSet;

use tracing::debug;

use crate::{
    ast::{FunctionDef, Node},
    error::ParseError,
    interpreter::lexer::{Token, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A recursive-descent parser over a lexed token stream.
///
/// The parser hands out one top-level statement per call to
/// [`Parser::parse_next`]. Its cursor only moves forward and stops on the
/// terminating `End` token.
///
/// Besides the cursor the parser remembers the names of the functions it
/// has seen defined, which decides whether a bare identifier is a call.
/// Every `def` it parses, nested ones included, is also queued for
/// registration; see [`Parser::take_definitions`].
pub struct Parser {
    pub(in crate::interpreter::parser) tokens:      Vec<Token>,
    pub(in crate::interpreter::parser) cursor:      usize,
    pub(in crate::interpreter::parser) functions:   HashSet<String>,
    pub(in crate::interpreter::parser) definitions: Vec<FunctionDef>,
    checked_parens: bool,
}

impl Parser {
    /// Creates a parser over `tokens`.
    ///
    /// A stream that does not end in `End` gets one appended, so the cursor
    /// always has a sentinel to stop on.
    #[must_use]
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().is_none_or(|t| t.kind != TokenKind::End) {
            let (line, column) = tokens.last()
                                       .map_or((1, 1), |t| (t.line, t.column + t.text.chars().count()));
            tokens.push(Token::end(line, column));
        }

        Self { tokens,
               cursor: 0,
               functions: HashSet::new(),
               definitions: Vec::new(),
               checked_parens: false }
    }

    /// Creates a parser that already knows the given function names.
    ///
    /// Used by drivers that parse a program in pieces, so that a function
    /// defined by an earlier piece is still recognised as one.
    #[must_use]
    pub fn with_functions<I, S>(tokens: Vec<Token>, names: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        let mut parser = Self::new(tokens);
        parser.functions.extend(names.into_iter().map(Into::into));
        parser
    }

    /// Parses the next top-level statement.
    ///
    /// Returns `Ok(None)` once the cursor has reached `End`.
    ///
    /// # Errors
    /// Returns a [`ParseError`] for the first token that does not fit the
    /// grammar. Parsing does not resynchronise after an error.
    ///
    /// # Example
    /// ```
    /// use scrypt::interpreter::{lexer::lex, parser::core::Parser};
    ///
    /// let mut parser = Parser::new(lex("x = 1; x + 2").unwrap());
    ///
    /// assert_eq!(parser.parse_next().unwrap().unwrap().render_infix(), "(x = 1)");
    /// assert_eq!(parser.parse_next().unwrap().unwrap().render_infix(), "(x + 2)");
    /// assert!(parser.parse_next().unwrap().is_none());
    /// ```
    pub fn parse_next(&mut self) -> ParseResult<Option<Node>> {
        if !self.checked_parens {
            self.checked_parens = true;
            self.check_closing_parens()?;
        }
        if self.at_end() {
            return Ok(None);
        }

        let line = self.current().line;
        let statement = self.parse_statement()?;
        debug!(line, statement = %statement, "parsed statement");
        Ok(Some(statement))
    }

    /// Parses every remaining statement.
    ///
    /// # Errors
    /// Returns the first [`ParseError`] encountered.
    pub fn parse_all(&mut self) -> ParseResult<Vec<Node>> {
        let mut statements = Vec::new();
        while let Some(statement) = self.parse_next()? {
            statements.push(statement);
        }
        Ok(statements)
    }

    /// Hands over the function definitions parsed since the last call.
    ///
    /// Definitions are registered as soon as they are parsed, whether or not
    /// the statement holding them ever runs. Drivers pass these to
    /// [`Environment::register_function`](crate::interpreter::environment::Environment::register_function)
    /// before evaluating the statement they came from.
    ///
    /// # Example
    /// ```
    /// use scrypt::interpreter::{lexer::lex, parser::core::Parser};
    ///
    /// let mut parser = Parser::new(lex("if false { def g() { return 1; } }").unwrap());
    /// parser.parse_next().unwrap();
    ///
    /// let names: Vec<_> = parser.take_definitions().into_iter().map(|d| d.name).collect();
    /// assert_eq!(names, ["g"]);
    /// assert!(parser.take_definitions().is_empty());
    /// ```
    pub fn take_definitions(&mut self) -> Vec<FunctionDef> {
        std::mem::take(&mut self.definitions)
    }

    /// The token under the cursor.
    pub(in crate::interpreter::parser) fn current(&self) -> &Token {
        // `new` guarantees a trailing `End`, and the cursor never passes it.
        &self.tokens[self.cursor]
    }

    /// Moves past the current token and returns it.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if self.cursor + 1 < self.tokens.len() {
            self.cursor += 1;
        }
        token
    }

    pub(in crate::interpreter::parser) fn at_end(&self) -> bool {
        self.current().kind == TokenKind::End
    }

    /// An error pointing at the token under the cursor.
    pub(in crate::interpreter::parser) fn unexpected(&self) -> ParseError {
        ParseError::unexpected(self.current())
    }

    /// Rejects a `)` that closes nothing, before any statement is handed
    /// out. Unclosed `(` are left to the grammar, which reports them at the
    /// token where `)` was required.
    fn check_closing_parens(&self) -> ParseResult<()> {
        let mut depth = 0usize;
        for token in &self.tokens[self.cursor..] {
            match token.kind {
                TokenKind::LeftParen => depth += 1,
                TokenKind::RightParen if depth == 0 => return Err(ParseError::unexpected(token)),
                TokenKind::RightParen => depth -= 1,
                _ => {},
            }
        }
        Ok(())
    }
}
