use crate::interpreter::{
    lexer::{Token, TokenKind},
    parser::core::{ParseResult, Parser},
};

/// Words with a fixed meaning at the start of a statement. They can not be
/// used as variable, array or function names.
pub const KEYWORDS: &[&str] = &["if", "else", "while", "print", "def", "return"];

/// Tests whether `name` is one of the [`KEYWORDS`].
#[must_use]
pub fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(&name)
}

impl Parser {
    /// Tests whether the current token has the given kind.
    pub(in crate::interpreter::parser) fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    /// Consumes a token of the given kind.
    ///
    /// # Errors
    /// Returns `UnexpectedToken` for the current token if it has any other
    /// kind.
    pub(in crate::interpreter::parser) fn expect(&mut self, kind: TokenKind) -> ParseResult<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected())
        }
    }

    /// Consumes the operator `symbol`.
    ///
    /// # Errors
    /// Returns `UnexpectedToken` for the current token if it is anything
    /// else.
    pub(in crate::interpreter::parser) fn expect_operator(&mut self, symbol: &str) -> ParseResult<Token> {
        if self.current().is_operator(symbol) {
            Ok(self.advance())
        } else {
            Err(self.unexpected())
        }
    }

    /// Consumes an identifier that is not a keyword and returns its text.
    ///
    /// # Errors
    /// Returns `UnexpectedToken` if the current token is not a usable name.
    pub(in crate::interpreter::parser) fn expect_name(&mut self) -> ParseResult<String> {
        let token = self.current();
        if token.kind != TokenKind::Identifier || is_keyword(&token.text) {
            return Err(self.unexpected());
        }
        Ok(self.advance().text)
    }

    /// Consumes the `;` that must end a statement.
    ///
    /// # Errors
    /// Returns `UnexpectedToken` if the statement is not terminated.
    pub(in crate::interpreter::parser) fn expect_semicolon(&mut self) -> ParseResult<()> {
        self.expect(TokenKind::Semicolon).map(|_| ())
    }

    /// Consumes a `;` if one follows.
    pub(in crate::interpreter::parser) fn skip_semicolon(&mut self) {
        if self.check(TokenKind::Semicolon) {
            self.advance();
        }
    }

    /// Parses a comma-separated list of items up to and including a closing
    /// token.
    ///
    /// This utility is shared by array literals, call arguments and
    /// parameter lists. An immediately encountered closing token produces an
    /// empty list.
    ///
    /// Grammar (simplified): `list := (item ("," item)*)? closing`
    ///
    /// # Errors
    /// Returns a `ParseError` if an item fails to parse or if anything other
    /// than `,` or the closing token follows an item.
    pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
        &mut self,
        closing: TokenKind,
        mut parse_item: impl FnMut(&mut Self) -> ParseResult<T>)
        -> ParseResult<Vec<T>> {
        let mut items = Vec::new();
        if self.check(closing) {
            self.advance();
            return Ok(items);
        }
        loop {
            items.push(parse_item(self)?);
            if self.check(TokenKind::Comma) {
                self.advance();
            } else if self.check(closing) {
                self.advance();
                return Ok(items);
            } else {
                return Err(self.unexpected());
            }
        }
    }
}
