use crate::{
    ast::Node,
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, Parser},
            utils::is_keyword,
        },
    },
};

impl Parser {
    /// Parses a primary expression.
    ///
    /// The rule is:
    /// `primary := number | boolean | identifier_expr | "(" expression ")" |
    /// array_literal`
    ///
    /// # Errors
    /// Returns `UnexpectedToken` for a token that can not start an operand,
    /// including `)`, `{` and keywords.
    pub(in crate::interpreter::parser) fn parse_primary(&mut self) -> ParseResult<Node> {
        match self.current().kind {
            TokenKind::Number => {
                let value = self.current().text.parse::<f64>().map_err(|_| self.unexpected())?;
                self.advance();
                Ok(Node::Number(value))
            },
            TokenKind::Boolean => {
                let value = self.advance().text == "true";
                Ok(Node::Boolean(value))
            },
            TokenKind::Identifier => self.parse_identifier(),
            TokenKind::LeftParen => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect(TokenKind::RightParen)?;
                Ok(inner)
            },
            TokenKind::LeftBracket => self.parse_array_literal(),
            _ => Err(self.unexpected()),
        }
    }

    /// Parses everything an identifier can start.
    ///
    /// One token of lookahead decides:
    /// - `name(` is a call;
    /// - a known function name followed by `;` is a bare reference to it;
    /// - `name[` is an array lookup;
    /// - anything else is a variable read.
    ///
    /// A known function name followed by anything other than `(` or `;` is
    /// rejected at the token that follows it.
    fn parse_identifier(&mut self) -> ParseResult<Node> {
        if is_keyword(&self.current().text) {
            return Err(self.unexpected());
        }
        let name = self.advance().text;

        if self.check(TokenKind::LeftParen) {
            self.advance();
            let args = self.parse_comma_separated(TokenKind::RightParen, Self::parse_expression)?;
            return Ok(Node::FunctionCall { name, args });
        }
        if self.functions.contains(&name) {
            return if self.check(TokenKind::Semicolon) {
                Ok(Node::Variable(name))
            } else {
                Err(self.unexpected())
            };
        }
        if self.check(TokenKind::LeftBracket) {
            self.advance();
            let index = self.parse_expression()?;
            self.expect(TokenKind::RightBracket)?;
            return Ok(Node::ArrayLookup { name,
                                          index: Box::new(index) });
        }
        Ok(Node::Variable(name))
    }

    /// Parses `[e1, e2, ...]`. The opening bracket is the current token.
    pub(in crate::interpreter::parser) fn parse_array_literal(&mut self) -> ParseResult<Node> {
        self.expect(TokenKind::LeftBracket)?;
        let elements = self.parse_comma_separated(TokenKind::RightBracket, Self::parse_expression)?;
        Ok(Node::ArrayLiteral(elements))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::interpreter::{lexer::lex, parser::core::Parser};

    fn parse_with(source: &str, functions: &[&str]) -> Result<String, String> {
        let mut parser = Parser::with_functions(lex(source).unwrap(), functions.iter().copied());
        parser.parse_expression()
              .map(|node| node.render_infix())
              .map_err(|e| e.to_string())
    }

    #[test]
    fn identifiers_disambiguate_by_lookahead() {
        assert_eq!(parse_with("f(1, x)", &[]), Ok("f(1, x)".into()));
        assert_eq!(parse_with("g()", &[]), Ok("g()".into()));
        assert_eq!(parse_with("a[i + 1]", &[]), Ok("a[(i + 1)]".into()));
        assert_eq!(parse_with("plain", &[]), Ok("plain".into()));
    }

    #[test]
    fn known_function_alone_is_a_reference() {
        assert_eq!(parse_with("f;", &["f"]), Ok("f".into()));
        assert_eq!(parse_with("f + 1", &["f"]),
                   Err("Unexpected token at line 1 column 3: +".into()));
    }

    #[test]
    fn array_literals_allow_empty_and_nested_expressions() {
        assert_eq!(parse_with("[]", &[]), Ok("[]".into()));
        assert_eq!(parse_with("[1, 2 * 3, x]", &[]), Ok("[1, (2 * 3), x]".into()));
        assert_eq!(parse_with("[1, 2", &[]),
                   Err("Unexpected token at line 1 column 6: END".into()));
    }

    #[test]
    fn keywords_are_not_operands() {
        assert_eq!(parse_with("1 + while", &[]),
                   Err("Unexpected token at line 1 column 5: while".into()));
    }

    #[test]
    fn grouping_requires_closing_paren() {
        assert_eq!(parse_with("(1 + 2", &[]),
                   Err("Unexpected token at line 1 column 7: END".into()));
    }
}
