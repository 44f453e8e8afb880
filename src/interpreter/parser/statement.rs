use tracing::debug;

use crate::{
    ast::{FunctionDef, Node},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

/// Statement-leading words the parser dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    If,
    While,
    Print,
    Def,
    Return,
}

impl Keyword {
    fn from_text(text: &str) -> Option<Self> {
        let keyword = match text {
            "if" => Self::If,
            "while" => Self::While,
            "print" => Self::Print,
            "def" => Self::Def,
            "return" => Self::Return,
            _ => return None,
        };
        Some(keyword)
    }
}

impl Parser {
    /// Parses one statement.
    ///
    /// Dispatches on the leading token. Anything that is not a keyword
    /// statement or an array literal is parsed as an expression statement.
    ///
    /// Assignments need a terminating `;`. Other expression statements and
    /// array literal statements take an optional one.
    ///
    /// # Errors
    /// Returns `UnexpectedToken` for the first token that does not fit.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> ParseResult<Node> {
        if self.check(TokenKind::LeftBracket) {
            let literal = self.parse_array_literal()?;
            self.skip_semicolon();
            return Ok(literal);
        }

        match self.leading_keyword() {
            Some(Keyword::If) => self.parse_if(),
            Some(Keyword::While) => self.parse_while(),
            Some(Keyword::Print) => self.parse_print(),
            Some(Keyword::Def) => self.parse_function_def(),
            Some(Keyword::Return) => self.parse_return(),
            None => self.parse_expression_statement(),
        }
    }

    fn leading_keyword(&self) -> Option<Keyword> {
        let token = self.current();
        if token.kind == TokenKind::Identifier {
            Keyword::from_text(&token.text)
        } else {
            None
        }
    }

    fn parse_expression_statement(&mut self) -> ParseResult<Node> {
        let expr = self.parse_expression()?;
        if matches!(expr, Node::Assignment { .. } | Node::ArrayAssign { .. }) {
            self.expect_semicolon()?;
        } else {
            self.skip_semicolon();
        }
        Ok(expr)
    }

    /// `if condition { ... } (else (if ... | { ... }))?`
    ///
    /// The current token is the `if` keyword.
    fn parse_if(&mut self) -> ParseResult<Node> {
        self.advance();
        let condition = self.parse_condition()?;
        let then_block = self.parse_braced_block()?;

        let else_node = if self.current().is_keyword("else") {
            self.advance();
            Some(Box::new(self.parse_else()?))
        } else {
            None
        };

        Ok(Node::If { condition: Box::new(condition),
                      then_block: Box::new(then_block),
                      else_node })
    }

    fn parse_else(&mut self) -> ParseResult<Node> {
        if self.current().is_keyword("if") {
            let nested_if = self.parse_if()?;
            Ok(Node::Else { nested_if: Some(Box::new(nested_if)),
                            block:     None, })
        } else if self.current().is_operator("{") {
            let block = self.parse_braced_block()?;
            Ok(Node::Else { nested_if: None,
                            block:     Some(Box::new(block)), })
        } else {
            Err(self.unexpected())
        }
    }

    /// `while condition { ... }`
    fn parse_while(&mut self) -> ParseResult<Node> {
        self.advance();
        let condition = self.parse_condition()?;
        let block = self.parse_braced_block()?;
        Ok(Node::While { condition: Box::new(condition),
                         block:     Box::new(block), })
    }

    /// `print expression ;`
    fn parse_print(&mut self) -> ParseResult<Node> {
        self.advance();
        let expr = self.parse_expression()?;
        self.expect_semicolon()?;
        Ok(Node::Print(Box::new(expr)))
    }

    /// `return expression? ;`
    fn parse_return(&mut self) -> ParseResult<Node> {
        self.advance();
        if self.check(TokenKind::Semicolon) {
            self.advance();
            return Ok(Node::Return(None));
        }
        let expr = self.parse_expression()?;
        self.expect_semicolon()?;
        Ok(Node::Return(Some(Box::new(expr))))
    }

    /// `def name(param, ...) { ... }`
    ///
    /// The name becomes known before the body is parsed, so the body can
    /// call the function it defines. The finished definition is queued for
    /// registration.
    fn parse_function_def(&mut self) -> ParseResult<Node> {
        self.advance();
        let name = self.expect_name()?;
        self.functions.insert(name.clone());

        self.expect(TokenKind::LeftParen)?;
        let params = self.parse_comma_separated(TokenKind::RightParen, Self::expect_name)?;
        let body = self.parse_braced_block()?;

        debug!(function = %name, params = params.len(), "parsed function definition");
        let def = FunctionDef { name,
                                params,
                                body: Box::new(body) };
        self.definitions.push(def.clone());
        Ok(Node::FunctionDef(def))
    }
}
