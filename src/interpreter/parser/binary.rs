use crate::{
    ast::{BinaryOperator, Node},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

const LOGICAL_OR: &[BinaryOperator] = &[BinaryOperator::Or];
const LOGICAL_XOR: &[BinaryOperator] = &[BinaryOperator::Xor];
const LOGICAL_AND: &[BinaryOperator] = &[BinaryOperator::And];
const EQUALITY: &[BinaryOperator] = &[BinaryOperator::Equal, BinaryOperator::NotEqual];
const COMPARISON: &[BinaryOperator] = &[BinaryOperator::Less,
                                        BinaryOperator::Greater,
                                        BinaryOperator::LessEqual,
                                        BinaryOperator::GreaterEqual];
const TERM: &[BinaryOperator] = &[BinaryOperator::Add, BinaryOperator::Sub];
const FACTOR: &[BinaryOperator] = &[BinaryOperator::Mul, BinaryOperator::Div, BinaryOperator::Mod];

impl Parser {
    /// Parses a full expression.
    ///
    /// This is the entry point of the precedence ladder:
    ///
    /// `assignment → | → ^ → & → equality → comparison → term → factor →
    /// primary`
    ///
    /// # Errors
    /// Returns `UnexpectedToken` for the first token that does not fit.
    pub fn parse_expression(&mut self) -> ParseResult<Node> {
        self.parse_assignment()
    }

    /// Parses an assignment, which binds loosest and associates to the right.
    ///
    /// The target is parsed as an ordinary operand first. If `=` follows, a
    /// variable becomes an [`Node::Assignment`] and an array lookup becomes
    /// an [`Node::ArrayAssign`]; any other target is rejected at the `=`.
    ///
    /// The rule is: `assignment := logical_or ("=" assignment)?`
    fn parse_assignment(&mut self) -> ParseResult<Node> {
        let target = self.parse_logical_or()?;
        if !self.check(TokenKind::Assignment) {
            return Ok(target);
        }

        let error = self.unexpected();
        match target {
            Node::Variable(name) => {
                self.advance();
                let value = self.parse_assignment()?;
                Ok(Node::Assignment { name,
                                      value: Box::new(value) })
            },
            Node::ArrayLookup { name, index } => {
                self.advance();
                let value = self.parse_assignment()?;
                Ok(Node::ArrayAssign { name,
                                       index,
                                       value: Box::new(value) })
            },
            _ => Err(error),
        }
    }

    fn parse_logical_or(&mut self) -> ParseResult<Node> {
        self.parse_left_associative(LOGICAL_OR, Self::parse_logical_xor)
    }

    fn parse_logical_xor(&mut self) -> ParseResult<Node> {
        self.parse_left_associative(LOGICAL_XOR, Self::parse_logical_and)
    }

    fn parse_logical_and(&mut self) -> ParseResult<Node> {
        self.parse_left_associative(LOGICAL_AND, Self::parse_equality)
    }

    fn parse_equality(&mut self) -> ParseResult<Node> {
        self.parse_left_associative(EQUALITY, Self::parse_comparison)
    }

    fn parse_comparison(&mut self) -> ParseResult<Node> {
        self.parse_left_associative(COMPARISON, Self::parse_term)
    }

    fn parse_term(&mut self) -> ParseResult<Node> {
        self.parse_left_associative(TERM, Self::parse_factor)
    }

    /// Parses multiplication-level expressions.
    ///
    /// The rule is: `factor := primary (("*" | "/" | "%") primary)*`
    pub(in crate::interpreter::parser) fn parse_factor(&mut self) -> ParseResult<Node> {
        self.parse_left_associative(FACTOR, Self::parse_primary)
    }

    /// Parses the condition of an `if` or `while`.
    ///
    /// Conditions do not use the precedence ladder. A factor is followed by
    /// any number of operator tokens, each with another factor, up to the
    /// `{` that opens the body, and they group strictly from the left:
    /// `a < b + c` is `((a < b) + c)`. Only `*`, `/` and `%` bind tighter,
    /// inside each factor. Parentheses restore the full expression grammar.
    ///
    /// An operator symbol with no meaning, such as `}`, is kept as
    /// [`BinaryOperator::Unrecognized`] and only fails when evaluated.
    ///
    /// The rule is: `condition := factor (operator factor)*`
    ///
    /// # Errors
    /// Returns `UnexpectedToken` if a factor fails to parse.
    pub(in crate::interpreter::parser) fn parse_condition(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_factor()?;
        while self.check(TokenKind::Operator) && !self.current().is_operator("{") {
            let symbol = self.advance().text;
            let op = match BinaryOperator::from_symbol(&symbol) {
                Some(op) => op,
                None => BinaryOperator::Unrecognized(symbol.chars().next().unwrap_or_default()),
            };
            let right = self.parse_factor()?;
            left = Node::binary(op, left, right);
        }
        Ok(left)
    }

    /// Parses one left-associative precedence level.
    ///
    /// Operands come from `next`, and the level continues for as long as the
    /// current token is one of `operators`.
    ///
    /// The rule is: `level := next (op next)*`
    fn parse_left_associative(&mut self,
                              operators: &[BinaryOperator],
                              next: fn(&mut Self) -> ParseResult<Node>)
                              -> ParseResult<Node> {
        let mut left = next(self)?;
        while let Some(op) = self.current_operator()
              && operators.contains(&op)
        {
            self.advance();
            let right = next(self)?;
            left = Node::binary(op, left, right);
        }
        Ok(left)
    }

    fn current_operator(&self) -> Option<BinaryOperator> {
        let token = self.current();
        if token.kind == TokenKind::Operator {
            BinaryOperator::from_symbol(&token.text)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::interpreter::{lexer::lex, parser::core::Parser};

    fn render(source: &str) -> String {
        let mut parser = Parser::new(lex(source).unwrap());
        parser.parse_expression().unwrap().render_infix()
    }

    #[test]
    fn factor_binds_tighter_than_term() {
        assert_eq!(render("1 + 2 * 3"), "(1 + (2 * 3))");
        assert_eq!(render("1 - 2 - 3"), "((1 - 2) - 3)");
    }

    #[test]
    fn logical_levels_order_or_xor_and() {
        assert_eq!(render("a | b ^ c & d"), "(a | (b ^ (c & d)))");
        assert_eq!(render("a == b < c"), "(a == (b < c))");
    }

    #[test]
    fn assignment_is_right_associative() {
        assert_eq!(render("x = y = 2 + 1"), "(x = (y = (2 + 1)))");
        assert_eq!(render("a[1] = 4"), "(a[1] = 4)");
    }

    #[test]
    fn assigning_to_a_literal_is_rejected() {
        let mut parser = Parser::new(lex("1 = 2").unwrap());
        let error = parser.parse_expression().unwrap_err();
        assert_eq!(error.to_string(), "Unexpected token at line 1 column 3: =");
    }

    #[test]
    fn condition_groups_from_the_left() {
        let mut parser = Parser::new(lex("a + b * c < d {").unwrap());
        assert_eq!(parser.parse_condition().unwrap().render_infix(), "((a + (b * c)) < d)");

        let mut parser = Parser::new(lex("a < b + c {").unwrap());
        assert_eq!(parser.parse_condition().unwrap().render_infix(), "((a < b) + c)");
    }
}
