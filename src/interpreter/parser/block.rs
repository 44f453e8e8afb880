use crate::{
    ast::Node,
    interpreter::parser::core::{ParseResult, Parser},
};

impl Parser {
    /// Parses a `{ ... }` block into a [`Node::BracedBlock`].
    ///
    /// The block must hold at least one statement and is closed by `}`.
    ///
    /// The rule is: `braced_block := "{" statement+ "}"`
    ///
    /// # Errors
    /// Returns `UnexpectedToken` if the opening brace is missing, if the
    /// block is empty, or at `End` if the block is never closed.
    pub(in crate::interpreter::parser) fn parse_braced_block(&mut self) -> ParseResult<Node> {
        self.expect_operator("{")?;

        let mut statements = vec![self.parse_statement()?];
        while !self.current().is_operator("}") {
            if self.at_end() {
                return Err(self.unexpected());
            }
            statements.push(self.parse_statement()?);
        }
        self.advance();

        Ok(Node::BracedBlock(Box::new(Node::Block(statements))))
    }
}
