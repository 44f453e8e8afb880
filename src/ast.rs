use std::fmt::{self, Write as _};

use crate::util::num::format_number;

/// Number of spaces each nesting level of a block is indented by when a
/// tree is rendered.
pub const INDENT_WIDTH: usize = 4;

/// An abstract syntax tree (AST) node.
///
/// `Node` covers expressions and statements alike; a program is a sequence of
/// top-level nodes. Every node exclusively owns its children, and nodes are
/// never mutated after the parser builds them.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A numeric literal.
    Number(f64),
    /// `true` or `false`.
    Boolean(bool),
    /// A read of a scalar variable.
    Variable(String),
    /// `name = value`.
    Assignment {
        /// The variable being bound.
        name:  String,
        /// The bound expression.
        value: Box<Self>,
    },
    /// An infix operator application.
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// An ordered list of statements; evaluates to the last one.
    Block(Vec<Self>),
    /// A `{ ... }` block. Always wraps a [`Node::Block`].
    BracedBlock(Box<Self>),
    /// `if condition { ... }` with an optional `else`.
    If {
        /// The tested expression.
        condition:  Box<Self>,
        /// The braced block run when the condition is truthy.
        then_block: Box<Self>,
        /// A [`Node::Else`], if present.
        else_node:  Option<Box<Self>>,
    },
    /// The `else` clause of an `if`: either a chained `if` or a braced block.
    Else {
        /// A chained `else if`.
        nested_if: Option<Box<Self>>,
        /// A plain `else { ... }`.
        block:     Option<Box<Self>>,
    },
    /// `while condition { ... }`.
    While {
        /// The tested expression.
        condition: Box<Self>,
        /// The loop body.
        block:     Box<Self>,
    },
    /// `print expr;`
    Print(Box<Self>),
    /// `def name(params) { ... }`
    FunctionDef(FunctionDef),
    /// `return;` or `return expr;`
    Return(Option<Box<Self>>),
    /// `name(args)`
    FunctionCall {
        /// The called function.
        name: String,
        /// Argument expressions, in order.
        args: Vec<Self>,
    },
    /// `[e1, e2, ...]`
    ArrayLiteral(Vec<Self>),
    /// `name[index]`
    ArrayLookup {
        /// The array being read.
        name:  String,
        /// The index expression.
        index: Box<Self>,
    },
    /// `name[index] = value`
    ArrayAssign {
        /// The array being written.
        name:  String,
        /// The index expression.
        index: Box<Self>,
        /// The stored expression.
        value: Box<Self>,
    },
}

/// A user-defined function.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in declaration order.
    pub params: Vec<String>,
    /// The body, a [`Node::BracedBlock`].
    pub body:   Box<Node>,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Floating point remainder (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`&`)
    And,
    /// Logical exclusive or (`^`)
    Xor,
    /// Logical or (`|`)
    Or,
    /// An operator token no table knows. Only the condition grammar of `if`
    /// and `while` can produce one, and evaluating it fails.
    Unrecognized(char),
}

impl BinaryOperator {
    /// Maps an operator symbol to its operator.
    ///
    /// ## Example
    /// ```
    /// use scrypt::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol("<="), Some(BinaryOperator::LessEqual));
    /// assert_eq!(BinaryOperator::from_symbol("{"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let op = match symbol {
            "+" => Self::Add,
            "-" => Self::Sub,
            "*" => Self::Mul,
            "/" => Self::Div,
            "%" => Self::Mod,
            "<" => Self::Less,
            ">" => Self::Greater,
            "<=" => Self::LessEqual,
            ">=" => Self::GreaterEqual,
            "==" => Self::Equal,
            "!=" => Self::NotEqual,
            "&" => Self::And,
            "^" => Self::Xor,
            "|" => Self::Or,
            _ => return None,
        };
        Some(op)
    }

    /// `+ - * / %`
    #[must_use]
    pub const fn is_arithmetic(self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Mod)
    }

    /// `< > <= >= == !=`
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(self,
                 Self::Less
                 | Self::Greater
                 | Self::LessEqual
                 | Self::GreaterEqual
                 | Self::Equal
                 | Self::NotEqual)
    }

    /// `& ^ |`
    #[must_use]
    pub const fn is_logical(self) -> bool {
        matches!(self, Self::And | Self::Xor | Self::Or)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::And => "&",
            Self::Xor => "^",
            Self::Or => "|",
            Self::Unrecognized(symbol) => return write!(f, "{symbol}"),
        };
        write!(f, "{operator}")
    }
}

impl Node {
    /// Shorthand for building a [`Node::BinaryOp`].
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// Tests whether the node produces a truth value rather than a number.
    ///
    /// Boolean literals, comparisons and logical operators are boolean
    /// shaped, and so is an assignment of one of those. Drivers and `print`
    /// use this to show `true`/`false` instead of `1`/`0`.
    #[must_use]
    pub fn is_boolean_shaped(&self) -> bool {
        match self {
            Self::Boolean(_) => true,
            Self::BinaryOp { op, .. } => op.is_comparison() || op.is_logical(),
            Self::Assignment { value, .. } => value.is_boolean_shaped(),
            _ => false,
        }
    }

    /// Renders the node as fully parenthesized infix text.
    ///
    /// ## Example
    /// ```
    /// use scrypt::ast::{BinaryOperator, Node};
    ///
    /// let node = Node::binary(BinaryOperator::Add,
    ///                         Node::Number(1.0),
    ///                         Node::binary(BinaryOperator::Mul, Node::Number(2.0), Node::Number(3.5)));
    ///
    /// assert_eq!(node.render_infix(), "(1 + (2 * 3.5))");
    /// ```
    #[must_use]
    pub fn render_infix(&self) -> String {
        let mut out = String::new();
        self.render(&mut out, 0);
        out
    }

    fn render(&self, out: &mut String, depth: usize) {
        match self {
            Self::Number(value) => out.push_str(&format_number(*value)),
            Self::Boolean(value) => out.push_str(if *value { "true" } else { "false" }),
            Self::Variable(name) => out.push_str(name),
            Self::Assignment { name, value } => {
                let _ = write!(out, "({name} = ");
                value.render(out, depth);
                out.push(')');
            },
            Self::BinaryOp { op, left, right } => {
                out.push('(');
                left.render(out, depth);
                let _ = write!(out, " {op} ");
                right.render(out, depth);
                out.push(')');
            },
            Self::Block(statements) => {
                let inner = indentation(depth + 1);
                for statement in statements {
                    out.push('\n');
                    out.push_str(&inner);
                    statement.render(out, depth + 1);
                }
                out.push('\n');
                out.push_str(&indentation(depth));
                out.push('}');
            },
            Self::BracedBlock(block) => block.render(out, depth),
            Self::If { condition,
                       then_block,
                       else_node, } => {
                out.push_str("if ");
                condition.render(out, depth);
                out.push_str(" {");
                then_block.render(out, depth);
                if let Some(else_node) = else_node {
                    else_node.render(out, depth);
                }
            },
            Self::Else { nested_if, block } => {
                out.push('\n');
                out.push_str(&indentation(depth));
                out.push_str("else ");
                if let Some(nested_if) = nested_if {
                    nested_if.render(out, depth);
                } else if let Some(block) = block {
                    out.push('{');
                    block.render(out, depth);
                }
            },
            Self::While { condition, block } => {
                out.push_str("while ");
                condition.render(out, depth);
                out.push_str(" {");
                block.render(out, depth);
            },
            Self::Print(expr) => {
                out.push_str("print ");
                expr.render(out, depth);
            },
            Self::FunctionDef(def) => {
                let _ = write!(out, "def {}({}) {{", def.name, def.params.join(", "));
                def.body.render(out, depth);
            },
            Self::Return(expr) => {
                out.push_str("return");
                if let Some(expr) = expr {
                    out.push(' ');
                    expr.render(out, depth);
                }
            },
            Self::FunctionCall { name, args } => {
                out.push_str(name);
                render_list(out, args, depth, '(', ')');
            },
            Self::ArrayLiteral(elements) => render_list(out, elements, depth, '[', ']'),
            Self::ArrayLookup { name, index } => {
                let _ = write!(out, "{name}[");
                index.render(out, depth);
                out.push(']');
            },
            Self::ArrayAssign { name, index, value } => {
                let _ = write!(out, "({name}[");
                index.render(out, depth);
                out.push_str("] = ");
                value.render(out, depth);
                out.push(')');
            },
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_infix())
    }
}

/// Renders `node` as fully parenthesized infix text.
///
/// Equivalent to [`Node::render_infix`].
#[must_use]
pub fn render_infix(node: &Node) -> String {
    node.render_infix()
}

fn indentation(depth: usize) -> String {
    " ".repeat(depth * INDENT_WIDTH)
}

fn render_list(out: &mut String, items: &[Node], depth: usize, open: char, close: char) {
    out.push(open);
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        item.render(out, depth);
    }
    out.push(close);
}
