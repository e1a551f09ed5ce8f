//! Search syntax tree — the parsed form of a free-text boolean search.
//!
//! Trees arrive from an external parser, typically as JSON:
//!
//! ```json
//! { "kind": "binary", "op": "and",
//!   "left":  { "kind": "term", "text": "cats" },
//!   "right": { "kind": "unary", "op": "not", "operand": { "kind": "term", "text": "dogs" } } }
//! ```
//!
//! The operator enums list every kind a query parser may emit. Only `Not`,
//! `And` and `Or` have a meaning in a free-text search; the compiler rejects
//! the rest.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unary operator kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnaryOperator {
    Not,
    Negate,
}

/// Binary operator kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOperator {
    Or,
    And,
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Has,
}

/// Either operator kind, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    Unary(UnaryOperator),
    Binary(BinaryOperator),
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperatorKind::Unary(op) => write!(f, "{op:?}"),
            OperatorKind::Binary(op) => write!(f, "{op:?}"),
        }
    }
}

/// A node of the search syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchNode {
    /// Free text matched against a whole record.
    Term { text: String },
    Unary {
        op: UnaryOperator,
        operand: Box<SearchNode>,
    },
    Binary {
        op: BinaryOperator,
        left: Box<SearchNode>,
        right: Box<SearchNode>,
    },
}

impl SearchNode {
    pub fn term(text: impl Into<String>) -> Self {
        SearchNode::Term { text: text.into() }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(operand: SearchNode) -> Self {
        SearchNode::unary(UnaryOperator::Not, operand)
    }

    pub fn and(left: SearchNode, right: SearchNode) -> Self {
        SearchNode::binary(BinaryOperator::And, left, right)
    }

    pub fn or(left: SearchNode, right: SearchNode) -> Self {
        SearchNode::binary(BinaryOperator::Or, left, right)
    }

    pub fn unary(op: UnaryOperator, operand: SearchNode) -> Self {
        SearchNode::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: BinaryOperator, left: SearchNode, right: SearchNode) -> Self {
        SearchNode::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Deepest tree the compiler accepts.
    pub const MAX_DEPTH: usize = 100;

    /// Parse a tree from its JSON form.
    ///
    /// serde_json stops at 127 levels of nesting, so every tree up to
    /// [`SearchNode::MAX_DEPTH`] can be read. Deeper documents fail here with
    /// a recursion-limit error.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Number of term leaves in the tree.
    pub fn term_count(&self) -> usize {
        match self {
            SearchNode::Term { .. } => 1,
            SearchNode::Unary { operand, .. } => operand.term_count(),
            SearchNode::Binary { left, right, .. } => left.term_count() + right.term_count(),
        }
    }

    /// Length of the longest root-to-leaf path; a lone term has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(&SearchNode, usize)> = vec![(self, 1)];
        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            match node {
                SearchNode::Term { .. } => {}
                SearchNode::Unary { operand, .. } => pending.push((&**operand, depth + 1)),
                SearchNode::Binary { left, right, .. } => {
                    pending.push((&**left, depth + 1));
                    pending.push((&**right, depth + 1));
                }
            }
        }
        deepest
    }
}

impl fmt::Display for SearchNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchNode::Term { text } => write!(f, "{text:?}"),
            SearchNode::Unary {
                op: UnaryOperator::Not,
                operand,
            } => write!(f, "NOT {operand}"),
            SearchNode::Unary { op, operand } => write!(f, "{op:?}({operand})"),
            SearchNode::Binary { op, left, right } => {
                let op = match op {
                    BinaryOperator::And => "AND".to_string(),
                    BinaryOperator::Or => "OR".to_string(),
                    other => format!("{other:?}"),
                };
                write!(f, "({left} {op} {right})")
            }
        }
    }
}
