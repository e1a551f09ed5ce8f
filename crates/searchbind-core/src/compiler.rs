//! Search tree compiler — the recursive search-tree-to-predicate translator.
//!
//! [`SearchCompiler::bind`] walks a [`SearchNode`]:
//!
//! - `Term(text)`: look up the input kind's template and specialise it for
//!   the input variable and `text`.
//! - `Not(x)`: negate the compiled operand.
//! - `And(l, r)` / `Or(l, r)`: combine the compiled sides.
//!
//! Any other operator kind is rejected. Operands are compiled before the
//! operator is inspected, and nothing is returned unless the whole tree
//! compiles. Trees deeper than [`SearchNode::MAX_DEPTH`] are refused before
//! any of this happens.

use crate::error::SearchError;
use crate::expr::{Expr, Variable};
use crate::matcher::MatchOptions;
use crate::predicate::Predicate;
use crate::query::{BinaryOperator, OperatorKind, SearchNode, UnaryOperator};
use crate::registry::TemplateRegistry;
use crate::subst;
use crate::types::{Record, RecordKind};
use std::fmt;

/// A compiled search body together with the variable it is written over.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Lambda {
    param: Variable,
    body: Expr,
}

impl Lambda {
    pub fn param(&self) -> &Variable {
        &self.param
    }

    pub fn body(&self) -> &Expr {
        &self.body
    }

    pub fn kind(&self) -> RecordKind {
        self.param.kind
    }
}

impl fmt::Display for Lambda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} => {}", self.param, self.param.kind, self.body)
    }
}

/// Compiles search trees against a frozen [`TemplateRegistry`].
#[derive(Debug, Clone, Copy)]
pub struct SearchCompiler<'r> {
    registry: &'r TemplateRegistry,
    options: MatchOptions,
}

impl<'r> SearchCompiler<'r> {
    pub fn new(registry: &'r TemplateRegistry) -> Self {
        Self::with_options(registry, MatchOptions::default())
    }

    pub fn with_options(registry: &'r TemplateRegistry, options: MatchOptions) -> Self {
        Self { registry, options }
    }

    pub fn registry(&self) -> &'r TemplateRegistry {
        self.registry
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Compile `node` into an executable predicate over `T`.
    pub fn compile<T: Record>(&self, node: &SearchNode) -> Result<Predicate<T>, SearchError> {
        let lambda = self.lambda(T::KIND, node)?;
        Predicate::lower(lambda, &self.options)
    }

    /// Compile `node` into a lambda over a fresh `kind` variable.
    pub fn lambda(&self, kind: RecordKind, node: &SearchNode) -> Result<Lambda, SearchError> {
        let param = Variable::new(0, kind);
        let body = self.bind(node, &param)?;
        tracing::debug!(kind = %kind, search = %node, "compiled search");
        Ok(Lambda { param, body })
    }

    /// Compile `node` against `input`, returning a closed boolean expression.
    pub fn bind(&self, node: &SearchNode, input: &Variable) -> Result<Expr, SearchError> {
        let depth = node.depth();
        if depth > SearchNode::MAX_DEPTH {
            return Err(SearchError::TooDeep {
                depth,
                limit: SearchNode::MAX_DEPTH,
            });
        }
        self.bind_node(node, input)
    }

    fn bind_node(&self, node: &SearchNode, input: &Variable) -> Result<Expr, SearchError> {
        match node {
            SearchNode::Term { text } => {
                let template = self.registry.lookup(input.kind)?;
                tracing::trace!(kind = %input.kind, text = %text, "binding search term");
                Ok(subst::specialize(template, input, text))
            }
            SearchNode::Unary { op, operand } => {
                let inner = self.bind_node(operand, input)?;
                match op {
                    UnaryOperator::Not => Ok(!inner),
                    other => Err(SearchError::UnsupportedOperator(OperatorKind::Unary(*other))),
                }
            }
            SearchNode::Binary { op, left, right } => {
                let lhs = self.bind_node(left, input)?;
                let rhs = self.bind_node(right, input)?;
                match op {
                    BinaryOperator::And => Ok(lhs.and(rhs)),
                    BinaryOperator::Or => Ok(lhs.or(rhs)),
                    other => Err(SearchError::UnsupportedOperator(OperatorKind::Binary(*other))),
                }
            }
        }
    }
}
