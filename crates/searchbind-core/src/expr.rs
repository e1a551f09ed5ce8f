//! Template expression language.
//!
//! A template is authored against two placeholders: a typed record
//! placeholder and a text placeholder. Substitution (see [`crate::subst`])
//! turns those into a bound [`Variable`] and a [`Expr::Literal`]; nothing
//! else in the tree changes.

use crate::error::TemplateError;
use crate::types::RecordKind;
use std::fmt;
use std::ops::Not;
use std::sync::Arc;

/// Identifier of a bound input variable.
pub type VarId = u32;

/// A structural marker inside a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// Stands for the record under test. Matched by its declared kind.
    Record(RecordKind),
    /// Stands for the search text.
    Text,
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placeholder::Record(kind) => write!(f, "@{kind}"),
            Placeholder::Text => f.write_str("@text"),
        }
    }
}

/// A concrete input variable the compiler threads through a search tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Variable {
    pub id: VarId,
    pub kind: RecordKind,
}

impl Variable {
    pub fn new(id: VarId, kind: RecordKind) -> Self {
        Self { id, kind }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.id)
    }
}

/// Static type of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprType {
    Bool,
    Text,
    Record(RecordKind),
}

impl fmt::Display for ExprType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprType::Bool => f.write_str("bool"),
            ExprType::Text => f.write_str("text"),
            ExprType::Record(kind) => write!(f, "record {kind}"),
        }
    }
}

/// A node of a template or compiled predicate body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Placeholder(Placeholder),
    Variable(Variable),
    Literal(Arc<str>),
    Field { target: Box<Expr>, name: Arc<str> },
    Contains { haystack: Box<Expr>, needle: Box<Expr> },
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
}

impl Expr {
    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// The record placeholder for `kind`.
    pub fn record(kind: RecordKind) -> Self {
        Expr::Placeholder(Placeholder::Record(kind))
    }

    /// The search-text placeholder.
    pub fn text() -> Self {
        Expr::Placeholder(Placeholder::Text)
    }

    pub fn literal(text: impl Into<Arc<str>>) -> Self {
        Expr::Literal(text.into())
    }

    pub fn variable(var: Variable) -> Self {
        Expr::Variable(var)
    }

    /// Text field access on a record-typed expression.
    pub fn field(self, name: impl Into<Arc<str>>) -> Self {
        Expr::Field {
            target: Box::new(self),
            name: name.into(),
        }
    }

    pub fn contains(self, needle: Expr) -> Self {
        Expr::Contains {
            haystack: Box::new(self),
            needle: Box::new(needle),
        }
    }

    pub fn and(self, other: Expr) -> Self {
        Expr::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: Expr) -> Self {
        Expr::Or(Box::new(self), Box::new(other))
    }

    // -----------------------------------------------------------------------
    // Traversal
    // -----------------------------------------------------------------------

    /// Direct children, left to right.
    pub fn children(&self) -> Vec<&Expr> {
        match self {
            Expr::Placeholder(_) | Expr::Variable(_) | Expr::Literal(_) => Vec::new(),
            Expr::Field { target, .. } => vec![target],
            Expr::Contains { haystack, needle } => vec![haystack, needle],
            Expr::Not(inner) => vec![inner],
            Expr::And(l, r) | Expr::Or(l, r) => vec![l, r],
        }
    }

    /// Build a new tree, replacing every node for which `f` returns `Some`.
    ///
    /// `f` sees each node before its children; a replaced node is not
    /// descended into. `self` is left untouched.
    pub fn rewrite<F>(&self, f: &mut F) -> Expr
    where
        F: FnMut(&Expr) -> Option<Expr>,
    {
        if let Some(replacement) = f(self) {
            return replacement;
        }
        match self {
            Expr::Placeholder(_) | Expr::Variable(_) | Expr::Literal(_) => self.clone(),
            Expr::Field { target, name } => Expr::Field {
                target: Box::new(target.rewrite(f)),
                name: Arc::clone(name),
            },
            Expr::Contains { haystack, needle } => Expr::Contains {
                haystack: Box::new(haystack.rewrite(f)),
                needle: Box::new(needle.rewrite(f)),
            },
            Expr::Not(inner) => Expr::Not(Box::new(inner.rewrite(f))),
            Expr::And(l, r) => Expr::And(Box::new(l.rewrite(f)), Box::new(r.rewrite(f))),
            Expr::Or(l, r) => Expr::Or(Box::new(l.rewrite(f)), Box::new(r.rewrite(f))),
        }
    }

    /// Count the nodes (including `self`) satisfying `pred`.
    pub fn count(&self, pred: &impl Fn(&Expr) -> bool) -> usize {
        let here = usize::from(pred(self));
        here + self.children().into_iter().map(|c| c.count(pred)).sum::<usize>()
    }

    /// Whether the tree contains `placeholder`.
    pub fn mentions(&self, placeholder: Placeholder) -> bool {
        self.count(&|e| matches!(e, Expr::Placeholder(p) if *p == placeholder)) > 0
    }

    /// True when no placeholder is left in the tree.
    pub fn is_closed(&self) -> bool {
        self.count(&|e| matches!(e, Expr::Placeholder(_))) == 0
    }

    // -----------------------------------------------------------------------
    // Type checking
    // -----------------------------------------------------------------------

    /// Infer the type of this expression. `kind` names the template the
    /// expression belongs to and only decorates errors.
    pub fn infer(&self, kind: RecordKind) -> Result<ExprType, TemplateError> {
        let expect = |e: &Expr, expected: ExprType| -> Result<(), TemplateError> {
            let found = e.infer(kind)?;
            if found == expected {
                Ok(())
            } else {
                Err(TemplateError::TypeMismatch {
                    kind,
                    expected,
                    found,
                    expr: e.to_string(),
                })
            }
        };

        match self {
            Expr::Placeholder(Placeholder::Record(k)) => Ok(ExprType::Record(*k)),
            Expr::Placeholder(Placeholder::Text) => Ok(ExprType::Text),
            Expr::Variable(var) => Ok(ExprType::Record(var.kind)),
            Expr::Literal(_) => Ok(ExprType::Text),
            Expr::Field { target, name } => match target.infer(kind)? {
                ExprType::Record(owner) if owner.has_text_field(name) => Ok(ExprType::Text),
                ExprType::Record(owner) => Err(TemplateError::UnknownField {
                    kind: owner,
                    field: name.to_string(),
                }),
                found => Err(TemplateError::TypeMismatch {
                    kind,
                    expected: ExprType::Record(kind),
                    found,
                    expr: target.to_string(),
                }),
            },
            Expr::Contains { haystack, needle } => {
                expect(haystack, ExprType::Text)?;
                expect(needle, ExprType::Text)?;
                Ok(ExprType::Bool)
            }
            Expr::Not(inner) => {
                expect(inner, ExprType::Bool)?;
                Ok(ExprType::Bool)
            }
            Expr::And(l, r) | Expr::Or(l, r) => {
                expect(l, ExprType::Bool)?;
                expect(r, ExprType::Bool)?;
                Ok(ExprType::Bool)
            }
        }
    }
}

impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        Expr::Not(Box::new(self))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Placeholder(p) => write!(f, "{p}"),
            Expr::Variable(v) => write!(f, "{v}"),
            Expr::Literal(text) => write!(f, "{text:?}"),
            Expr::Field { target, name } => write!(f, "{target}.{name}"),
            Expr::Contains { haystack, needle } => write!(f, "{haystack} contains {needle}"),
            Expr::Not(inner) => write!(f, "not ({inner})"),
            Expr::And(l, r) => write!(f, "({l} and {r})"),
            Expr::Or(l, r) => write!(f, "({l} or {r})"),
        }
    }
}
