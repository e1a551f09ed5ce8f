//! Error types for searchbind-core.
//!
//! [`SearchError`] is what a caller sees when a search cannot be compiled.
//! [`TemplateError`] describes a badly authored template; it only surfaces
//! while the registry is being built and should abort start-up.

use crate::expr::{ExprType, Placeholder};
use crate::query::OperatorKind;
use crate::types::RecordKind;
use thiserror::Error;

/// Request-level compilation failures. Never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("search is not supported for record type {0}")]
    UnsupportedType(RecordKind),

    #[error("unsupported search operator: {0}")]
    UnsupportedOperator(OperatorKind),

    #[error("search term {text:?} cannot be matched: {reason}")]
    InvalidTerm { text: String, reason: String },

    #[error("search tree is {depth} levels deep; at most {limit} are supported")]
    TooDeep { depth: usize, limit: usize },
}

/// Template authoring defects, reported at registration time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("{kind} has no text field named {field:?}")]
    UnknownField { kind: RecordKind, field: String },

    #[error("{kind} template: expected {expected} but found {found} in `{expr}`")]
    TypeMismatch {
        kind: RecordKind,
        expected: ExprType,
        found: ExprType,
        expr: String,
    },

    #[error("{kind} template never references {placeholder}")]
    MissingPlaceholder {
        kind: RecordKind,
        placeholder: Placeholder,
    },

    #[error("{kind} template references a {found} record")]
    ForeignRecord { kind: RecordKind, found: RecordKind },

    #[error("{kind} template contains a bound variable")]
    BoundVariable { kind: RecordKind },

    #[error("{0} template has no fields to search")]
    NoFields(RecordKind),

    #[error("a template for {0} is already registered")]
    Duplicate(RecordKind),
}
