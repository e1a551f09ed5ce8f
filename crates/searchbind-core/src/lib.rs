//! searchbind-core — the search tree compiler.
//!
//! This crate exposes the three compilation layers as public modules, plus the
//! record types and the configuration shared by every caller.
//!
//! # Architecture
//!
//! ```text
//! SearchNode ──► Compiler ──► Lambda ──► Predicate<T>
//!                   │
//!                   ├──► Registry  (record kind → Template)
//!                   └──► Subst     (Template + input + text → closed Expr)
//! ```
//!
//! The registry is built once at start-up and is read-only afterwards. The
//! compiler and the substitution passes are pure functions over their inputs,
//! so compilation and evaluation may run on any number of threads at once.

pub mod compiler;
pub mod config;
pub mod error;
pub mod expr;
pub mod matcher;
pub mod predicate;
pub mod query;
pub mod registry;
pub mod subst;
pub mod template;
pub mod types;

pub use compiler::{Lambda, SearchCompiler};
pub use error::{SearchError, TemplateError};
pub use expr::{Expr, ExprType, Placeholder, Variable};
pub use matcher::{MatchMode, MatchOptions, TextMatcher};
pub use predicate::Predicate;
pub use query::{BinaryOperator, OperatorKind, SearchNode, UnaryOperator};
pub use registry::{RegistryBuilder, TemplateRegistry};
pub use template::Template;
pub use types::{Blog, BlogPost, Comment, Mood, Record, RecordKind, User, UserProfileType, UserType};
