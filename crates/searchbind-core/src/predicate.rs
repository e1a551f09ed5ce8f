//! Compiled predicates — a [`Lambda`] lowered into a tree of closures.
//!
//! Lowering resolves every `contains` leaf once: literal terms become a
//! prepared [`TextMatcher`], field accesses become a field name read through
//! [`Record::text_field`]. The result holds no mutable state and is shared
//! behind an `Arc`, so clones are cheap and evaluation is thread-safe.

use crate::compiler::Lambda;
use crate::error::SearchError;
use crate::expr::{Expr, Variable};
use crate::matcher::{MatchOptions, TextMatcher};
use crate::types::Record;
use std::fmt;
use std::sync::Arc;

type BoolFn<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// A closed, reusable test `(record) -> bool`.
pub struct Predicate<T> {
    lambda: Lambda,
    eval: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T: Record> Predicate<T> {
    pub(crate) fn lower(lambda: Lambda, options: &MatchOptions) -> Result<Self, SearchError> {
        assert_eq!(
            lambda.kind(),
            T::KIND,
            "lambda over {} lowered for {}",
            lambda.kind(),
            T::KIND
        );
        let eval = lower_bool::<T>(lambda.body(), lambda.param(), options)?;
        Ok(Self {
            lambda,
            eval: Arc::from(eval),
        })
    }

    pub fn matches(&self, record: &T) -> bool {
        (self.eval)(record)
    }

    /// Records satisfying the predicate, in input order.
    pub fn filter<'a>(&self, records: &'a [T]) -> Vec<&'a T> {
        records.iter().filter(|r| self.matches(r)).collect()
    }

    /// The expression this predicate was lowered from.
    pub fn lambda(&self) -> &Lambda {
        &self.lambda
    }
}

impl<T> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self {
            lambda: self.lambda.clone(),
            eval: Arc::clone(&self.eval),
        }
    }
}

impl<T> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("lambda", &self.lambda.to_string())
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lambda)
    }
}

// ---------------------------------------------------------------------------
// Lowering
// ---------------------------------------------------------------------------

/// Where a `contains` operand reads its text from.
enum TextSource {
    Field(Arc<str>),
    Literal(Arc<str>),
}

impl TextSource {
    fn read<'a, T: Record>(&'a self, record: &'a T) -> Option<&'a str> {
        match self {
            TextSource::Field(name) => record.text_field(name),
            TextSource::Literal(text) => Some(&**text),
        }
    }
}

/// # Panics
///
/// On a node that is not boolean. Compiled lambdas are built from validated
/// templates, so this indicates a bug in the compiler.
fn lower_bool<T: Record>(
    expr: &Expr,
    param: &Variable,
    options: &MatchOptions,
) -> Result<BoolFn<T>, SearchError> {
    let lowered: BoolFn<T> = match expr {
        Expr::Not(inner) => {
            let f = lower_bool::<T>(inner, param, options)?;
            Box::new(move |record: &T| !f(record))
        }
        Expr::And(l, r) => {
            let f = lower_bool::<T>(l, param, options)?;
            let g = lower_bool::<T>(r, param, options)?;
            Box::new(move |record: &T| f(record) && g(record))
        }
        Expr::Or(l, r) => {
            let f = lower_bool::<T>(l, param, options)?;
            let g = lower_bool::<T>(r, param, options)?;
            Box::new(move |record: &T| f(record) || g(record))
        }
        Expr::Contains { haystack, needle } => {
            let haystack = text_source(haystack, param);
            match text_source(needle, param) {
                TextSource::Literal(term) => {
                    let matcher = TextMatcher::new(&term, options).map_err(|e| {
                        SearchError::InvalidTerm {
                            text: term.to_string(),
                            reason: e.to_string(),
                        }
                    })?;
                    Box::new(move |record: &T| {
                        haystack.read(record).is_some_and(|h| matcher.is_match(h))
                    })
                }
                needle => {
                    let options = *options;
                    Box::new(move |record: &T| {
                        match (haystack.read(record), needle.read(record)) {
                            (Some(h), Some(n)) => match TextMatcher::new(n, &options) {
                                Ok(matcher) => matcher.is_match(h),
                                // A field value that cannot become a matcher matches nothing.
                                Err(e) => {
                                    tracing::debug!(error = %e, "field value rejected as search needle");
                                    false
                                }
                            },
                            _ => false,
                        }
                    })
                }
            }
        }
        other => panic!("`{other}` is not a boolean expression"),
    };
    Ok(lowered)
}

fn text_source(expr: &Expr, param: &Variable) -> TextSource {
    match expr {
        Expr::Literal(text) => TextSource::Literal(Arc::clone(text)),
        Expr::Field { target, name } if **target == Expr::Variable(*param) => {
            TextSource::Field(Arc::clone(name))
        }
        other => panic!("`{other}` is neither a literal nor a field of {param}"),
    }
}
