//! Domain-specific assertion macros for searchbind harnesses.
//!
//! These add context-rich failure messages that name the search and the
//! record that disagreed.

/// Assert that a compiled predicate accepts every listed record.
///
/// ```rust
/// assert_accepts!(predicate, blog("Cats and Dogs"));
/// ```
#[macro_export]
macro_rules! assert_accepts {
    ($predicate:expr, $($record:expr),+ $(,)?) => {{
        let predicate = &$predicate;
        $(
            let record = $record;
            if !predicate.matches(&record) {
                panic!(
                    "assert_accepts! failed:\n  predicate: {}\n  record:    {:?}",
                    predicate, record
                );
            }
        )+
    }};
}

/// Assert that a compiled predicate rejects every listed record.
#[macro_export]
macro_rules! assert_rejects {
    ($predicate:expr, $($record:expr),+ $(,)?) => {{
        let predicate = &$predicate;
        $(
            let record = $record;
            if predicate.matches(&record) {
                panic!(
                    "assert_rejects! failed:\n  predicate: {}\n  record:    {:?}",
                    predicate, record
                );
            }
        )+
    }};
}

/// Assert that two predicates agree on every record of a corpus.
pub fn assert_agree<T: searchbind::Record + std::fmt::Debug>(
    left: &searchbind::Predicate<T>,
    right: &searchbind::Predicate<T>,
    corpus: &[T],
) {
    for record in corpus {
        assert_eq!(
            left.matches(record),
            right.matches(record),
            "predicates disagree on {record:?}\n  left:  {left}\n  right: {right}"
        );
    }
}
