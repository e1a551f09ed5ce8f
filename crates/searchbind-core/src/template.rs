//! Search templates — "does this record match this text" rules, one per kind.
//!
//! A template is a boolean [`Expr`] over exactly two placeholders: the record
//! placeholder of its own kind and the text placeholder. Templates are
//! validated when constructed, so a [`Template`] value is always specialisable.

use crate::error::TemplateError;
use crate::expr::{Expr, ExprType, Placeholder};
use crate::types::{Record, RecordKind};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Template {
    kind: RecordKind,
    body: Expr,
}

impl Template {
    /// Validate `body` as the template for `kind`.
    pub fn new(kind: RecordKind, body: Expr) -> Result<Self, TemplateError> {
        let mut pending = vec![&body];
        while let Some(node) = pending.pop() {
            match node {
                Expr::Placeholder(Placeholder::Record(found)) if *found != kind => {
                    return Err(TemplateError::ForeignRecord {
                        kind,
                        found: *found,
                    });
                }
                Expr::Variable(_) => return Err(TemplateError::BoundVariable { kind }),
                _ => pending.extend(node.children()),
            }
        }

        let found = body.infer(kind)?;
        if found != ExprType::Bool {
            return Err(TemplateError::TypeMismatch {
                kind,
                expected: ExprType::Bool,
                found,
                expr: body.to_string(),
            });
        }

        for placeholder in [Placeholder::Record(kind), Placeholder::Text] {
            if !body.mentions(placeholder) {
                return Err(TemplateError::MissingPlaceholder { kind, placeholder });
            }
        }

        Ok(Self { kind, body })
    }

    /// Author a template for `T` in code. The closure receives the record
    /// placeholder and the text placeholder.
    ///
    /// ```
    /// use searchbind_core::{Blog, Template};
    ///
    /// let template = Template::build::<Blog>(|blog, text| blog.field("Name").contains(text))?;
    /// assert_eq!(template.to_string(), "Blog: @Blog.Name contains @text");
    /// # Ok::<(), searchbind_core::TemplateError>(())
    /// ```
    pub fn build<T: Record>(f: impl FnOnce(Expr, Expr) -> Expr) -> Result<Self, TemplateError> {
        Self::new(T::KIND, f(Expr::record(T::KIND), Expr::text()))
    }

    /// "Any of `fields` contains the text", OR-ed left to right. Field names
    /// are matched case-insensitively against the kind's text fields.
    pub fn any_field_contains<S: AsRef<str>>(
        kind: RecordKind,
        fields: &[S],
    ) -> Result<Self, TemplateError> {
        let mut body: Option<Expr> = None;
        for field in fields {
            let field = field.as_ref();
            let name = kind
                .canonical_field(field)
                .ok_or_else(|| TemplateError::UnknownField {
                    kind,
                    field: field.to_string(),
                })?;
            let test = Expr::record(kind).field(name).contains(Expr::text());
            body = Some(match body {
                Some(acc) => acc.or(test),
                None => test,
            });
        }
        let body = body.ok_or(TemplateError::NoFields(kind))?;
        Self::new(kind, body)
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn body(&self) -> &Expr {
        &self.body
    }

    /// The placeholder substitution retargets to the input variable.
    pub fn record_placeholder(&self) -> Placeholder {
        Placeholder::Record(self.kind)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Blog, BlogPost};
    use pretty_assertions::assert_eq;

    #[test]
    fn build_and_field_list_agree() {
        let built = Template::build::<BlogPost>(|post, text| {
            post.clone()
                .field("Name")
                .contains(text.clone())
                .or(post.field("Content").contains(text))
        })
        .unwrap();
        let listed = Template::any_field_contains(RecordKind::BlogPost, &["name", "CONTENT"]).unwrap();
        assert_eq!(built, listed);
    }

    #[test]
    fn rejects_empty_field_list() {
        let none: [&str; 0] = [];
        assert_eq!(
            Template::any_field_contains(RecordKind::Blog, &none).unwrap_err(),
            TemplateError::NoFields(RecordKind::Blog)
        );
    }

    #[test]
    fn rejects_unknown_listed_field() {
        assert_eq!(
            Template::any_field_contains(RecordKind::Blog, &["Name", "Body"]).unwrap_err(),
            TemplateError::UnknownField {
                kind: RecordKind::Blog,
                field: "Body".into()
            }
        );
    }

    #[test]
    fn rejects_template_without_text_placeholder() {
        let err = Template::build::<Blog>(|blog, _| {
            blog.field("Name").contains(Expr::literal("fixed"))
        })
        .unwrap_err();
        assert_eq!(
            err,
            TemplateError::MissingPlaceholder {
                kind: RecordKind::Blog,
                placeholder: Placeholder::Text
            }
        );
    }

    #[test]
    fn rejects_template_without_record_placeholder() {
        let err = Template::new(RecordKind::Blog, Expr::literal("a").contains(Expr::text()))
            .unwrap_err();
        assert_eq!(
            err,
            TemplateError::MissingPlaceholder {
                kind: RecordKind::Blog,
                placeholder: Placeholder::Record(RecordKind::Blog)
            }
        );
    }

    #[test]
    fn rejects_placeholder_of_another_kind() {
        let body = Expr::record(RecordKind::Comment)
            .field("Title")
            .contains(Expr::text());
        assert_eq!(
            Template::new(RecordKind::Blog, body).unwrap_err(),
            TemplateError::ForeignRecord {
                kind: RecordKind::Blog,
                found: RecordKind::Comment
            }
        );
    }

    #[test]
    fn rejects_non_boolean_body() {
        let err = Template::new(RecordKind::Blog, Expr::record(RecordKind::Blog).field("Name"))
            .unwrap_err();
        assert!(matches!(
            err,
            TemplateError::TypeMismatch {
                expected: ExprType::Bool,
                found: ExprType::Text,
                ..
            }
        ));
    }
}
