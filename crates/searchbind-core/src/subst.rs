//! Parameter substitution — specialise a template for one input and one text.
//!
//! Two independent rewrites:
//!
//! 1. [`retarget_input`] replaces the record placeholder of the input's kind
//!    with the input variable.
//! 2. [`bind_text`] replaces the text placeholder with a literal.
//!
//! Both build a fresh tree. They target disjoint placeholders, so their order
//! does not matter. [`specialize`] runs both and checks that each one found
//! something to replace.

use crate::expr::{Expr, Placeholder, Variable};
use crate::template::Template;
use std::sync::Arc;

/// Replace every record placeholder whose declared kind is `input.kind` with
/// `input`. Returns the new tree and the number of replacements.
pub fn retarget_input(body: &Expr, input: &Variable) -> (Expr, usize) {
    let mut hits = 0;
    let rewritten = body.rewrite(&mut |node| match node {
        Expr::Placeholder(Placeholder::Record(kind)) if *kind == input.kind => {
            hits += 1;
            Some(Expr::Variable(*input))
        }
        _ => None,
    });
    (rewritten, hits)
}

/// Replace every text placeholder with the literal `text`. Returns the new
/// tree and the number of replacements.
pub fn bind_text(body: &Expr, text: &str) -> (Expr, usize) {
    let literal: Arc<str> = Arc::from(text);
    let mut hits = 0;
    let rewritten = body.rewrite(&mut |node| match node {
        Expr::Placeholder(Placeholder::Text) => {
            hits += 1;
            Some(Expr::Literal(Arc::clone(&literal)))
        }
        _ => None,
    });
    (rewritten, hits)
}

/// Bind `template` to `input` and `text`, producing a closed boolean
/// expression.
///
/// # Panics
///
/// If either placeholder is absent from the template or the result is not
/// closed. [`Template::new`] rules both out, so a panic here means a template
/// bypassed validation.
pub fn specialize(template: &Template, input: &Variable, text: &str) -> Expr {
    assert_eq!(
        template.kind(),
        input.kind,
        "template for {} bound to a {} input",
        template.kind(),
        input.kind
    );

    let (retargeted, inputs) = retarget_input(template.body(), input);
    assert!(
        inputs > 0,
        "template `{template}` has no {} placeholder",
        template.record_placeholder()
    );

    let (bound, texts) = bind_text(&retargeted, text);
    assert!(
        texts > 0,
        "template `{template}` has no {} placeholder",
        Placeholder::Text
    );

    assert!(bound.is_closed(), "specialised template `{bound}` still has placeholders");
    bound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RecordKind;
    use pretty_assertions::assert_eq;

    fn comment_template() -> Template {
        Template::any_field_contains(RecordKind::Comment, &["Title", "Text"]).unwrap()
    }

    #[test]
    fn retarget_matches_by_kind() {
        let body = Expr::record(RecordKind::Blog)
            .field("Name")
            .contains(Expr::text());
        let blog_var = Variable::new(7, RecordKind::Blog);
        let (out, hits) = retarget_input(&body, &blog_var);
        assert_eq!(hits, 1);
        assert_eq!(out.to_string(), "$7.Name contains @text");

        let comment_var = Variable::new(7, RecordKind::Comment);
        let (untouched, hits) = retarget_input(&body, &comment_var);
        assert_eq!(hits, 0);
        assert_eq!(untouched, body);
    }

    #[test]
    fn bind_text_replaces_every_occurrence() {
        let (out, hits) = bind_text(comment_template().body(), "rust");
        assert_eq!(hits, 2);
        assert_eq!(
            out.to_string(),
            r#"(@Comment.Title contains "rust" or @Comment.Text contains "rust")"#
        );
    }

    #[test]
    fn passes_commute() {
        let template = comment_template();
        let input = Variable::new(0, RecordKind::Comment);
        let (a, _) = retarget_input(&bind_text(template.body(), "x").0, &input);
        let (b, _) = bind_text(&retarget_input(template.body(), &input).0, "x");
        assert_eq!(a, b);
    }

    #[test]
    fn specialize_closes_template_and_keeps_it_reusable() {
        let template = comment_template();
        let before = template.clone();
        let input = Variable::new(0, RecordKind::Comment);

        let first = specialize(&template, &input, "one");
        let second = specialize(&template, &input, "two");

        assert!(first.is_closed());
        assert_eq!(
            second.to_string(),
            r#"($0.Title contains "two" or $0.Text contains "two")"#
        );
        assert_eq!(template, before);
    }

    #[test]
    #[should_panic(expected = "bound to a")]
    fn specialize_rejects_mismatched_input() {
        specialize(&comment_template(), &Variable::new(0, RecordKind::Blog), "x");
    }
}
