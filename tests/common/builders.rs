//! Test builders — ergonomic constructors for records, trees and registries.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use chrono::{TimeZone, Utc};
use searchbind::{
    Blog, BlogPost, Comment, RecordKind, SearchCompiler, SearchNode, Template, TemplateRegistry,
};

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

pub fn blog(name: &str) -> Blog {
    Blog {
        id: format!("blog-{}", name.len()),
        name: name.to_string(),
        user_id: "Me".to_string(),
    }
}

pub fn post(name: &str, content: &str) -> BlogPost {
    BlogPost {
        id: format!("post-{}", name.len()),
        name: name.to_string(),
        content: content.to_string(),
        likes: 0,
        age_restriction: None,
        date: Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
        blog_id: "blog-1".to_string(),
    }
}

pub fn comment(title: &str, text: &str) -> Comment {
    Comment {
        id: format!("comment-{}", title.len()),
        title: title.to_string(),
        text: text.to_string(),
        blog_post_id: "post-1".to_string(),
        user_id: None,
        mood: None,
    }
}

// ---------------------------------------------------------------------------
// Search trees
// ---------------------------------------------------------------------------

pub fn term(text: &str) -> SearchNode {
    SearchNode::term(text)
}

pub fn not(node: SearchNode) -> SearchNode {
    SearchNode::not(node)
}

pub fn and(left: SearchNode, right: SearchNode) -> SearchNode {
    SearchNode::and(left, right)
}

pub fn or(left: SearchNode, right: SearchNode) -> SearchNode {
    SearchNode::or(left, right)
}

// ---------------------------------------------------------------------------
// Registries
// ---------------------------------------------------------------------------

/// A registry that knows only `Blog` (Name) and `BlogPost` (Name, Content).
pub fn minimal_registry() -> TemplateRegistry {
    TemplateRegistry::builder()
        .register(Template::any_field_contains(RecordKind::Blog, &["Name"]).unwrap())
        .unwrap()
        .register(Template::any_field_contains(RecordKind::BlogPost, &["Name", "Content"]).unwrap())
        .unwrap()
        .build()
}

/// Compile `node` for `T` against the reference registry with default options.
pub fn compile<T: searchbind::Record>(node: &SearchNode) -> searchbind::Predicate<T> {
    let registry = TemplateRegistry::reference();
    SearchCompiler::new(&registry)
        .compile::<T>(node)
        .unwrap_or_else(|e| panic!("{node} failed to compile: {e}"))
}
