//! Record types for searchbind-core.
//!
//! This module defines the closed set of searchable record kinds
//! ([`RecordKind`]), the [`Record`] trait the compiler evaluates predicates
//! against, and the concrete record structs of the blog model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// RecordKind
// ---------------------------------------------------------------------------

/// The kind of a record. Used as the registry key: one template per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecordKind {
    User,
    Blog,
    BlogPost,
    Comment,
}

/// Type names and entity-set names, lowercased, mapped to their kind.
static KIND_NAMES: phf::Map<&'static str, RecordKind> = phf::phf_map! {
    "user" => RecordKind::User,
    "users" => RecordKind::User,
    "blog" => RecordKind::Blog,
    "blogs" => RecordKind::Blog,
    "blogpost" => RecordKind::BlogPost,
    "blogposts" => RecordKind::BlogPost,
    "comment" => RecordKind::Comment,
    "comments" => RecordKind::Comment,
};

impl RecordKind {
    pub const ALL: [RecordKind; 4] = [
        RecordKind::User,
        RecordKind::Blog,
        RecordKind::BlogPost,
        RecordKind::Comment,
    ];

    /// Canonical type name, as used in templates and error messages.
    pub fn name(self) -> &'static str {
        match self {
            RecordKind::User => "User",
            RecordKind::Blog => "Blog",
            RecordKind::BlogPost => "BlogPost",
            RecordKind::Comment => "Comment",
        }
    }

    /// Names of the text fields a template may reference for this kind.
    pub fn text_fields(self) -> &'static [&'static str] {
        match self {
            RecordKind::User => &["Id", "Name"],
            RecordKind::Blog => &["Id", "Name", "UserId"],
            RecordKind::BlogPost => &["Id", "Name", "Content", "BlogId"],
            RecordKind::Comment => &["Id", "Title", "Text", "BlogPostId", "UserId"],
        }
    }

    /// Resolve a field name case-insensitively to its canonical spelling.
    pub fn canonical_field(self, name: &str) -> Option<&'static str> {
        self.text_fields()
            .iter()
            .copied()
            .find(|field| field.eq_ignore_ascii_case(name))
    }

    /// Whether `name` is exactly one of this kind's text fields.
    pub fn has_text_field(self, name: &str) -> bool {
        self.text_fields().contains(&name)
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known record kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown record type {0:?}")]
pub struct UnknownRecordKind(pub String);

impl FromStr for RecordKind {
    type Err = UnknownRecordKind;

    /// Accepts type names and entity-set names in any case
    /// (`Blog`, `blogs`, `BLOGPOSTS`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KIND_NAMES
            .get(s.trim().to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| UnknownRecordKind(s.to_string()))
    }
}

impl Serialize for RecordKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for RecordKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Record trait
// ---------------------------------------------------------------------------

/// A record a compiled predicate can be evaluated against.
///
/// `text_field` must answer for every name in `KIND.text_fields()`; it returns
/// `None` only when an optional field is unset.
pub trait Record: Send + Sync + 'static {
    const KIND: RecordKind;

    fn id(&self) -> &str;

    fn text_field(&self, name: &str) -> Option<&str>;
}

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserType {
    User,
    Admin,
}

/// Serialised by name; the numeric codes are kept for callers that store them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserProfileType {
    Standard = 10,
    Advanced = 11,
}

/// The mood a user was in when commenting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Happy = 1,
    Sad,
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A user who can create blogs and comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub user_type: UserType,
    pub score: f64,
    pub user_profile_type: UserProfileType,
}

/// A blog that can contain many blog posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Blog {
    pub id: String,
    pub name: String,
    pub user_id: String,
}

/// A blog post which can have many comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BlogPost {
    pub id: String,
    pub name: String,
    pub content: String,
    pub likes: i64,
    #[serde(default)]
    pub age_restriction: Option<i64>,
    pub date: DateTime<Utc>,
    pub blog_id: String,
}

/// A blog post comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Comment {
    pub id: String,
    pub title: String,
    pub text: String,
    pub blog_post_id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub mood: Option<Mood>,
}

impl Record for User {
    const KIND: RecordKind = RecordKind::User;

    fn id(&self) -> &str {
        &self.id
    }

    fn text_field(&self, name: &str) -> Option<&str> {
        match name {
            "Id" => Some(&self.id),
            "Name" => Some(&self.name),
            _ => None,
        }
    }
}

impl Record for Blog {
    const KIND: RecordKind = RecordKind::Blog;

    fn id(&self) -> &str {
        &self.id
    }

    fn text_field(&self, name: &str) -> Option<&str> {
        match name {
            "Id" => Some(&self.id),
            "Name" => Some(&self.name),
            "UserId" => Some(&self.user_id),
            _ => None,
        }
    }
}

impl Record for BlogPost {
    const KIND: RecordKind = RecordKind::BlogPost;

    fn id(&self) -> &str {
        &self.id
    }

    fn text_field(&self, name: &str) -> Option<&str> {
        match name {
            "Id" => Some(&self.id),
            "Name" => Some(&self.name),
            "Content" => Some(&self.content),
            "BlogId" => Some(&self.blog_id),
            _ => None,
        }
    }
}

impl Record for Comment {
    const KIND: RecordKind = RecordKind::Comment;

    fn id(&self) -> &str {
        &self.id
    }

    fn text_field(&self, name: &str) -> Option<&str> {
        match name {
            "Id" => Some(&self.id),
            "Title" => Some(&self.title),
            "Text" => Some(&self.text),
            "BlogPostId" => Some(&self.blog_post_id),
            "UserId" => self.user_id.as_deref(),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
