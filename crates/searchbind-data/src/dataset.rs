//! In-memory record collections.
//!
//! The JSON layout uses the entity-set names as top-level keys:
//!
//! ```json
//! { "Users": [...], "Blogs": [...], "BlogPosts": [...], "Comments": [...] }
//! ```
//!
//! Every key is optional.

use crate::error::DataError;
use searchbind_core::{Blog, BlogPost, Comment, Predicate, Record, User};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Dataset {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub blogs: Vec<Blog>,
    #[serde(default)]
    pub blog_posts: Vec<BlogPost>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// A record type stored as one collection of a [`Dataset`].
pub trait Table: Record + Sized {
    fn table(dataset: &Dataset) -> &[Self];
}

impl Table for User {
    fn table(dataset: &Dataset) -> &[Self] {
        &dataset.users
    }
}

impl Table for Blog {
    fn table(dataset: &Dataset) -> &[Self] {
        &dataset.blogs
    }
}

impl Table for BlogPost {
    fn table(dataset: &Dataset) -> &[Self] {
        &dataset.blog_posts
    }
}

impl Table for Comment {
    fn table(dataset: &Dataset) -> &[Self] {
        &dataset.comments
    }
}

impl Dataset {
    pub fn from_json_str(json: &str) -> Result<Self, DataError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, DataError> {
        let raw = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json_str(&raw)?;
        tracing::debug!(
            path = %path.display(),
            records = dataset.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// The collection holding records of type `T`.
    pub fn records<T: Table>(&self) -> &[T] {
        T::table(self)
    }

    /// Records of type `T` accepted by `predicate`, in stored order.
    pub fn search<T: Table>(&self, predicate: &Predicate<T>) -> Vec<&T> {
        let matches = predicate.filter(self.records::<T>());
        tracing::debug!(
            kind = %T::KIND,
            scanned = self.records::<T>().len(),
            matched = matches.len(),
            "search executed"
        );
        matches
    }

    /// Total number of records across all collections.
    pub fn len(&self) -> usize {
        self.users.len() + self.blogs.len() + self.blog_posts.len() + self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
