//! Static corpora used across harnesses.

use searchbind::{Blog, BlogPost, Comment};

use crate::common::builders::{blog, comment, post};

/// A small dataset in the JSON layout `Dataset::load` reads.
pub const DATASET_JSON: &str = r#"{
    "Users": [
        { "Id": "Me", "Name": "Me", "UserType": "Admin", "Score": 0.0, "UserProfileType": "Advanced" }
    ],
    "Blogs": [
        { "Id": "b1", "Name": "Cats and Dogs", "UserId": "Me" },
        { "Id": "b2", "Name": "Fish", "UserId": "Me" },
        { "Id": "b3", "Name": "Dogs only", "UserId": "Me" }
    ],
    "BlogPosts": [
        { "Id": "p1", "Name": "none", "Content": "has x here", "Likes": 3,
          "Date": "2024-01-15T10:00:00Z", "BlogId": "b1" },
        { "Id": "p2", "Name": "Rust tips", "Content": "borrow checker", "Likes": 10,
          "AgeRestriction": 12, "Date": "2024-02-01T08:30:00Z", "BlogId": "b1" }
    ],
    "Comments": [
        { "Id": "c1", "Title": "Nice", "Text": "I like cats", "BlogPostId": "p1", "UserId": "Me", "Mood": "Happy" },
        { "Id": "c2", "Title": "Meh", "Text": "prefer fish", "BlogPostId": "p1" }
    ]
}"#;

/// Blog names spanning case, overlap and non-ASCII text.
pub const BLOG_NAMES: &[&str] = &[
    "Cats and Dogs",
    "Fish",
    "a and b",
    "a only",
    "b only",
    "",
    "CATS",
    "Straße und Fluss",
    "bobcats & co",
];

pub fn blog_corpus() -> Vec<Blog> {
    BLOG_NAMES.iter().map(|name| blog(name)).collect()
}

pub fn post_corpus() -> Vec<BlogPost> {
    vec![
        post("none", "has x here"),
        post("x marks", "nothing"),
        post("plain", "plain"),
        post("Cats", "and Dogs"),
    ]
}

pub fn comment_corpus() -> Vec<Comment> {
    vec![
        comment("Nice", "I like cats"),
        comment("Meh", "prefer fish"),
        comment("cats!", ""),
    ]
}
