//! Start-up seed data: the reference records every fresh dataset contains.
//!
//! Tests mostly build their own records; the seed only provides the owner
//! account and its blog.

use crate::dataset::Dataset;
use searchbind_core::{Blog, User, UserProfileType, UserType};
use uuid::Uuid;

pub const OWNER_ID: &str = "Me";
pub const OWNER_BLOG_NAME: &str = "Owners Blog";

pub fn seed() -> Dataset {
    let owner = User {
        id: OWNER_ID.to_string(),
        name: OWNER_ID.to_string(),
        user_type: UserType::Admin,
        score: 0.0,
        user_profile_type: UserProfileType::Advanced,
    };
    let blog = Blog {
        id: Uuid::new_v4().to_string(),
        name: OWNER_BLOG_NAME.to_string(),
        user_id: owner.id.clone(),
    };

    tracing::debug!(user = %owner.id, blog = %blog.id, "seeded dataset");
    Dataset {
        users: vec![owner],
        blogs: vec![blog],
        ..Dataset::default()
    }
}
