//! Community feed post record.
//!
//! # Responsibility
//! - Define the persisted post shape and its like counter semantics.
//!
//! # Invariants
//! - `likes` only moves up, one step per like action.
//! - `comments` is carried for wire compatibility; no screen writes it.

use crate::model::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author attributed to every locally created post.
pub const DEFAULT_AUTHOR: &str = "Usuário";

/// One persisted community feed post.
///
/// Posts are purely local-device state; the feed is not shared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityPost {
    /// Stable record identity, unique within the collection.
    pub id: Uuid,
    /// Post body, trimmed and non-empty.
    pub content: String,
    pub author: String,
    /// Non-negative like counter.
    pub likes: u32,
    /// Reserved comment thread; always empty today.
    pub comments: Vec<String>,
    /// Creation instant.
    pub timestamp: DateTime<Utc>,
}

impl CommunityPost {
    /// Builds a post from raw form input.
    ///
    /// # Contract
    /// - `content` must be non-empty after trimming; it is stored
    ///   trimmed.
    /// - Author is always [`DEFAULT_AUTHOR`].
    pub fn from_input(content: &str, timestamp: DateTime<Utc>) -> Result<Self, ValidationError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyPostContent);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            content: trimmed.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            likes: 0,
            comments: Vec::new(),
            timestamp,
        })
    }

    /// Applies one like action and returns the new counter value.
    pub fn register_like(&mut self) -> u32 {
        self.likes = self.likes.saturating_add(1);
        self.likes
    }
}

#[cfg(test)]
mod tests {
    use super::CommunityPost;
    use crate::model::ValidationError;
    use chrono::Utc;

    #[test]
    fn content_is_trimmed_and_required() {
        let post = CommunityPost::from_input("  hoje foi um dia melhor  ", Utc::now())
            .expect("valid post");
        assert_eq!(post.content, "hoje foi um dia melhor");
        assert_eq!(post.author, "Usuário");
        assert_eq!(post.likes, 0);
        assert!(post.comments.is_empty());

        let result = CommunityPost::from_input("   ", Utc::now());
        assert!(matches!(result, Err(ValidationError::EmptyPostContent)));
    }

    #[test]
    fn likes_count_one_per_action() {
        let mut post = CommunityPost::from_input("obrigado a todos", Utc::now()).expect("post");
        assert_eq!(post.register_like(), 1);
        assert_eq!(post.register_like(), 2);
    }
}
