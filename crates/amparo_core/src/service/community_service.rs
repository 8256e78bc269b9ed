//! Community feed use-case service.
//!
//! # Responsibility
//! - Provide the feed screen's list/publish/like/delete entry points.
//!
//! # Invariants
//! - The feed is local-device state only; nothing leaves the device.
//! - A like action increments the counter by exactly one.
//! - Liking or deleting a missing id is a no-op, not an error.

use crate::model::post::CommunityPost;
use crate::model::ValidationError;
use crate::store::{KeyValueStore, RecordStore, StoreError, POSTS_COLLECTION};
use chrono::Utc;
use log::info;
use uuid::Uuid;

/// Service error for community feed use-cases.
#[derive(Debug)]
pub enum CommunityServiceError {
    Validation(ValidationError),
    Store(StoreError),
}

impl std::fmt::Display for CommunityServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CommunityServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<ValidationError> for CommunityServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for CommunityServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Feed screen facade over the record store.
pub struct CommunityService<K: KeyValueStore> {
    kv: K,
    store: RecordStore<CommunityPost>,
}

impl<K: KeyValueStore> CommunityService<K> {
    pub fn new(kv: K) -> Self {
        Self {
            kv,
            store: RecordStore::new(POSTS_COLLECTION),
        }
    }

    /// Lists posts newest-first.
    pub fn list_posts(&self) -> Result<Vec<CommunityPost>, CommunityServiceError> {
        Ok(self.store.load_or_empty(&self.kv)?)
    }

    /// Publishes a post at the top of the feed.
    pub fn add_post(&mut self, content: &str) -> Result<CommunityPost, CommunityServiceError> {
        let post = CommunityPost::from_input(content, Utc::now())?;

        let mut posts = self.store.load_or_empty(&self.kv)?;
        posts.insert(0, post.clone());
        self.store.save(&mut self.kv, &posts)?;

        info!("event=post_added module=community status=ok id={}", post.id);
        Ok(post)
    }

    /// Applies one like action.
    ///
    /// Returns the new like count, or `None` (without writing) when the
    /// post no longer exists.
    pub fn like_post(&mut self, id: Uuid) -> Result<Option<u32>, CommunityServiceError> {
        let mut posts = self.store.load_or_empty(&self.kv)?;
        let Some(post) = posts.iter_mut().find(|post| post.id == id) else {
            return Ok(None);
        };

        let likes = post.register_like();
        self.store.save(&mut self.kv, &posts)?;
        Ok(Some(likes))
    }

    /// Removes one post by id. Returns `false` (without writing) when
    /// the id is not present.
    pub fn delete_post(&mut self, id: Uuid) -> Result<bool, CommunityServiceError> {
        let mut posts = self.store.load_or_empty(&self.kv)?;
        let before = posts.len();
        posts.retain(|post| post.id != id);
        if posts.len() == before {
            return Ok(false);
        }

        self.store.save(&mut self.kv, &posts)?;
        info!("event=post_deleted module=community status=ok id={id}");
        Ok(true)
    }
}
