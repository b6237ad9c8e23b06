use super::{unique, unix, User};
use crate::types;
use furumaru_core::domain::entities as entity;
use std::collections::HashMap;
use std::ops::Deref;

/// An on-demand video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video(types::Video);

impl Video {
    #[must_use]
    pub fn new(video: &entity::Video) -> Self {
        Self(types::Video {
            id: video.id.clone(),
            coordinator_id: video.coordinator_id.clone(),
            product_ids: video.product_ids.clone(),
            experience_ids: video.experience_ids.clone(),
            title: video.title.clone(),
            description: video.description.clone(),
            thumbnail_url: video.thumbnail_url.clone(),
            video_url: video.video_url.clone(),
            published_at: unix(&video.published_at),
        })
    }

    #[must_use]
    pub fn response(&self) -> &types::Video {
        &self.0
    }
}

/// Videos in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Videos(Vec<Video>);

impl Videos {
    #[must_use]
    pub fn new(videos: &[entity::Video]) -> Self {
        Self(videos.iter().map(Video::new).collect())
    }

    #[must_use]
    pub fn coordinator_ids(&self) -> Vec<String> {
        unique(self.0.iter().map(|v| v.0.coordinator_id.clone()))
    }

    #[must_use]
    pub fn product_ids(&self) -> Vec<String> {
        unique(self.0.iter().flat_map(|v| v.0.product_ids.iter().cloned()))
    }

    #[must_use]
    pub fn experience_ids(&self) -> Vec<String> {
        unique(self.0.iter().flat_map(|v| v.0.experience_ids.iter().cloned()))
    }

    #[must_use]
    pub fn response(&self) -> Vec<types::Video> {
        self.0.iter().map(|v| v.0.clone()).collect()
    }
}

impl Deref for Videos {
    type Target = [Video];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A viewer comment on a video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoComment(types::VideoComment);

impl VideoComment {
    /// Builds the comment. A moderated comment keeps its place in the thread
    /// with its text removed. Guests are shown without a profile.
    #[must_use]
    pub fn new(comment: &entity::VideoComment, user: Option<&User>) -> Self {
        let commenter = user.filter(|u| u.is_registered());
        let (username, account_id, thumbnail_url) = commenter.map_or_else(Default::default, |u| {
            let user = u.response();
            (
                user.username.clone(),
                user.account_id.clone(),
                user.thumbnail_url.clone(),
            )
        });
        Self(types::VideoComment {
            id: comment.id.clone(),
            user_id: comment.user_id.clone(),
            username,
            account_id,
            thumbnail_url,
            comment: if comment.disabled {
                String::new()
            } else {
                comment.content.clone()
            },
            published_at: unix(&comment.created_at),
        })
    }

    #[must_use]
    pub fn response(&self) -> &types::VideoComment {
        &self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoComments(Vec<VideoComment>);

impl VideoComments {
    #[must_use]
    pub fn new(comments: &[entity::VideoComment], users: &HashMap<String, User>) -> Self {
        Self(
            comments
                .iter()
                .map(|c| VideoComment::new(c, users.get(&c.user_id)))
                .collect(),
        )
    }

    /// Commenters to look up before building the thread.
    #[must_use]
    pub fn user_ids(comments: &[entity::VideoComment]) -> Vec<String> {
        unique(comments.iter().map(|c| c.user_id.clone()))
    }

    #[must_use]
    pub fn response(&self) -> Vec<types::VideoComment> {
        self.0.iter().map(|c| c.0.clone()).collect()
    }
}

impl Deref for VideoComments {
    type Target = [VideoComment];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
