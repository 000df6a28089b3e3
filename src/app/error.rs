use std::fmt;

/// What a failed lookup was looking for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Missing {
    Post { post_id: String },
    Response { post_id: String, response_id: String },
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Post { post_id } => write!(f, "post {}", post_id),
            Self::Response {
                post_id,
                response_id,
            } => write!(f, "response {} on post {}", response_id, post_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedError {
    #[error("{0} not found")]
    NotFound(Missing),
}

impl FeedError {
    pub fn post_not_found(post_id: impl Into<String>) -> Self {
        Self::NotFound(Missing::Post {
            post_id: post_id.into(),
        })
    }

    pub fn response_not_found(
        post_id: impl Into<String>,
        response_id: impl Into<String>,
    ) -> Self {
        Self::NotFound(Missing::Response {
            post_id: post_id.into(),
            response_id: response_id.into(),
        })
    }
}
