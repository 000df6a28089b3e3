use crate::app::error::FeedError;
use crate::app::ids::{IdAllocator, IdStrategy};
use crate::domain::post::{Post, Response};

/// In-memory owner of the feed. Posts are kept in display order and each
/// post carries its own responses, so removing a post removes its thread.
///
/// Every fallible operation looks up everything it needs before touching
/// state; a `NotFound` leaves the store exactly as it was.
#[derive(Debug, Clone, Default)]
pub struct FeedStore {
    posts: Vec<Post>,
    ids: IdAllocator,
}

pub type FeedResult<T> = Result<T, FeedError>;

impl FeedStore {
    pub fn new(strategy: IdStrategy) -> Self {
        Self::with_allocator(IdAllocator::new(strategy))
    }

    pub fn with_allocator(ids: IdAllocator) -> Self {
        Self {
            posts: Vec::new(),
            ids,
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post(&self, post_id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == post_id)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn create_post(&mut self, text: impl Into<String>, date: impl Into<String>) -> Post {
        let post = Post::new(self.ids.next_post_id(), text.into(), date.into());
        tracing::debug!(post_id = %post.id, "post created");
        self.posts.push(post.clone());
        post
    }

    pub fn create_response(
        &mut self,
        post_id: &str,
        text: impl Into<String>,
        date: impl Into<String>,
    ) -> FeedResult<Response> {
        let index = self.post_index(post_id)?;
        let response = Response::new(self.ids.next_response_id(), text.into(), date.into());
        tracing::debug!(post_id = %post_id, response_id = %response.id, "response created");
        self.posts[index].responses.push(response.clone());
        Ok(response)
    }

    /// Flips the post's like state and returns the new value.
    pub fn toggle_like(&mut self, post_id: &str) -> FeedResult<bool> {
        let post = self.post_mut(post_id)?;
        post.liked = !post.liked;
        tracing::debug!(post_id = %post_id, liked = post.liked, "post like toggled");
        Ok(post.liked)
    }

    pub fn toggle_response_like(&mut self, post_id: &str, response_id: &str) -> FeedResult<bool> {
        let response = self
            .post_mut(post_id)?
            .response_mut(response_id)
            .ok_or_else(|| FeedError::response_not_found(post_id, response_id))?;
        response.liked = !response.liked;
        let liked = response.liked;
        tracing::debug!(post_id = %post_id, response_id = %response_id, liked, "response like toggled");
        Ok(liked)
    }

    pub fn delete_post(&mut self, post_id: &str) -> FeedResult<Post> {
        let index = self.post_index(post_id)?;
        let post = self.posts.remove(index);
        tracing::debug!(
            post_id = %post_id,
            responses = post.responses.len(),
            "post deleted"
        );
        Ok(post)
    }

    pub fn delete_response(&mut self, post_id: &str, response_id: &str) -> FeedResult<Response> {
        let post = self.post_mut(post_id)?;
        let index = post
            .response_index(response_id)
            .ok_or_else(|| FeedError::response_not_found(post_id, response_id))?;
        // Vec::remove shifts the tail, keeping sibling order.
        let response = post.responses.remove(index);
        tracing::debug!(post_id = %post_id, response_id = %response_id, "response deleted");
        Ok(response)
    }

    fn post_index(&self, post_id: &str) -> FeedResult<usize> {
        self.posts
            .iter()
            .position(|p| p.id == post_id)
            .ok_or_else(|| FeedError::post_not_found(post_id))
    }

    fn post_mut(&mut self, post_id: &str) -> FeedResult<&mut Post> {
        self.posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| FeedError::post_not_found(post_id))
    }
}
