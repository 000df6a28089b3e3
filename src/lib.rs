pub mod app;
pub mod config;
pub mod console;
pub mod domain;

pub use crate::app::error::FeedError;
pub use crate::app::feed::FeedStore;
pub use crate::domain::post::{Post, Response};
