pub mod error;
pub mod feed;
pub mod ids;
