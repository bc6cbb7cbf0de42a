//! Data models for the NC News API.
//!
//! Field names are snake_case on the wire to match the API contract.

mod article;
mod comment;
mod seed;
mod topic;
mod user;

pub use article::*;
pub use comment::*;
pub use seed::*;
pub use topic::*;
pub use user::*;
