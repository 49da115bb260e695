//! Data models for the directory-service API

pub mod group;
pub mod response;
pub mod search;
pub mod user;

pub use group::Group;
pub use response::{ApiResponse, GroupsResponse, LoginRequest, LoginResponse, SearchResponse, UserResponse};
pub use search::SearchEntry;
pub use user::User;
