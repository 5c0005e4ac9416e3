mod document;
mod user;

pub use document::{Document, DocumentPayload};
pub use user::{CreateUserRequest, LoginFailure, LoginRequest, LoginResponse, User, UserInfo};
