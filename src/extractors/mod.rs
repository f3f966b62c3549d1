//! Request extractors: path ids and the acting user.

pub mod current_user;
pub mod id;
pub use current_user::{CurrentUser, USER_ID_HEADER};
pub use id::EntityId;
