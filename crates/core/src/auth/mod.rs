mod error;
mod functions;
mod types;

pub use error::AuthError;
pub use functions::{bearer_token, issue_token, verify_token};
pub use types::Claims;
