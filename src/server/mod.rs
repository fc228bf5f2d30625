mod admin;
pub mod dto;
mod login;
mod public;
pub mod response;
mod router;
mod student;

pub use admin::admin_router;
pub use router::{AppState, create_router};
pub use student::student_router;
