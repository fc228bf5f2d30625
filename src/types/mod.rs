mod models;
mod role;
mod timestamp;

pub use models::*;
pub use role::{ComplaintStatus, Role};
pub use timestamp::Timestamp;
