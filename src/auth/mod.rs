mod session;

pub use session::{AuthUser, SessionKeys};
