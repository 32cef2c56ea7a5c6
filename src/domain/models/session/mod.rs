pub mod authenticated_session;
pub mod session_token;

pub use authenticated_session::AuthenticatedSession;
pub use session_token::{SessionClaims, SessionToken};
