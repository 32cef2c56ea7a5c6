pub mod identity;
pub mod token_service;

pub use identity::SessionIdentity;
pub use token_service::{SessionResolver, SessionTokenService};
