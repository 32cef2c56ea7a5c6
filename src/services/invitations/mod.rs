pub mod invitation_service;

pub use invitation_service::{hash_token, InvitationService};
