pub mod request;
pub mod response;

pub use request::{AcceptInvitationRequest, CreateInvitationRequest};
pub use response::{AcceptedInvitationResponse, IssuedInvitationResponse};
