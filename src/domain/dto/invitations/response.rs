use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::models::access::Role;
use crate::domain::models::invitation::Invitation;
use crate::domain::models::session::SessionToken;

/// 초대 생성 응답
///
/// `token`은 이 응답에서만 노출되며 서버에는 다이제스트만 남습니다.
#[derive(Debug, Serialize)]
pub struct IssuedInvitationResponse {
    pub invitation_id: Uuid,
    pub token: String,
    pub email: String,
    pub role: Role,
    pub expires_at: DateTime<Utc>,
}

impl IssuedInvitationResponse {
    pub fn new(invitation: &Invitation, token: String) -> Self {
        Self {
            invitation_id: invitation.id,
            token,
            email: invitation.email.clone(),
            role: invitation.role,
            expires_at: invitation.expires_at,
        }
    }
}

/// 초대 수락 응답
#[derive(Debug, Serialize)]
pub struct AcceptedInvitationResponse {
    pub email: String,
    pub session: SessionToken,
    /// 역할별 첫 화면
    pub home: String,
}
