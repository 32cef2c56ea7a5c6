use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::domain::models::access::{AuthState, Role};

/// 세션 토큰에서 확인된 사용자 정보
///
/// `RoleGate`가 접근을 허용한 요청의 extension에 저장됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedSession {
    /// 사용자 고유 ID
    pub user_id: String,

    /// 세션 역할
    pub role: Role,
}

impl AuthenticatedSession {
    pub fn new(user_id: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn auth_state(&self) -> AuthState {
        AuthState::resolved(self.role)
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedSession {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedSession>() {
            Some(session) => ready(Ok(session.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다"
            ))),
        }
    }
}
