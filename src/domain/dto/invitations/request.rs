//! 초대 요청 DTO
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::models::access::Role;

/// 새 초대 생성 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateInvitationRequest {
    /// 초대받을 사용자 이메일
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 초대받은 사용자가 받게 될 역할
    pub role: Role,
}

/// 초대 수락 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AcceptInvitationRequest {
    /// 초대 생성 시 한 번만 전달된 원본 토큰
    #[validate(custom(function = "validate_invitation_token"))]
    pub token: String,
}

/// 초대 토큰 형식 검증 (32자리 16진수)
fn validate_invitation_token(token: &str) -> Result<(), ValidationError> {
    if token.len() != 32 || !token.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ValidationError::new("invalid_invitation_token")
            .with_message("초대 토큰 형식이 올바르지 않습니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_invitation_requires_valid_email() {
        let request = CreateInvitationRequest {
            email: "not-an-email".to_string(),
            role: Role::Cleaner,
        };
        assert!(request.validate().is_err());

        let request = CreateInvitationRequest {
            email: "cleaner@example.com".to_string(),
            role: Role::Cleaner,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_accept_invitation_token_format() {
        let bad = AcceptInvitationRequest { token: "short".to_string() };
        assert!(bad.validate().is_err());

        let good = AcceptInvitationRequest {
            token: "0123456789abcdef0123456789abcdef".to_string(),
        };
        assert!(good.validate().is_ok());
    }
}
