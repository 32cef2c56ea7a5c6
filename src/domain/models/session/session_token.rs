//! 세션 토큰 클레임과 발급 결과
//!
//! 관리형 인증 서비스가 확인한 신원을 서명된 JWT로 운반합니다.
//! 하나의 세션에는 정확히 하나의 역할만 실립니다.
use serde::{Deserialize, Serialize};

use crate::domain::models::access::Role;

/// 세션 JWT의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (사용자 ID)
/// - `role`: 세션에 부여된 단일 역할
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

/// 클라이언트에게 전달되는 세션 토큰
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionToken {
    /// 서명된 세션 토큰
    pub token: String,
    /// 토큰에 실린 역할
    pub role: Role,
    /// 토큰 만료까지 남은 시간 (초)
    pub expires_in: i64,
}
