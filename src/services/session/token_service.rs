//! 세션 토큰 서비스
//!
//! 관리형 인증 서비스가 확인한 신원을 HS256 JWT 세션 토큰으로 발급하고 검증합니다.
//! 요청 단위 게이트(`RoleGate`)의 신원 확인기로도 동작합니다.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::config::JwtConfig;
use crate::domain::models::access::Role;
use crate::domain::models::session::{AuthenticatedSession, SessionClaims, SessionToken};
use crate::errors::AppError;

/// 요청의 자격 증명으로부터 세션을 확인하는 신원 확인기
///
/// * `Ok(Some(_))` - 역할이 확인된 세션
/// * `Ok(None)` - 자격 증명이 없거나 유효하지 않음 (미인증)
/// * `Err(_)` - 신원 제공자 장애. 게이트는 이를 확인 중 상태로 취급합니다.
#[async_trait]
pub trait SessionResolver: Send + Sync {
    async fn resolve(&self, credential: Option<&str>) -> Result<Option<AuthenticatedSession>, AppError>;
}

/// JWT 세션 토큰 서비스
///
/// 애플리케이션 시작 시 `JwtConfig`로 한 번 생성되어 `AppState`에 보관됩니다.
pub struct SessionTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_hours: i64,
}

impl SessionTokenService {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            expiration_hours: config.expiration_hours,
        }
    }

    /// 사용자와 역할에 대한 세션 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 빈 사용자 ID
    /// * `AppError::InternalError` - 토큰 서명 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let session = tokens.issue("user-123", Role::Cleaner)?;
    /// println!("Expires in: {} seconds", session.expires_in);
    /// ```
    pub fn issue(&self, subject: &str, role: Role) -> Result<SessionToken, AppError> {
        if subject.trim().is_empty() {
            return Err(AppError::ValidationError("사용자 ID가 없습니다".to_string()));
        }

        let now = Utc::now();
        let expiration = now + Duration::hours(self.expiration_hours);

        let claims = SessionClaims {
            sub: subject.to_string(),
            role,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("세션 토큰 생성 실패: {}", e)))?;

        Ok(SessionToken {
            token,
            role,
            expires_in: self.expiration_hours * 3600,
        })
    }

    /// 세션 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식/서명
    pub fn verify(&self, token: &str) -> Result<SessionClaims, AppError> {
        decode::<SessionClaims>(token, &self.decoding_key, &Validation::default())
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                _ => AppError::AuthenticationError(format!("유효하지 않은 토큰입니다: {}", e)),
            })
    }

    /// "Bearer {token}" 형식의 헤더에서 토큰 부분만 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 헤더 형식
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())
            })
    }

    #[cfg(test)]
    pub(crate) fn issue_with_expiry(&self, subject: &str, role: Role, exp: i64) -> String {
        let claims = SessionClaims {
            sub: subject.to_string(),
            role,
            iat: Utc::now().timestamp(),
            exp,
        };
        encode(&Header::default(), &claims, &self.encoding_key).unwrap()
    }
}

#[async_trait]
impl SessionResolver for SessionTokenService {
    async fn resolve(&self, credential: Option<&str>) -> Result<Option<AuthenticatedSession>, AppError> {
        let Some(token) = credential else {
            return Ok(None);
        };

        match self.verify(token) {
            Ok(claims) => Ok(Some(AuthenticatedSession::new(claims.sub, claims.role))),
            Err(e) => {
                log::debug!("세션 토큰 거부: {}", e);
                Ok(None)
            }
        }
    }
}
