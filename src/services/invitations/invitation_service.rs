//! 역할 초대 서비스
//!
//! 초대 토큰은 한 번만 발급되며 저장소에는 SHA-256 다이제스트만 남습니다.
//! 수락 시 토큰을 다시 해시하여 초대를 찾고, 찾은 초대는 즉시 소비됩니다.

use std::collections::HashMap;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::config::InvitationConfig;
use crate::domain::dto::invitations::CreateInvitationRequest;
use crate::domain::models::access::Role;
use crate::domain::models::invitation::Invitation;
use crate::domain::models::session::AuthenticatedSession;
use crate::errors::AppError;

/// 원본 초대 토큰의 다이제스트 (base64url, 패딩 없음)
pub fn hash_token(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    URL_SAFE_NO_PAD.encode(digest)
}

/// 초대 발급/수락 서비스
pub struct InvitationService {
    store: RwLock<HashMap<String, Invitation>>,
    ttl: Duration,
}

impl InvitationService {
    pub fn new(config: &InvitationConfig) -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
            ttl: Duration::hours(config.ttl_hours),
        }
    }

    /// 새 초대를 발급하고 원본 토큰을 함께 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthorizationError` - `admin`이 아닌 사용자가 `admin` 초대를 시도한 경우
    pub fn create(
        &self,
        request: CreateInvitationRequest,
        invited_by: &AuthenticatedSession,
    ) -> Result<(Invitation, String), AppError> {
        self.create_at(request, invited_by, Utc::now())
    }

    fn create_at(
        &self,
        request: CreateInvitationRequest,
        invited_by: &AuthenticatedSession,
        now: DateTime<Utc>,
    ) -> Result<(Invitation, String), AppError> {
        if request.role == Role::Admin && !invited_by.is_admin() {
            log::warn!(
                "관리자 초대 거부: 사용자 ID {} ({})",
                invited_by.user_id,
                invited_by.role
            );
            return Err(AppError::AuthorizationError(
                "관리자만 관리자를 초대할 수 있습니다".to_string(),
            ));
        }

        let token = Uuid::new_v4().simple().to_string();
        let invitation = Invitation {
            id: Uuid::new_v4(),
            email: request.email.trim().to_lowercase(),
            role: request.role,
            invited_by: invited_by.user_id.clone(),
            created_at: now,
            expires_at: now + self.ttl,
        };

        {
            let mut store = self.store.write();
            let evicted = evict_expired(&mut store, now);
            if evicted > 0 {
                log::debug!("만료된 초대 {}건 정리", evicted);
            }
            store.insert(hash_token(&token), invitation.clone());
        }
        log::info!(
            "초대 발급: {} ({}) by {}",
            invitation.email,
            invitation.role,
            invitation.invited_by
        );

        Ok((invitation, token))
    }

    /// 초대 토큰을 수락하고 초대를 소비합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 알 수 없거나 이미 사용된 토큰
    /// * `AppError::ConflictError` - 만료된 초대 (저장소에서 제거됨)
    pub fn accept(&self, token: &str) -> Result<Invitation, AppError> {
        self.accept_at(token, Utc::now())
    }

    fn accept_at(&self, token: &str, now: DateTime<Utc>) -> Result<Invitation, AppError> {
        let invitation = self
            .store
            .write()
            .remove(&hash_token(token))
            .ok_or_else(|| AppError::NotFound("초대를 찾을 수 없습니다".to_string()))?;

        if invitation.is_expired_at(now) {
            log::info!("만료된 초대 수락 시도: {}", invitation.email);
            return Err(AppError::ConflictError("만료된 초대입니다".to_string()));
        }

        log::info!("초대 수락: {} ({})", invitation.email, invitation.role);
        Ok(invitation)
    }

    pub fn pending_count(&self) -> usize {
        self.store.read().len()
    }

    /// 종료 시 보관 중인 초대를 모두 폐기합니다.
    pub fn clear(&self) {
        self.store.write().clear();
    }
}

/// 만료된 초대를 제거하고 제거된 개수를 반환합니다.
fn evict_expired(store: &mut HashMap<String, Invitation>, now: DateTime<Utc>) -> usize {
    let before = store.len();
    store.retain(|_, invitation| !invitation.is_expired_at(now));
    before - store.len()
}
