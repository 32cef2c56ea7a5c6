use serde::{Deserialize, Serialize};

use crate::domain::models::access::role::Role;

/// 현재 세션의 역할 확인 상태
///
/// 신원 제공자가 생성하고 접근 게이트는 읽기만 합니다.
/// `loading = true`이면 `role` 값과 관계없이 확인 중으로 취급합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthState {
    pub role: Option<Role>,
    pub loading: bool,
}

impl AuthState {
    /// 아직 역할 확인이 끝나지 않은 상태
    pub const fn loading() -> Self {
        Self { role: None, loading: true }
    }

    /// 역할 확인이 끝난 인증 상태
    pub const fn resolved(role: Role) -> Self {
        Self { role: Some(role), loading: false }
    }

    /// 역할 확인은 끝났지만 인증되지 않은 상태
    pub const fn anonymous() -> Self {
        Self { role: None, loading: false }
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::loading()
    }
}

impl From<Option<Role>> for AuthState {
    fn from(role: Option<Role>) -> Self {
        match role {
            Some(role) => Self::resolved(role),
            None => Self::anonymous(),
        }
    }
}
