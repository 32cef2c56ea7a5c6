//! 역할별 기본 랜딩 경로
use std::collections::HashMap;

use crate::domain::models::access::role::Role;

/// 역할이 없거나 매핑되지 않은 경우 사용하는 전역 기본 경로
pub const DEFAULT_HOME: &str = "/properties";

/// 역할 → 기본 랜딩 경로 매핑
///
/// 로그인 후 첫 화면 선택과 `RoleHome` 폴백 전략에서 사용합니다.
/// 매핑되지 않은 역할은 항상 전역 기본 경로로 이동합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleHomeMap {
    homes: HashMap<Role, String>,
    default_home: String,
}

impl RoleHomeMap {
    /// 매핑이 비어 있는 맵을 생성합니다.
    pub fn empty(default_home: impl Into<String>) -> Self {
        Self {
            homes: HashMap::new(),
            default_home: default_home.into(),
        }
    }

    pub fn with_home(mut self, role: Role, path: impl Into<String>) -> Self {
        self.homes.insert(role, path.into());
        self
    }

    /// 역할의 기본 경로를 반환합니다.
    ///
    /// 역할이 없거나 매핑되지 않은 경우 전역 기본 경로를 반환합니다.
    pub fn home_for(&self, role: Option<Role>) -> &str {
        role.and_then(|role| self.homes.get(&role))
            .map(String::as_str)
            .unwrap_or(&self.default_home)
    }

    pub fn default_home(&self) -> &str {
        &self.default_home
    }
}

impl Default for RoleHomeMap {
    fn default() -> Self {
        Self::empty(DEFAULT_HOME)
            .with_home(Role::Admin, "/properties")
            .with_home(Role::Owner, "/properties")
            .with_home(Role::Cleaner, "/cleanings")
            .with_home(Role::Handyman, "/handyman/tasks")
            .with_home(Role::Inspector, "/inspections")
    }
}
