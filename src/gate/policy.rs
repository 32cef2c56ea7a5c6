//! 접근 게이트 판단 정책
//!
//! `AuthState` 하나를 받아 렌더링 보류 / 렌더링 / 리다이렉트 중 하나를 결정합니다.
//! 상태 머신(`AccessGate`)과 HTTP 미들웨어(`RoleGate`)가 같은 정책을 공유합니다.

use std::str::FromStr;

use crate::domain::models::access::{AllowedSet, AuthState, Role, RoleHomeMap, DEFAULT_HOME};
use crate::errors::AppError;

/// 청소 담당자 전용 첫 화면
pub const CLEANER_HOME: &str = "/cleanings";

/// 게이트 판단 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// 역할 확인 중 - 아무것도 렌더링하지 않고 리다이렉트도 하지 않음
    Suspend,
    /// 허용 - 보호된 화면을 그대로 렌더링
    Render,
    /// 거부 - 대상 경로로 한 번 리다이렉트
    Redirect(String),
}

/// 권한이 없는 역할의 리다이렉트 대상 선택 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackStrategy {
    /// `cleaner`만 `/cleanings`로, 나머지는 설정된 폴백 경로로 보냅니다.
    #[default]
    CleanerHome,
    /// 역할의 `RoleHomeMap` 경로로 보냅니다. 매핑이 없으면 폴백 경로를 사용합니다.
    RoleHome,
}

impl FromStr for FallbackStrategy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cleaner_home" | "cleaner-home" => Ok(FallbackStrategy::CleanerHome),
            "role_home" | "role-home" => Ok(FallbackStrategy::RoleHome),
            other => Err(AppError::ConfigError(format!(
                "알 수 없는 폴백 전략입니다: {}",
                other
            ))),
        }
    }
}

/// 보호된 화면 하나에 대한 접근 정책
///
/// # Examples
///
/// ```rust,ignore
/// let policy = GatePolicy::new(AllowedSet::new([Role::Admin]))
///     .with_fallback("/inspections");
///
/// assert_eq!(
///     policy.evaluate(&AuthState::resolved(Role::Inspector)),
///     GateDecision::Redirect("/inspections".to_string()),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct GatePolicy {
    allowed: AllowedSet,
    fallback: String,
    strategy: FallbackStrategy,
    role_homes: RoleHomeMap,
    login_path: Option<String>,
}

impl GatePolicy {
    pub fn new(allowed: AllowedSet) -> Self {
        Self {
            allowed,
            fallback: DEFAULT_HOME.to_string(),
            strategy: FallbackStrategy::default(),
            role_homes: RoleHomeMap::default(),
            login_path: None,
        }
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    pub fn with_strategy(mut self, strategy: FallbackStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_role_homes(mut self, role_homes: RoleHomeMap) -> Self {
        self.role_homes = role_homes;
        self
    }

    /// 확인은 끝났지만 인증되지 않은 신원을 보낼 로그인 경로를 지정합니다.
    pub fn with_login_path(mut self, login_path: Option<String>) -> Self {
        self.login_path = login_path;
        self
    }

    pub fn allowed(&self) -> &AllowedSet {
        &self.allowed
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// 현재 인증 상태에 대한 판단을 내립니다.
    pub fn evaluate(&self, state: &AuthState) -> GateDecision {
        if state.loading {
            return GateDecision::Suspend;
        }

        if self.allowed.permits(state.role) {
            GateDecision::Render
        } else {
            GateDecision::Redirect(self.redirect_target(state.role).to_string())
        }
    }

    /// 권한이 없는 역할의 리다이렉트 대상 경로
    pub fn redirect_target(&self, role: Option<Role>) -> &str {
        match (role, &self.login_path) {
            (None, Some(login_path)) => return login_path,
            (None, None) => return &self.fallback,
            _ => {}
        }

        match self.strategy {
            FallbackStrategy::CleanerHome => match role {
                Some(Role::Cleaner) => CLEANER_HOME,
                _ => &self.fallback,
            },
            FallbackStrategy::RoleHome => {
                let home = self.role_homes.home_for(role);
                if home == self.role_homes.default_home() {
                    &self.fallback
                } else {
                    home
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin_owner() -> GatePolicy {
        GatePolicy::new(AllowedSet::new([Role::Admin, Role::Owner]))
    }

    #[test]
    fn test_loading_always_suspends() {
        let policy = admin_owner();

        assert_eq!(policy.evaluate(&AuthState::loading()), GateDecision::Suspend);
        let odd = AuthState { role: Some(Role::Admin), loading: true };
        assert_eq!(policy.evaluate(&odd), GateDecision::Suspend);
    }

    #[test]
    fn test_allowed_role_renders() {
        let policy = admin_owner();
        assert_eq!(policy.evaluate(&AuthState::resolved(Role::Owner)), GateDecision::Render);
    }

    #[test]
    fn test_cleaner_goes_to_cleanings_regardless_of_fallback() {
        let policy = admin_owner().with_fallback("/somewhere-else");

        assert_eq!(
            policy.evaluate(&AuthState::resolved(Role::Cleaner)),
            GateDecision::Redirect(CLEANER_HOME.to_string())
        );
    }

    #[test]
    fn test_other_roles_use_configured_fallback() {
        let policy = GatePolicy::new(AllowedSet::new([Role::Admin])).with_fallback("/inspections");

        assert_eq!(
            policy.evaluate(&AuthState::resolved(Role::Inspector)),
            GateDecision::Redirect("/inspections".to_string())
        );
        assert_eq!(
            admin_owner().evaluate(&AuthState::resolved(Role::Handyman)),
            GateDecision::Redirect(DEFAULT_HOME.to_string())
        );
    }

    #[test]
    fn test_anonymous_uses_fallback_or_login_path() {
        let policy = admin_owner();
        assert_eq!(
            policy.evaluate(&AuthState::anonymous()),
            GateDecision::Redirect(DEFAULT_HOME.to_string())
        );

        let policy = admin_owner().with_login_path(Some("/login".to_string()));
        assert_eq!(
            policy.evaluate(&AuthState::anonymous()),
            GateDecision::Redirect("/login".to_string())
        );
    }

    #[test]
    fn test_role_home_strategy_uses_role_home_map() {
        let policy = GatePolicy::new(AllowedSet::new([Role::Admin]))
            .with_strategy(FallbackStrategy::RoleHome)
            .with_fallback("/fallback");

        assert_eq!(policy.redirect_target(Some(Role::Handyman)), "/handyman/tasks");
        assert_eq!(policy.redirect_target(Some(Role::Cleaner)), "/cleanings");

        let sparse = RoleHomeMap::empty(DEFAULT_HOME).with_home(Role::Inspector, "/inspections");
        let policy = policy.with_role_homes(sparse);
        assert_eq!(policy.redirect_target(Some(Role::Owner)), "/fallback");
        assert_eq!(policy.redirect_target(Some(Role::Inspector)), "/inspections");
    }

    #[test]
    fn test_empty_allowed_set_denies_every_role() {
        let policy = GatePolicy::new(AllowedSet::new([]));

        for role in Role::ALL {
            assert!(matches!(
                policy.evaluate(&AuthState::resolved(role)),
                GateDecision::Redirect(_)
            ));
        }
    }

    #[test]
    fn test_fallback_strategy_parse() {
        assert_eq!("role_home".parse::<FallbackStrategy>().unwrap(), FallbackStrategy::RoleHome);
        assert_eq!(
            "Cleaner-Home".parse::<FallbackStrategy>().unwrap(),
            FallbackStrategy::CleanerHome
        );
        assert!("random".parse::<FallbackStrategy>().is_err());
    }
}
