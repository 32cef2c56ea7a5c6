//! 애플리케이션 상태
//!
//! 시작 시 `AppState::new`로 모든 서비스를 생성하고 `web::Data`로 공유합니다.
//! 종료 시에는 `shutdown`으로 보관 중인 상태를 폐기합니다.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::domain::models::access::{AllowedSet, RoleHomeMap};
use crate::errors::{AppError, AppResult};
use crate::gate::GatePolicy;
use crate::services::invitations::InvitationService;
use crate::services::session::{SessionResolver, SessionTokenService};

/// 요청 처리에 필요한 공유 상태
pub struct AppState {
    config: AppConfig,
    sessions: Arc<SessionTokenService>,
    resolver: Arc<dyn SessionResolver>,
    invitations: InvitationService,
    role_homes: RoleHomeMap,
}

impl AppState {
    /// 설정으로부터 모든 서비스를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 게이트 경로 설정이 `/`로 시작하지 않는 경우
    pub fn new(config: AppConfig) -> AppResult<Self> {
        validate_path("GATE_DEFAULT_FALLBACK", &config.gate.default_fallback)?;
        if let Some(login_path) = &config.gate.login_path {
            validate_path("GATE_LOGIN_PATH", login_path)?;
        }

        let sessions = Arc::new(SessionTokenService::new(&config.jwt));
        let invitations = InvitationService::new(&config.invitations);
        let role_homes = RoleHomeMap::default();

        log::info!(
            "애플리케이션 상태 초기화: 환경 {:?}, 기본 폴백 {}, 전략 {:?}",
            config.environment,
            config.gate.default_fallback,
            config.gate.fallback_strategy
        );

        Ok(Self {
            resolver: sessions.clone(),
            sessions,
            invitations,
            role_homes,
            config,
        })
    }

    /// 요청 단위 신원 확인기를 교체합니다. 외부 신원 제공자 연동이나 테스트에 사용합니다.
    pub fn with_resolver(mut self, resolver: Arc<dyn SessionResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn sessions(&self) -> &SessionTokenService {
        &self.sessions
    }

    pub fn resolver(&self) -> &dyn SessionResolver {
        self.resolver.as_ref()
    }

    pub fn invitations(&self) -> &InvitationService {
        &self.invitations
    }

    pub fn role_homes(&self) -> &RoleHomeMap {
        &self.role_homes
    }

    /// 설정된 기본값으로 허용 목록에 대한 게이트 정책을 만듭니다.
    pub fn gate_policy(&self, allowed: &AllowedSet, fallback: Option<&str>) -> GatePolicy {
        let gate = &self.config.gate;

        GatePolicy::new(allowed.clone())
            .with_fallback(fallback.unwrap_or(&gate.default_fallback))
            .with_strategy(gate.fallback_strategy)
            .with_role_homes(self.role_homes.clone())
            .with_login_path(gate.login_path.clone())
    }

    /// 미인증 신원의 첫 화면
    pub fn anonymous_home(&self) -> &str {
        self.config
            .gate
            .login_path
            .as_deref()
            .unwrap_or(&self.config.gate.default_fallback)
    }

    /// 종료 시 호출합니다.
    pub fn shutdown(&self) {
        let pending = self.invitations.pending_count();
        self.invitations.clear();
        log::info!("애플리케이션 상태 정리 완료 (대기 중 초대 {}건 폐기)", pending);
    }
}

fn validate_path(key: &str, path: &str) -> AppResult<()> {
    if path.starts_with('/') {
        Ok(())
    } else {
        Err(AppError::ConfigError(format!(
            "{}는 '/'로 시작하는 경로여야 합니다: {}",
            key, path
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::access::{AuthState, Role};
    use crate::gate::{FallbackStrategy, GateDecision};

    #[test]
    fn test_rejects_relative_fallback() {
        let mut config = AppConfig::for_tests();
        config.gate.default_fallback = "properties".to_string();

        assert!(matches!(AppState::new(config), Err(AppError::ConfigError(_))));
    }

    #[test]
    fn test_gate_policy_uses_configured_defaults() {
        let mut config = AppConfig::for_tests();
        config.gate.default_fallback = "/dashboard".to_string();
        config.gate.fallback_strategy = FallbackStrategy::RoleHome;
        let state = AppState::new(config).unwrap();

        let policy = state.gate_policy(&AllowedSet::new([Role::Admin]), None);
        assert_eq!(policy.fallback(), "/dashboard");
        assert_eq!(
            policy.evaluate(&AuthState::resolved(Role::Handyman)),
            GateDecision::Redirect("/handyman/tasks".to_string())
        );

        let policy = state.gate_policy(&AllowedSet::new([Role::Admin]), Some("/inspections"));
        assert_eq!(policy.fallback(), "/inspections");
    }

    #[test]
    fn test_anonymous_home_prefers_login_path() {
        let state = AppState::new(AppConfig::for_tests()).unwrap();
        assert_eq!(state.anonymous_home(), "/properties");

        let mut config = AppConfig::for_tests();
        config.gate.login_path = Some("/login".to_string());
        let state = AppState::new(config).unwrap();
        assert_eq!(state.anonymous_home(), "/login");
    }

    #[test]
    fn test_shutdown_discards_pending_invitations() {
        use crate::domain::dto::invitations::CreateInvitationRequest;
        use crate::domain::models::session::AuthenticatedSession;

        let state = AppState::new(AppConfig::for_tests()).unwrap();
        state
            .invitations()
            .create(
                CreateInvitationRequest {
                    email: "cleaner@example.com".to_string(),
                    role: Role::Cleaner,
                },
                &AuthenticatedSession::new("owner-1", Role::Owner),
            )
            .unwrap();

        state.shutdown();

        assert_eq!(state.invitations().pending_count(), 0);
    }
}
