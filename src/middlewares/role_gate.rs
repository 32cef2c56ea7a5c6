//! 역할 기반 라우트 게이트 미들웨어
//!
//! 보호된 스코프의 모든 요청에 대해 세션 역할을 확인하고,
//! 허용 목록에 없는 역할은 `303 See Other`로 리다이렉트합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::core::AppState;
use crate::domain::models::access::{AllowedSet, Role};
use crate::gate::GatePolicy;
use crate::middlewares::role_gate_inner::RoleGateService;

/// 거부 시 응답 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyMode {
    /// 페이지 라우트: `303 See Other` + `Location`
    Redirect,
    /// JSON API 라우트: 미인증 401, 권한 부족 403
    JsonApi,
}

/// 게이트 하나의 구성
#[derive(Debug, Clone)]
pub struct GateSpec {
    pub allowed: AllowedSet,
    pub fallback: Option<String>,
    pub policy: Option<GatePolicy>,
    pub mode: DenyMode,
}

impl GateSpec {
    /// 요청 처리에 사용할 정책. 명시적 정책이 없으면 애플리케이션 설정으로 만듭니다.
    pub fn policy_for(&self, state: &AppState) -> GatePolicy {
        match &self.policy {
            Some(policy) => policy.clone(),
            None => state.gate_policy(&self.allowed, self.fallback.as_deref()),
        }
    }
}

/// 역할 게이트 미들웨어
///
/// # Examples
///
/// ```rust,ignore
/// web::scope("/inspections")
///     .wrap(RoleGate::allow([Role::Admin, Role::Owner, Role::Inspector]))
///     .service(handlers::views::inspections);
///
/// web::scope("/api/v1/invitations")
///     .wrap(RoleGate::allow([Role::Admin, Role::Owner]).json_api())
///     .service(handlers::invitations::create_invitation);
/// ```
pub struct RoleGate {
    spec: GateSpec,
}

impl RoleGate {
    /// 허용 역할 목록으로 게이트를 만듭니다.
    pub fn allow(roles: impl IntoIterator<Item = Role>) -> Self {
        Self::with_allowed(AllowedSet::new(roles))
    }

    pub fn with_allowed(allowed: AllowedSet) -> Self {
        if allowed.is_empty() {
            log::warn!("빈 허용 목록으로 게이트 생성: 모든 요청이 거부됩니다");
        }

        Self {
            spec: GateSpec {
                allowed,
                fallback: None,
                policy: None,
                mode: DenyMode::Redirect,
            },
        }
    }

    /// 권한 없는 역할의 리다이렉트 경로를 지정합니다.
    pub fn fallback(mut self, path: impl Into<String>) -> Self {
        self.spec.fallback = Some(path.into());
        self
    }

    /// 애플리케이션 설정 대신 사용할 정책을 지정합니다.
    pub fn policy(mut self, policy: GatePolicy) -> Self {
        self.spec.allowed = policy.allowed().clone();
        self.spec.policy = Some(policy);
        self
    }

    /// 거부 시 리다이렉트 대신 JSON 에러로 응답합니다.
    pub fn json_api(mut self) -> Self {
        self.spec.mode = DenyMode::JsonApi;
        self
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for RoleGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RoleGateService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RoleGateService {
            service: Rc::new(service),
            spec: Rc::new(self.spec.clone()),
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use actix_web::http::{header, StatusCode};
    use actix_web::{get, test, web, App, HttpResponse};
    use async_trait::async_trait;

    use super::*;
    use crate::config::AppConfig;
    use crate::domain::models::session::AuthenticatedSession;
    use crate::errors::AppError;
    use crate::services::session::SessionResolver;

    #[get("")]
    async fn protected(session: AuthenticatedSession) -> HttpResponse {
        HttpResponse::Ok().json(serde_json::json!({ "role": session.role }))
    }

    fn state() -> web::Data<AppState> {
        web::Data::new(AppState::new(AppConfig::for_tests()).unwrap())
    }

    fn bearer(state: &AppState, role: Role) -> (header::HeaderName, String) {
        let session = state.sessions().issue("user-1", role).unwrap();
        (header::AUTHORIZATION, format!("Bearer {}", session.token))
    }

    fn location(res: &ServiceResponse<impl actix_web::body::MessageBody>) -> Option<String> {
        res.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    #[actix_web::test]
    async fn test_allowed_role_reaches_view() {
        let state = state();
        let app = test::init_service(
            App::new().app_data(state.clone()).service(
                web::scope("/properties")
                    .wrap(RoleGate::allow([Role::Admin, Role::Owner]))
                    .service(protected),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/properties")
            .insert_header(bearer(&state, Role::Owner))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["role"], "owner");
    }

    #[actix_web::test]
    async fn test_cleaner_is_sent_to_cleanings() {
        let state = state();
        let app = test::init_service(
            App::new().app_data(state.clone()).service(
                web::scope("/properties")
                    .wrap(RoleGate::allow([Role::Admin, Role::Owner]).fallback("/elsewhere"))
                    .service(protected),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/properties")
            .insert_header(bearer(&state, Role::Cleaner))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&res).as_deref(), Some("/cleanings"));
    }

    #[actix_web::test]
    async fn test_other_role_uses_fallback() {
        let state = state();
        let app = test::init_service(
            App::new().app_data(state.clone()).service(
                web::scope("/admin")
                    .wrap(RoleGate::allow([Role::Admin]).fallback("/inspections"))
                    .service(protected),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/admin")
            .insert_header(bearer(&state, Role::Inspector))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&res).as_deref(), Some("/inspections"));
    }

    #[actix_web::test]
    async fn test_missing_or_invalid_token_redirects_to_default() {
        let state = state();
        let app = test::init_service(
            App::new().app_data(state.clone()).service(
                web::scope("/admin")
                    .wrap(RoleGate::allow([Role::Admin]))
                    .service(protected),
            ),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/admin").to_request()).await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&res).as_deref(), Some("/properties"));

        let req = test::TestRequest::get()
            .uri("/admin")
            .insert_header((header::AUTHORIZATION, "Bearer not-a-jwt"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(location(&res).as_deref(), Some("/properties"));
    }

    #[actix_web::test]
    async fn test_session_cookie_is_accepted() {
        let state = state();
        let token = state.sessions().issue("user-2", Role::Admin).unwrap().token;
        let app = test::init_service(
            App::new().app_data(state.clone()).service(
                web::scope("/admin")
                    .wrap(RoleGate::allow([Role::Admin]))
                    .service(protected),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/admin")
            .cookie(actix_web::cookie::Cookie::new(
                crate::middlewares::SESSION_COOKIE,
                token,
            ))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_json_api_mode_answers_401_and_403() {
        let state = state();
        let app = test::init_service(
            App::new().app_data(state.clone()).service(
                web::scope("/api")
                    .wrap(RoleGate::allow([Role::Admin]).json_api())
                    .service(protected),
            ),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/api").to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::get()
            .uri("/api")
            .insert_header(bearer(&state, Role::Owner))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
        assert!(location(&res).is_none());
    }

    struct SlowResolver;

    #[async_trait]
    impl SessionResolver for SlowResolver {
        async fn resolve(&self, _credential: Option<&str>) -> Result<Option<AuthenticatedSession>, AppError> {
            actix_web::rt::time::sleep(Duration::from_secs(5)).await;
            Ok(Some(AuthenticatedSession::new("user-1", Role::Admin)))
        }
    }

    struct BrokenResolver;

    #[async_trait]
    impl SessionResolver for BrokenResolver {
        async fn resolve(&self, _credential: Option<&str>) -> Result<Option<AuthenticatedSession>, AppError> {
            Err(AppError::ExternalServiceError("auth backend down".to_string()))
        }
    }

    #[actix_web::test]
    async fn test_unresolved_identity_is_suspended_not_redirected() {
        for resolver in [Arc::new(SlowResolver) as Arc<dyn SessionResolver>, Arc::new(BrokenResolver)] {
            let state = web::Data::new(
                AppState::new(AppConfig::for_tests()).unwrap().with_resolver(resolver),
            );
            let app = test::init_service(
                App::new().app_data(state.clone()).service(
                    web::scope("/admin")
                        .wrap(RoleGate::allow([Role::Admin]))
                        .service(protected),
                ),
            )
            .await;

            let res = test::call_service(&app, test::TestRequest::get().uri("/admin").to_request()).await;

            assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
            assert!(location(&res).is_none());
            assert!(res.headers().contains_key(header::RETRY_AFTER));
        }
    }

    #[actix_web::test]
    async fn test_missing_app_state_is_internal_error() {
        let app = test::init_service(
            App::new().service(
                web::scope("/admin")
                    .wrap(RoleGate::allow([Role::Admin]))
                    .service(protected),
            ),
        )
        .await;

        let res = test::try_call_service(&app, test::TestRequest::get().uri("/admin").to_request()).await;

        match res {
            Ok(res) => assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR),
            Err(err) => assert_eq!(
                err.as_response_error().status_code(),
                StatusCode::INTERNAL_SERVER_ERROR
            ),
        }
    }

    #[actix_web::test]
    async fn test_explicit_policy_overrides_allowed_set() {
        let gate = RoleGate::allow([Role::Owner])
            .policy(GatePolicy::new(AllowedSet::new([Role::Inspector])));

        assert_eq!(gate.spec.allowed.roles(), &[Role::Inspector]);
        assert!(gate.spec.policy.is_some());
    }

    #[actix_web::test]
    async fn test_denied_role_is_not_redirected_to_the_guarded_path() {
        let state = state();
        let app = test::init_service(
            App::new().app_data(state.clone()).service(
                web::scope("/properties")
                    .wrap(RoleGate::allow([Role::Admin, Role::Owner]))
                    .service(protected),
            ),
        )
        .await;

        for role in [Role::Handyman, Role::Inspector] {
            let req = test::TestRequest::get()
                .uri("/properties")
                .insert_header(bearer(&state, role))
                .to_request();
            let res = test::call_service(&app, req).await;

            assert_eq!(res.status(), StatusCode::FORBIDDEN, "{}", role);
            assert!(location(&res).is_none());
            let body: serde_json::Value = test::read_body_json(res).await;
            assert!(body["redirect"].is_null());
        }

        let res = test::call_service(&app, test::TestRequest::get().uri("/properties").to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert!(location(&res).is_none());

        let req = test::TestRequest::get()
            .uri("/properties")
            .insert_header(bearer(&state, Role::Cleaner))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&res).as_deref(), Some("/cleanings"));
    }
}
