//! RoleGate 판단 로직의 핵심적인 기능
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::cookie::Cookie;
use actix_web::http::header::{self, HeaderMap};
use actix_web::{web, Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;

use crate::core::AppState;
use crate::domain::models::access::AuthState;
use crate::domain::models::session::AuthenticatedSession;
use crate::errors::AppError;
use crate::gate::GateDecision;
use crate::middlewares::role_gate::{DenyMode, GateSpec};

/// 세션 토큰을 담는 쿠키 이름
pub const SESSION_COOKIE: &str = "latimere_session";

/// 실제 게이트 판단을 수행하는 서비스
pub struct RoleGateService<S> {
    pub service: Rc<S>,
    pub spec: Rc<GateSpec>,
}

impl<S, B> Service<ServiceRequest> for RoleGateService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let spec = self.spec.clone();

        Box::pin(async move {
            let Some(state) = req.app_data::<web::Data<AppState>>().cloned() else {
                log::error!("AppState가 등록되지 않은 앱에서 RoleGate 사용: {}", req.path());
                return Err(Error::from(AppError::InternalError(
                    "게이트 상태가 구성되지 않았습니다".to_string(),
                )));
            };

            let policy = spec.policy_for(&state);
            let credential = extract_credential(req.headers(), req.cookie(SESSION_COOKIE), &state);
            let (auth_state, session) = resolve_session(&state, credential.as_deref()).await;

            match policy.evaluate(&auth_state) {
                // 확인 중: 아무것도 렌더링하지 않고 리다이렉트하지 않음
                GateDecision::Suspend => {
                    log::debug!("세션 확인 중, 요청 보류: {}", req.path());
                    let response = HttpResponse::ServiceUnavailable()
                        .insert_header((header::RETRY_AFTER, "1"))
                        .insert_header((header::CACHE_CONTROL, "no-store"))
                        .finish();
                    Ok(deny(req, response))
                }
                GateDecision::Render => {
                    if let Some(session) = session {
                        log::debug!("접근 허용: 사용자 ID {} ({})", session.user_id, session.role);
                        req.extensions_mut().insert(session);
                    }
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                GateDecision::Redirect(target) => {
                    log::warn!(
                        "권한 부족: 역할 {:?}, 경로 {}, 허용 역할: {:?}",
                        auth_state.role,
                        req.path(),
                        policy.allowed().roles()
                    );
                    // 현재 경로로의 리다이렉트는 반복되므로 거부 응답으로 대신함
                    let self_target = same_path(&target, req.path());
                    if self_target {
                        log::warn!("리다이렉트 대상이 요청 경로와 같음, 거부로 응답: {}", target);
                    }
                    let redirect = (!self_target).then_some(target.as_str());

                    let response = match (spec.mode, self_target) {
                        (DenyMode::Redirect, false) => HttpResponse::SeeOther()
                            .insert_header((header::LOCATION, target.as_str()))
                            .insert_header((header::CACHE_CONTROL, "no-store"))
                            .finish(),
                        _ if auth_state.role.is_none() => HttpResponse::Unauthorized()
                            .insert_header((header::CACHE_CONTROL, "no-store"))
                            .json(serde_json::json!({
                                "error": "authentication_required",
                                "message": "유효한 인증 토큰이 필요합니다",
                                "redirect": redirect
                            })),
                        _ => HttpResponse::Forbidden()
                            .insert_header((header::CACHE_CONTROL, "no-store"))
                            .json(serde_json::json!({
                                "error": "insufficient_permissions",
                                "message": "접근 권한이 부족합니다",
                                "redirect": redirect
                            })),
                    };
                    Ok(deny(req, response))
                }
            }
        })
    }
}

fn same_path(target: &str, path: &str) -> bool {
    target.trim_end_matches('/') == path.trim_end_matches('/')
}

fn deny<B>(req: ServiceRequest, response: HttpResponse) -> ServiceResponse<EitherBody<B>> {
    let (req, _) = req.into_parts();
    ServiceResponse::new(req, response).map_into_right_body()
}

/// Authorization 헤더의 Bearer 토큰, 없으면 세션 쿠키를 자격 증명으로 사용합니다.
pub(crate) fn extract_credential(
    headers: &HeaderMap,
    session_cookie: Option<Cookie<'static>>,
    state: &AppState,
) -> Option<String> {
    let from_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| state.sessions().extract_bearer_token(value).ok())
        .map(str::to_string);

    from_header.or_else(|| session_cookie.map(|c| c.value().to_string()))
}

/// 제한 시간 안에 세션을 확인합니다.
///
/// 시간 초과나 확인기 장애는 확인 중 상태로 취급하여 보호된 화면을 열지 않습니다.
pub(crate) async fn resolve_session(
    state: &AppState,
    credential: Option<&str>,
) -> (AuthState, Option<AuthenticatedSession>) {
    let timeout = state.config().gate.resolve_timeout;

    match actix_web::rt::time::timeout(timeout, state.resolver().resolve(credential)).await {
        Ok(Ok(Some(session))) => (session.auth_state(), Some(session)),
        Ok(Ok(None)) => (AuthState::anonymous(), None),
        Ok(Err(e)) => {
            log::error!("세션 확인 실패: {}", e);
            (AuthState::loading(), None)
        }
        Err(_) => {
            log::error!("세션 확인 시간 초과 ({:?})", timeout);
            (AuthState::loading(), None)
        }
    }
}
