//! 세션/랜딩 핸들러
//!
//! 로그인 직후 첫 화면 선택에 `RoleHomeMap`을 사용합니다.

use actix_web::http::header;
use actix_web::{get, web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::core::AppState;
use crate::domain::models::access::AuthState;
use crate::errors::AppError;
use crate::middlewares::{extract_credential, resolve_session, SESSION_COOKIE};

async fn current_state(req: &HttpRequest, state: &AppState) -> AuthState {
    let credential = extract_credential(req.headers(), req.cookie(SESSION_COOKIE), state);
    let (auth_state, _) = resolve_session(state, credential.as_deref()).await;
    auth_state
}

/// 현재 역할의 첫 화면으로 이동합니다.
///
/// # Endpoint
/// `GET /home`
///
/// * 역할 확인 → `303` + 역할별 첫 화면
/// * 미인증 → `303` + 로그인 경로 (없으면 전역 기본 경로)
/// * 확인 중 → `503` (리다이렉트 없음)
#[get("/home")]
pub async fn landing(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let auth_state = current_state(&req, &state).await;

    if auth_state.loading {
        return HttpResponse::ServiceUnavailable()
            .insert_header((header::RETRY_AFTER, "1"))
            .finish();
    }

    let target = match auth_state.role {
        Some(role) => state.role_homes().home_for(Some(role)),
        None => state.anonymous_home(),
    };
    log::debug!("첫 화면 이동: 역할 {:?} -> {}", auth_state.role, target);

    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, target.to_string()))
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

/// 현재 세션 정보 조회
///
/// # Endpoint
/// `GET /api/v1/session`
///
/// ```json
/// { "authenticated": true, "role": "cleaner", "home": "/cleanings" }
/// ```
#[get("")]
pub async fn current_session(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let auth_state = current_state(&req, &state).await;

    if auth_state.loading {
        return Err(AppError::ExternalServiceError(
            "세션 확인을 완료하지 못했습니다".to_string(),
        ));
    }

    let home = match auth_state.role {
        Some(role) => state.role_homes().home_for(Some(role)),
        None => state.anonymous_home(),
    };

    Ok(HttpResponse::Ok().json(json!({
        "authenticated": auth_state.role.is_some(),
        "role": auth_state.role,
        "home": home,
    })))
}
