//! 보호된 화면 핸들러
//!
//! UI 렌더링은 프런트엔드 몫이므로 각 화면은 게이트를 통과한 세션 정보만 돌려줍니다.
//! 접근 허용 여부는 모두 라우트의 `RoleGate`가 결정합니다.

use actix_web::{get, HttpResponse};
use serde_json::json;

use crate::domain::models::session::AuthenticatedSession;

fn view_response(view: &str, session: &AuthenticatedSession) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "view": view,
        "role": session.role,
        "user_id": session.user_id,
    }))
}

/// 숙소/유닛 목록 (`admin`, `owner`)
#[get("")]
pub async fn properties(session: AuthenticatedSession) -> HttpResponse {
    view_response("properties", &session)
}

/// 청소 일정 (`admin`, `owner`, `cleaner`)
#[get("")]
pub async fn cleanings(session: AuthenticatedSession) -> HttpResponse {
    view_response("cleanings", &session)
}

/// 시설 보수 작업 (`admin`, `owner`, `handyman`)
#[get("")]
pub async fn handyman_tasks(session: AuthenticatedSession) -> HttpResponse {
    view_response("handyman_tasks", &session)
}

/// 점검 (`admin`, `owner`, `inspector`)
#[get("")]
pub async fn inspections(session: AuthenticatedSession) -> HttpResponse {
    view_response("inspections", &session)
}

/// 관리자 콘솔 (`admin`)
#[get("")]
pub async fn admin_console(session: AuthenticatedSession) -> HttpResponse {
    view_response("admin", &session)
}
