//! 서버리스 함수 자리표시자
//!
//! 캘린더 가져오기와 청소 일정 계산은 아직 구현되지 않았으며,
//! 호출 기록만 남기고 `{ "ok": true }`를 반환합니다.

use actix_web::{post, web, HttpResponse};
use serde_json::json;

/// iCal 가져오기
///
/// # Endpoint
/// `POST /api/v1/functions/icalimport`
#[post("/icalimport")]
pub async fn ical_import(body: web::Bytes) -> HttpResponse {
    log::info!("icalimport 호출 ({} bytes)", body.len());
    HttpResponse::Ok().json(json!({ "ok": true }))
}

/// 청소 일정 스케줄러
///
/// # Endpoint
/// `POST /api/v1/functions/scheduler`
#[post("/scheduler")]
pub async fn scheduler(body: web::Bytes) -> HttpResponse {
    log::info!("scheduler 호출 ({} bytes)", body.len());
    HttpResponse::Ok().json(json!({ "ok": true }))
}
