//! API 라우트 설정 모듈
//!
//! 화면 라우트와 API 엔드포인트를 기능별로 묶고, 보호가 필요한 스코프에는
//! `RoleGate`를 적용합니다.
//!
//! # Gate Usage
//!
//! ## 공개 라우트
//! ```rust,ignore
//! cfg.service(handlers::invitations::accept_invitation);
//! ```
//!
//! ## 역할 제한 화면 (거부 시 303 리다이렉트)
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/inspections")
//!         .wrap(RoleGate::allow([Role::Admin, Role::Owner, Role::Inspector]))
//!         .service(handlers::views::inspections)
//! );
//! ```
//!
//! ## 역할 제한 API (거부 시 401/403 JSON)
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/api/v1/invitations")
//!         .wrap(RoleGate::allow([Role::Admin, Role::Owner]).json_api())
//!         .service(handlers::invitations::create_invitation)
//! );
//! ```

use actix_web::web;
use serde_json::json;

use crate::domain::models::access::Role;
use crate::handlers;
use crate::middlewares::RoleGate;

/// 모든 라우트를 설정합니다
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new()
///     .app_data(state.clone())
///     .configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_view_routes(cfg);
    configure_session_routes(cfg);
    configure_invitation_routes(cfg);
    configure_function_routes(cfg);
}

/// 역할별 화면 라우트
///
/// | 경로 | 허용 역할 |
/// |------|-----------|
/// | `/properties` | admin, owner |
/// | `/cleanings` | admin, owner, cleaner |
/// | `/handyman/tasks` | admin, owner, handyman |
/// | `/inspections` | admin, owner, inspector |
/// | `/admin` | admin |
fn configure_view_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/properties")
            .wrap(RoleGate::allow([Role::Admin, Role::Owner]))
            .service(handlers::views::properties),
    );

    cfg.service(
        web::scope("/cleanings")
            .wrap(RoleGate::allow([Role::Admin, Role::Owner, Role::Cleaner]))
            .service(handlers::views::cleanings),
    );

    cfg.service(
        web::scope("/handyman/tasks")
            .wrap(RoleGate::allow([Role::Admin, Role::Owner, Role::Handyman]))
            .service(handlers::views::handyman_tasks),
    );

    cfg.service(
        web::scope("/inspections")
            .wrap(RoleGate::allow([Role::Admin, Role::Owner, Role::Inspector]))
            .service(handlers::views::inspections),
    );

    cfg.service(
        web::scope("/admin")
            .wrap(RoleGate::allow([Role::Admin]))
            .service(handlers::views::admin_console),
    );
}

fn configure_session_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::session::landing);
    cfg.service(web::scope("/api/v1/session").service(handlers::session::current_session));
}

/// 초대 라우트
///
/// 수락 엔드포인트는 공개이므로 보호된 스코프보다 먼저 등록합니다.
fn configure_invitation_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::invitations::accept_invitation);

    cfg.service(
        web::scope("/api/v1/invitations")
            .wrap(RoleGate::allow([Role::Admin, Role::Owner]).json_api())
            .service(handlers::invitations::create_invitation),
    );
}

fn configure_function_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/functions")
            .service(handlers::functions::ical_import)
            .service(handlers::functions::scheduler),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": "latimere_host",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
