//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 역할 게이트 (RoleGate)
//! - Bearer 토큰 또는 `latimere_session` 쿠키에서 세션 확인
//! - 허용 목록에 있는 역할만 보호된 화면으로 전달
//! - 거부 시 `303 See Other` 리다이렉트 (JSON API는 401/403)
//! - 세션 확인이 끝나지 않으면 `503`으로 보류 (리다이렉트 없음)
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! App::new()
//!     .app_data(state.clone())
//!     .service(
//!         web::scope("/properties")
//!             .wrap(RoleGate::allow([Role::Admin, Role::Owner]))
//!             .service(handlers::views::properties)
//!     )
//! ```

pub mod role_gate;
mod role_gate_inner;

pub(crate) use role_gate_inner::{extract_credential, resolve_session};
pub use role_gate::{DenyMode, GateSpec, RoleGate};
pub use role_gate_inner::SESSION_COOKIE;
