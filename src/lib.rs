//! 라티메어 호스트 접근 게이트
//!
//! 단기 임대 숙소 운영 콘솔의 역할 기반 화면 접근 제어 서비스입니다.
//! 현재 사용자의 역할을 확인해 허용된 화면만 보여주고, 허용되지 않은 역할은
//! 해당 역할이 쓸 수 있는 화면으로 한 번만 돌려보냅니다.
//!
//! # Features
//!
//! - **접근 게이트**: 역할 확인 대기 / 허용 / 거부 상태 머신과 1회 리다이렉트
//! - **RoleGate 미들웨어**: 같은 판단을 HTTP 스코프에 적용 (303 또는 401/403)
//! - **세션 토큰**: JWT 기반 역할 세션 발급 및 검증
//! - **초대**: 일회용 토큰으로 역할을 부여하는 초대 발급/수락
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← 화면/API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    RoleGate     │ ← 라우트별 역할 판단
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 세션 토큰, 신원 상태, 초대
//! └─────────────────┘
//! ```
//!
//! 게이트 판단 자체는 [`gate`] 모듈에 HTTP와 무관하게 구현되어 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use latimere_host::domain::models::access::{AllowedSet, AuthState, Role};
//! use latimere_host::gate::{gate, GatePhase};
//!
//! let mut guarded = gate(view, AllowedSet::new([Role::Admin, Role::Owner]), None, navigator);
//!
//! guarded.observe(AuthState::loading())?;            // 대기, 아무것도 그리지 않음
//! guarded.observe(AuthState::resolved(Role::Cleaner))?; // "/cleanings"로 1회 이동
//! assert_eq!(guarded.phase(), GatePhase::Unauthorized);
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod gate;
pub mod handlers;
pub mod middlewares;
pub mod routes;
pub mod services;
