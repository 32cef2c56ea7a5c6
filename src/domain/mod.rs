//! # Domain Layer Module
//!
//! 접근 게이트와 초대 기능이 공유하는 도메인 타입들입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Models  - 역할, 인증 상태, 세션, 초대
//! └── DTOs    - API 요청/응답 계약
//!      │
//!      ▼
//! Gate / Services
//! ```
//!
//! 도메인 타입은 HTTP나 저장소에 의존하지 않습니다. 단, 세션 모델의
//! `AuthenticatedSession`은 핸들러 추출자로 쓰이기 위해 `FromRequest`를 구현합니다.

pub mod dto;
pub mod models;
