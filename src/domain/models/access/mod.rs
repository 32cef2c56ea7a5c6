//! 역할 기반 접근 제어 모델
//!
//! 접근 게이트가 판단에 사용하는 값 타입들을 정의합니다.
//!
//! - [`Role`] - 닫힌 역할 열거형
//! - [`AllowedSet`] - 화면별 허용 역할 목록
//! - [`AuthState`] - 비동기 역할 확인 상태
//! - [`RoleHomeMap`] - 역할별 기본 랜딩 경로

pub mod allowed_set;
pub mod auth_state;
pub mod role;
pub mod role_home;

pub use allowed_set::AllowedSet;
pub use auth_state::AuthState;
pub use role::Role;
pub use role_home::{RoleHomeMap, DEFAULT_HOME};
