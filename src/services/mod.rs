//! 비즈니스 서비스 계층
//!
//! - [`session`] - 세션 토큰 발급/검증과 프로세스 내 신원 제공자
//! - [`invitations`] - 역할 초대 발급/수락
//!
//! 모든 서비스는 `AppState::new`에서 명시적으로 생성됩니다.

pub mod invitations;
pub mod session;
