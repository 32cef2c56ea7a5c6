//! 도메인 모델
//!
//! - [`access`] - 역할, 허용 목록, 역할 확인 상태, 역할별 첫 화면
//! - [`session`] - 세션 토큰 클레임과 인증된 세션
//! - [`invitation`] - 역할 초대

pub mod access;
pub mod invitation;
pub mod session;
