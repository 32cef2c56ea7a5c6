//! API 요청/응답 DTO
//!
//! 요청 DTO는 `validator::Validate`로 검증한 뒤 서비스로 전달합니다.

pub mod invitations;
