//! # HTTP Handlers
//!
//! 라우트별 요청 처리 함수들입니다. 접근 제어는 핸들러가 아닌 라우트의
//! `RoleGate` 미들웨어가 담당하며, 핸들러는 통과한 세션을 `AuthenticatedSession`
//! 추출자로 받습니다.
//!
//! | 모듈 | 경로 |
//! |------|------|
//! | [`views`] | `/properties`, `/cleanings`, `/handyman/tasks`, `/inspections`, `/admin` |
//! | [`session`] | `/home`, `/api/v1/session` |
//! | [`invitations`] | `/api/v1/invitations`, `/api/v1/invitations/accept` |
//! | [`functions`] | `/api/v1/functions/icalimport`, `/api/v1/functions/scheduler` |

pub mod functions;
pub mod invitations;
pub mod session;
pub mod views;
