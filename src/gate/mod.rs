//! # Access Gate
//!
//! 보호된 화면의 렌더링을 현재 세션의 역할로 통제하는 접근 게이트입니다.
//!
//! ## 모듈 구성
//!
//! - [`policy`] - `AuthState` 하나에 대한 순수 판단 (`Suspend` / `Render` / `Redirect`)
//! - [`access_gate`] - 상태 변화에 반응하는 게이트 상태 머신
//! - [`driver`] - 신원 제공자 스트림을 게이트에 연결하는 비동기 루프
//! - [`ports`] - 신원 제공자, 내비게이터, 화면 인터페이스
//!
//! HTTP 요청 단위의 게이트는 [`crate::middlewares::RoleGate`]가 같은 정책으로 구현합니다.
//!
//! ## 판단 규칙
//!
//! 1. `loading = true` → 아무것도 렌더링하지 않고 리다이렉트하지 않음
//! 2. 역할이 허용 목록에 있음 → 화면을 그대로 렌더링
//! 3. 그 외 → 한 번만 리다이렉트 (`cleaner`는 `/cleanings`, 나머지는 폴백 경로)

pub mod access_gate;
pub mod driver;
pub mod policy;
pub mod ports;

pub use access_gate::{gate, AccessGate, GatePhase, MountHandle};
pub use driver::drive;
pub use policy::{FallbackStrategy, GateDecision, GatePolicy, CLEANER_HOME};
pub use ports::{IdentityProvider, NavigationError, Navigator, View};
