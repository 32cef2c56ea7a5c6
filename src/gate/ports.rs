//! 접근 게이트의 외부 협력자 인터페이스
//!
//! - [`IdentityProvider`] - 인증 상태 변화를 스트림으로 전달 (상류)
//! - [`Navigator`] - 현재 세션을 다른 경로로 이동 (하류)
//! - [`View`] - 게이트가 감싸는 보호된 화면

use futures_util::stream::BoxStream;
use thiserror::Error;

use crate::domain::models::access::AuthState;

/// 현재 세션의 역할을 비동기로 확인하는 신원 제공자
///
/// 최소 한 번은 `loading = false` 상태를 전달해야 합니다.
/// 그렇지 않으면 게이트는 렌더링을 보류한 채로 계속 기다립니다.
pub trait IdentityProvider {
    /// 현재 상태부터 시작하는 인증 상태 스트림을 반환합니다.
    fn observe_auth_state(&self) -> BoxStream<'static, AuthState>;
}

/// 리다이렉트 실패
///
/// 게이트는 이 에러를 삼키지 않고 호출자에게 그대로 전달합니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Invalid redirect target: {0}")]
    InvalidTarget(String),

    #[error("Navigator unavailable: {0}")]
    Unavailable(String),
}

/// 현재 위치를 대체하는 내비게이터
///
/// 히스토리를 남기지 않아 뒤로 가기로 보호된 화면에 돌아오지 않습니다.
pub trait Navigator {
    fn redirect(&self, path: &str) -> Result<(), NavigationError>;
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn redirect(&self, path: &str) -> Result<(), NavigationError> {
        (**self).redirect(path)
    }
}

/// 게이트가 감싸는 보호된 화면
///
/// 허용된 경우 게이트는 입력 `Props`를 변경 없이 그대로 전달합니다.
pub trait View {
    type Props;
    type Output;

    fn render(&self, props: Self::Props) -> Self::Output;
}
