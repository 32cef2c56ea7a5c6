//! 프로세스 내 신원 제공자
//!
//! `tokio::sync::watch` 채널에 현재 `AuthState`를 보관하고,
//! 구독자에게는 현재 상태부터 시작하는 상태 스트림을 제공합니다.

use futures_util::stream::{self, BoxStream, StreamExt};
use tokio::sync::watch;

use crate::domain::models::access::AuthState;
use crate::gate::IdentityProvider;
use crate::services::session::token_service::SessionResolver;

/// 하나의 세션에 대한 인증 상태 소유자
///
/// 상태를 바꾸는 쪽은 이 구조체뿐이며 게이트는 스트림으로 읽기만 합니다.
pub struct SessionIdentity {
    sender: watch::Sender<AuthState>,
}

impl SessionIdentity {
    /// 확인 중(`loading`) 상태로 시작합니다.
    pub fn new() -> Self {
        let (sender, _) = watch::channel(AuthState::loading());
        Self { sender }
    }

    pub fn current(&self) -> AuthState {
        *self.sender.borrow()
    }

    /// 새 상태를 게시합니다. 같은 상태는 구독자에게 다시 알리지 않습니다.
    pub fn set(&self, state: AuthState) {
        self.sender.send_if_modified(|current| {
            if *current == state {
                false
            } else {
                *current = state;
                true
            }
        });
    }

    pub fn sign_out(&self) {
        self.set(AuthState::anonymous());
    }

    /// 자격 증명을 확인하고 결과 상태를 게시합니다.
    ///
    /// 확인기 장애 시에는 확인 중 상태를 유지합니다.
    pub async fn resolve_with<R>(&self, resolver: &R, credential: Option<&str>) -> AuthState
    where
        R: SessionResolver + ?Sized,
    {
        self.set(AuthState::loading());

        match resolver.resolve(credential).await {
            Ok(session) => self.set(AuthState::from(session.map(|s| s.role))),
            Err(e) => log::error!("세션 확인 실패, 확인 중 상태 유지: {}", e),
        }

        self.current()
    }
}

impl Default for SessionIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityProvider for SessionIdentity {
    fn observe_auth_state(&self) -> BoxStream<'static, AuthState> {
        let mut receiver = self.sender.subscribe();
        let initial = *receiver.borrow_and_update();

        let changes = stream::unfold(receiver, |mut receiver| async move {
            receiver.changed().await.ok()?;
            let state = *receiver.borrow_and_update();
            Some((state, receiver))
        });

        stream::once(async move { initial }).chain(changes).boxed()
    }
}
