//! 신원 제공자 구독 루프
//!
//! 제공자가 내보내는 인증 상태를 차례로 게이트에 전달합니다.

use futures_util::StreamExt;

use crate::gate::access_gate::{AccessGate, GatePhase};
use crate::gate::ports::{IdentityProvider, NavigationError, Navigator, View};

/// 신원 제공자의 인증 상태 스트림을 게이트에 연결합니다.
///
/// 스트림이 끝나거나 게이트가 정리(unmount)되면 종료하고 마지막 단계를 반환합니다.
/// 폴링 없이 다음 상태를 기다리며, 호출자가 future를 drop하면 그대로 취소됩니다.
///
/// # Errors
///
/// * `NavigationError` - 리다이렉트 실패 시 즉시 중단하고 전파
pub async fn drive<V, N, P>(gate: &mut AccessGate<V, N>, provider: &P) -> Result<GatePhase, NavigationError>
where
    V: View,
    N: Navigator,
    P: IdentityProvider + ?Sized,
{
    let mut states = provider.observe_auth_state();

    while let Some(state) = states.next().await {
        if !gate.is_mounted() {
            break;
        }
        gate.observe(state)?;
    }

    Ok(gate.phase())
}
