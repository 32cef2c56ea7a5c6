//! 접근 게이트 상태 머신
//!
//! ```text
//! UNRESOLVED   : loading = true                   -> 렌더링 없음
//! AUTHORIZED   : loading = false, role ∈ 허용 목록  -> 화면 렌더링
//! UNAUTHORIZED : loading = false, role ∉ 허용 목록  -> 한 번 리다이렉트
//! ```
//!
//! 상태 전이는 외부에서 전달되는 `AuthState` 변화로만 일어나며,
//! 게이트 자체는 타이머를 가지지 않습니다.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::domain::models::access::{AllowedSet, AuthState};
use crate::gate::policy::{GateDecision, GatePolicy};
use crate::gate::ports::{NavigationError, Navigator, View};

/// 게이트의 현재 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePhase {
    Unresolved,
    Authorized,
    Unauthorized,
}

/// 게이트의 마운트 여부를 공유하는 핸들
///
/// 세션/컴포넌트가 정리되면 `unmount()`를 호출합니다.
/// 이후 게이트는 어떤 렌더링이나 리다이렉트도 수행하지 않습니다.
#[derive(Debug, Clone)]
pub struct MountHandle(Arc<AtomicBool>);

impl MountHandle {
    fn mounted() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn unmount(&self) {
        self.0.store(false, Ordering::Release);
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// 보호된 화면을 감싸는 접근 게이트
pub struct AccessGate<V, N> {
    view: V,
    policy: GatePolicy,
    navigator: N,
    last_state: Option<AuthState>,
    phase: GatePhase,
    mount: MountHandle,
}

impl<V, N> AccessGate<V, N>
where
    V: View,
    N: Navigator,
{
    pub fn new(view: V, policy: GatePolicy, navigator: N) -> Self {
        Self {
            view,
            policy,
            navigator,
            last_state: None,
            phase: GatePhase::Unresolved,
            mount: MountHandle::mounted(),
        }
    }

    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    pub fn policy(&self) -> &GatePolicy {
        &self.policy
    }

    pub fn mount_handle(&self) -> MountHandle {
        self.mount.clone()
    }

    pub fn is_mounted(&self) -> bool {
        self.mount.is_mounted()
    }

    pub fn unmount(&self) {
        self.mount.unmount();
    }

    /// 새 인증 상태를 반영합니다.
    ///
    /// `(role, loading)`이 직전과 같으면 아무 일도 하지 않으므로
    /// 같은 상태가 반복 전달되어도 리다이렉트는 한 번만 일어납니다.
    ///
    /// # Errors
    ///
    /// * `NavigationError` - 내비게이터의 리다이렉트 실패 (그대로 전파)
    pub fn observe(&mut self, state: AuthState) -> Result<GatePhase, NavigationError> {
        if !self.mount.is_mounted() {
            log::debug!("정리된 게이트에 전달된 인증 상태 무시: {:?}", state);
            return Ok(self.phase);
        }

        if self.last_state == Some(state) {
            return Ok(self.phase);
        }
        self.last_state = Some(state);

        match self.policy.evaluate(&state) {
            GateDecision::Suspend => {
                self.phase = GatePhase::Unresolved;
            }
            GateDecision::Render => {
                log::debug!("접근 허용: 역할 {:?}", state.role);
                self.phase = GatePhase::Authorized;
            }
            GateDecision::Redirect(target) => {
                log::warn!(
                    "권한 부족: 역할 {:?}, 허용 역할: {:?}, 이동 경로: {}",
                    state.role,
                    self.policy.allowed().roles(),
                    target
                );
                self.phase = GatePhase::Unauthorized;
                self.navigator.redirect(&target)?;
            }
        }

        Ok(self.phase)
    }

    /// 허용된 상태에서만 보호된 화면을 렌더링합니다.
    ///
    /// 입력 `props`는 변경 없이 그대로 화면에 전달됩니다.
    pub fn render(&self, props: V::Props) -> Option<V::Output> {
        if self.mount.is_mounted() && self.phase == GatePhase::Authorized {
            Some(self.view.render(props))
        } else {
            None
        }
    }
}

/// 화면을 허용 목록과 폴백 경로로 감쌉니다.
///
/// `fallback`이 없으면 전역 기본 경로(`/properties`)를 사용합니다.
///
/// # Examples
///
/// ```rust,ignore
/// let mut guarded = gate(PropertiesView, AllowedSet::new([Role::Admin, Role::Owner]), None, &navigator);
/// guarded.observe(AuthState::resolved(Role::Owner))?;
/// let page = guarded.render(props);
/// ```
pub fn gate<V, N>(view: V, allowed: AllowedSet, fallback: Option<&str>, navigator: N) -> AccessGate<V, N>
where
    V: View,
    N: Navigator,
{
    let policy = match fallback {
        Some(fallback) => GatePolicy::new(allowed).with_fallback(fallback),
        None => GatePolicy::new(allowed),
    };
    AccessGate::new(view, policy, navigator)
}
