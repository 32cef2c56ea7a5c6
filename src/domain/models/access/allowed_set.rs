//! 보호된 화면별 허용 역할 목록
use serde::{Deserialize, Serialize};

use crate::domain::models::access::role::Role;

/// 보호된 화면에 접근할 수 있는 역할의 순서 있는 목록
///
/// 라우트 구성 시점에 한 번 만들어지며 이후에는 변경되지 않습니다.
/// 빈 목록도 유효한 설정이며, 이 경우 모든 역할이 거부됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllowedSet(Vec<Role>);

impl AllowedSet {
    pub fn new(roles: impl IntoIterator<Item = Role>) -> Self {
        Self(roles.into_iter().collect())
    }

    /// 역할이 존재하고 목록에 포함되어 있을 때만 `true`를 반환합니다.
    pub fn permits(&self, role: Option<Role>) -> bool {
        match role {
            Some(role) => self.0.contains(&role),
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn roles(&self) -> &[Role] {
        &self.0
    }
}
