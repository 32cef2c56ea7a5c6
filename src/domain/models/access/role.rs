//! 사용자 역할 정의
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// 인증된 신원에 부여되는 역할
///
/// 닫힌 열거형으로 정의하여 허용 목록 검사를 컴파일 타임에 확인할 수 있도록 합니다.
/// 직렬화 시 소문자 문자열(`"admin"`, `"cleaner"` 등)을 사용합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// 운영 관리자
    Admin,
    /// 숙소 소유자
    Owner,
    /// 청소 담당자
    Cleaner,
    /// 시설 보수 담당자
    Handyman,
    /// 점검 담당자
    Inspector,
}

impl Role {
    /// 정의된 모든 역할
    pub const ALL: [Role; 5] = [
        Role::Admin,
        Role::Owner,
        Role::Cleaner,
        Role::Handyman,
        Role::Inspector,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Owner => "owner",
            Role::Cleaner => "cleaner",
            Role::Handyman => "handyman",
            Role::Inspector => "inspector",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    /// 대소문자와 앞뒤 공백을 무시하고 역할 이름을 파싱합니다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "owner" => Ok(Role::Owner),
            "cleaner" => Ok(Role::Cleaner),
            "handyman" => Ok(Role::Handyman),
            "inspector" => Ok(Role::Inspector),
            other => Err(AppError::ValidationError(format!("알 수 없는 역할입니다: {}", other))),
        }
    }
}
