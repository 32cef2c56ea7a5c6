//! 애플리케이션 설정
//!
//! 시작 시점에 환경 변수에서 한 번 읽어 `AppConfig`를 만들고,
//! 이후에는 `AppState`를 통해 명시적으로 전달합니다.

use std::env;
use std::time::Duration;

use crate::errors::{AppError, AppResult};
use crate::gate::FallbackStrategy;
use crate::domain::models::access::DEFAULT_HOME;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        *self == Environment::Production
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// CORS 허용 Origin 목록
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 세션 JWT 설정
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
}

/// 접근 게이트 설정
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// 권한 없는 역할의 기본 리다이렉트 경로
    pub default_fallback: String,
    /// 인증되지 않은 신원의 리다이렉트 경로 (없으면 `default_fallback`)
    pub login_path: Option<String>,
    pub fallback_strategy: FallbackStrategy,
    /// 요청당 세션 확인 제한 시간
    pub resolve_timeout: Duration,
}

/// Rate Limiting 설정
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

/// 초대 설정
#[derive(Debug, Clone)]
pub struct InvitationConfig {
    pub ttl_hours: i64,
}

/// 전체 애플리케이션 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub gate: GateConfig,
    pub rate_limit: RateLimitConfig,
    pub invitations: InvitationConfig,
}

const DEV_JWT_SECRET: &str = "latimere-dev-secret";

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    ///
    /// # Environment Variables
    ///
    /// * `ENVIRONMENT` - development, test, staging, production (기본값: production)
    /// * `HOST` / `PORT` - 바인딩 주소 (기본값: 127.0.0.1:8080)
    /// * `JWT_SECRET` - 세션 서명 키 (프로덕션 필수)
    /// * `JWT_EXPIRATION_HOURS` - 세션 유효 시간 (기본값: 24)
    /// * `GATE_DEFAULT_FALLBACK` - 기본 리다이렉트 경로 (기본값: /properties)
    /// * `GATE_LOGIN_PATH` - 미인증 리다이렉트 경로 (기본값: 없음)
    /// * `GATE_FALLBACK_STRATEGY` - cleaner_home 또는 role_home (기본값: cleaner_home)
    /// * `GATE_RESOLVE_TIMEOUT_MS` - 세션 확인 제한 시간 (기본값: 2000)
    /// * `INVITATION_TTL_HOURS` - 초대 유효 시간 (기본값: 72)
    /// * `RATE_LIMIT_PER_SECOND` / `RATE_LIMIT_BURST_SIZE` - (기본값: 100 / 200)
    /// * `CORS_ALLOWED_ORIGINS` - 쉼표로 구분된 Origin 목록
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 숫자 파싱 실패, 알 수 없는 폴백 전략, 프로덕션 JWT_SECRET 누락
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 조회 함수로 설정을 만듭니다. 테스트에서 환경 변수 대신 사용합니다.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Environment::from_str(
            &lookup("ENVIRONMENT").unwrap_or_else(|| "production".to_string()),
        );

        let secret = match lookup("JWT_SECRET") {
            Some(secret) if !secret.trim().is_empty() => secret,
            _ if environment.is_production() => {
                return Err(AppError::ConfigError(
                    "프로덕션 환경에서는 JWT_SECRET이 필요합니다".to_string(),
                ));
            }
            _ => {
                log::warn!("JWT_SECRET not set, using development default");
                DEV_JWT_SECRET.to_string()
            }
        };

        let fallback_strategy = match lookup("GATE_FALLBACK_STRATEGY") {
            Some(value) => value.parse::<FallbackStrategy>()?,
            None => FallbackStrategy::default(),
        };

        let allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_else(|| {
                vec![
                    "http://localhost:3000".to_string(),
                    "http://127.0.0.1:3000".to_string(),
                ]
            });

        Ok(Self {
            server: ServerConfig {
                host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
                port: parse_or(&lookup, "PORT", 8080)?,
                allowed_origins,
            },
            jwt: JwtConfig {
                secret,
                expiration_hours: parse_or(&lookup, "JWT_EXPIRATION_HOURS", 24)?,
            },
            gate: GateConfig {
                default_fallback: lookup("GATE_DEFAULT_FALLBACK")
                    .unwrap_or_else(|| DEFAULT_HOME.to_string()),
                login_path: lookup("GATE_LOGIN_PATH").filter(|path| !path.trim().is_empty()),
                fallback_strategy,
                resolve_timeout: Duration::from_millis(parse_or(
                    &lookup,
                    "GATE_RESOLVE_TIMEOUT_MS",
                    2000,
                )?),
            },
            rate_limit: RateLimitConfig {
                per_second: parse_or(&lookup, "RATE_LIMIT_PER_SECOND", 100)?,
                burst_size: parse_or(&lookup, "RATE_LIMIT_BURST_SIZE", 200)?,
            },
            invitations: InvitationConfig {
                ttl_hours: parse_or(&lookup, "INVITATION_TTL_HOURS", 72)?,
            },
            environment,
        })
    }

    /// 테스트용 설정
    pub fn for_tests() -> Self {
        let mut config = Self::from_lookup(|key| match key {
            "ENVIRONMENT" => Some("test".to_string()),
            "JWT_SECRET" => Some("test-secret".to_string()),
            _ => None,
        })
        .unwrap_or_else(|e| panic!("테스트 설정 생성 실패: {}", e));
        config.gate.resolve_timeout = Duration::from_millis(200);
        config
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> AppResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().map_err(|e| {
            AppError::ConfigError(format!("{} 파싱 실패 ({}): {}", key, raw, e))
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_defaults_in_development() {
        let config = AppConfig::from_lookup(lookup_from(&[("ENVIRONMENT", "dev")])).unwrap();

        assert_eq!(config.server.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.jwt.secret, DEV_JWT_SECRET);
        assert_eq!(config.jwt.expiration_hours, 24);
        assert_eq!(config.gate.default_fallback, "/properties");
        assert_eq!(config.gate.login_path, None);
        assert_eq!(config.gate.fallback_strategy, FallbackStrategy::CleanerHome);
        assert_eq!(config.gate.resolve_timeout, Duration::from_millis(2000));
        assert_eq!(config.invitations.ttl_hours, 72);
        assert_eq!(config.rate_limit.per_second, 100);
        assert_eq!(config.rate_limit.burst_size, 200);
    }

    #[test]
    fn test_production_requires_jwt_secret() {
        let result = AppConfig::from_lookup(lookup_from(&[("ENVIRONMENT", "production")]));
        assert!(matches!(result, Err(AppError::ConfigError(_))));

        let config = AppConfig::from_lookup(lookup_from(&[
            ("ENVIRONMENT", "production"),
            ("JWT_SECRET", "prod-secret"),
        ]))
        .unwrap();
        assert_eq!(config.jwt.secret, "prod-secret");
    }

    #[test]
    fn test_gate_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("ENVIRONMENT", "test"),
            ("GATE_DEFAULT_FALLBACK", "/dashboard"),
            ("GATE_LOGIN_PATH", "/login"),
            ("GATE_FALLBACK_STRATEGY", "role_home"),
            ("GATE_RESOLVE_TIMEOUT_MS", "500"),
            ("CORS_ALLOWED_ORIGINS", "https://app.latimere.com, https://admin.latimere.com"),
        ]))
        .unwrap();

        assert_eq!(config.gate.default_fallback, "/dashboard");
        assert_eq!(config.gate.login_path.as_deref(), Some("/login"));
        assert_eq!(config.gate.fallback_strategy, FallbackStrategy::RoleHome);
        assert_eq!(config.gate.resolve_timeout, Duration::from_millis(500));
        assert_eq!(
            config.server.allowed_origins,
            vec!["https://app.latimere.com", "https://admin.latimere.com"]
        );
    }

    #[test]
    fn test_invalid_numbers_are_config_errors() {
        let result = AppConfig::from_lookup(lookup_from(&[
            ("ENVIRONMENT", "test"),
            ("PORT", "eighty"),
        ]));
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }
}
