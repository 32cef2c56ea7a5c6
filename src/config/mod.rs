//! # Configuration Module
//!
//! 환경 변수 기반 설정을 한 곳에서 읽어 타입이 있는 구조체로 제공합니다.
//!
//! 설정은 애플리케이션 시작 시 `AppConfig::from_env()`로 한 번 만들어지고,
//! `AppState`에 담겨 핸들러와 미들웨어로 전달됩니다. 전역 정적 조회는 사용하지 않습니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 세션 설정 (프로덕션 필수)
//! export JWT_SECRET="your-super-secret-key"
//!
//! # 게이트 설정
//! export GATE_DEFAULT_FALLBACK="/properties"
//! export GATE_LOGIN_PATH="/login"
//! export GATE_FALLBACK_STRATEGY="cleaner_home"
//! ```

pub mod app_config;

pub use app_config::*;
