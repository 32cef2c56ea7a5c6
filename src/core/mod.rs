//! # Core Module
//!
//! 애플리케이션 수명 주기를 가지는 공유 상태를 제공합니다.
//!
//! ```rust,ignore
//! let state = web::Data::new(AppState::new(AppConfig::from_env()?)?);
//!
//! HttpServer::new(move || App::new().app_data(state.clone()))
//!     .run()
//!     .await?;
//!
//! state.shutdown();
//! ```

pub mod app_state;

pub use app_state::AppState;
