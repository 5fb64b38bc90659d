//! 전기차 유지비/여행 계산 로직을 라이브러리로 분리하여 CLI 외의 프론트엔드에서도 재사용한다.

pub mod app;
pub mod cli;
pub mod config;
pub mod energy;
pub mod input;
pub mod ownership;
pub mod profile;
pub mod trip;
pub mod ui_cli;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// 로그 출력을 초기화한다. `RUST_LOG`가 없으면 warn 이상만 표시한다.
///
/// 한 번만 호출해야 한다.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}
