//! 충전 손실을 반영한 전기 단가 계산 모듈.

pub mod pricing;
pub mod source;

pub use pricing::*;
pub use source::ChargingSource;
