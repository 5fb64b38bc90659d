//! 단일 여행의 에너지/비용 및 무충전 도달 가능 여부 계산 모듈.

pub mod feasibility;
pub mod history;
pub mod request;

pub use feasibility::{compute_trip, TripResult, MIN_BATTERY_KWH};
pub use history::{TripHistory, TripRecord};
pub use request::{ConsumptionMode, TripRequest};
