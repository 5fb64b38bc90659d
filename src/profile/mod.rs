//! 비용 계산에 쓰이는 입력 레코드 모음.
//! 차량, 전기 요금, 주행거리, 고정비, 타이어, 정비 항목으로 구성한다.

pub mod costs;
pub mod maintenance;
pub mod tariff;
pub mod vehicle;

pub use costs::{FixedCosts, TireProfile, UsageProfile};
pub use maintenance::{
    default_maintenance, MaintenanceError, MaintenanceItem, MaintenanceSchedule,
};
pub use tariff::EnergyTariff;
pub use vehicle::VehicleProfile;
