//! 차량 유지비(연간/월간/km당) 계산 모듈.
//! 에너지, 고정비, 타이어, 정비 항목별 연간 비용을 구해 합산한다.

pub mod fixed_costs;
pub mod maintenance;
pub mod tires;
pub mod totals;

pub use fixed_costs::fixed_cost_per_year;
pub use maintenance::{maintenance_cost_per_year, maintenance_item_annual_cost};
pub use tires::tires_cost_per_year;
pub use totals::{compute_totals, CostBreakdown, MIN_ANNUAL_KM};
