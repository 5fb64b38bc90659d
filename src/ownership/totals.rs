use serde::Serialize;

use super::{fixed_cost_per_year, maintenance_cost_per_year, tires_cost_per_year};
use crate::config::Config;
use crate::energy::average_energy_price;

/// 연간 주행거리 하한 [km]. 이후 나눗셈의 분모로 쓰인다.
pub const MIN_ANNUAL_KM: f64 = 1.0;

/// 유지비 계산 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdown {
    /// 계산에 사용된 연간 주행거리 [km]
    pub km_per_year: f64,
    /// 충전 비중 가중 평균 실효 단가 [통화/kWh]
    pub avg_energy_price: f64,
    pub energy_cost_per_km: f64,
    pub energy_cost_per_year: f64,
    pub fixed_cost_per_year: f64,
    pub tires_cost_per_year: f64,
    pub maintenance_cost_per_year: f64,
    pub total_per_year: f64,
    pub total_per_km: f64,
    pub total_per_month: f64,
}

impl CostBreakdown {
    /// 항목별 연간 비용 (표시용 이름, 금액).
    pub fn categories(&self) -> [(&'static str, f64); 4] {
        [
            ("에너지", self.energy_cost_per_year),
            ("고정비", self.fixed_cost_per_year),
            ("타이어", self.tires_cost_per_year),
            ("정비", self.maintenance_cost_per_year),
        ]
    }
}

/// 설정 전체로부터 유지비를 계산한다. 입력을 바꾸지 않는 순수 함수.
pub fn compute_totals(config: &Config) -> CostBreakdown {
    let km_per_year = config.usage.km_per_year.max(MIN_ANNUAL_KM);

    let avg_energy_price = average_energy_price(&config.vehicle, &config.tariff);
    let kwh_per_km = config.vehicle.consumption_base_kwh_100.max(0.0) / 100.0;
    let energy_cost_per_km = kwh_per_km * avg_energy_price;
    let energy_cost_per_year = energy_cost_per_km * km_per_year;

    let fixed_cost_per_year = fixed_cost_per_year(&config.fixed);
    let tires_cost_per_year = tires_cost_per_year(&config.tires, km_per_year);
    let maintenance_cost_per_year = maintenance_cost_per_year(&config.maintenance, km_per_year);

    let total_per_year =
        energy_cost_per_year + fixed_cost_per_year + tires_cost_per_year + maintenance_cost_per_year;

    CostBreakdown {
        km_per_year,
        avg_energy_price,
        energy_cost_per_km,
        energy_cost_per_year,
        fixed_cost_per_year,
        tires_cost_per_year,
        maintenance_cost_per_year,
        total_per_year,
        total_per_km: total_per_year / km_per_year,
        total_per_month: total_per_year / 12.0,
    }
}
