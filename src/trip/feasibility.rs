use serde::Serialize;

use super::request::{ConsumptionMode, TripRequest};
use crate::energy::source_price;
use crate::profile::{EnergyTariff, VehicleProfile};

/// 배터리 용량 하한 [kWh]. 0 용량 입력 시 나눗셈을 막는다.
pub const MIN_BATTERY_KWH: f64 = 1e-6;

/// 필요 충전량 비교 시 허용 오차 [%p].
const SOC_TOLERANCE_PCT: f64 = 1e-9;

/// 여행 계산 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripResult {
    /// 계산에 사용된 거리 [km]
    pub distance_km: f64,
    /// 환경 보정 후 소비율 [kWh/100km]
    pub consumption_kwh_100: f64,
    /// 환경 보정 계수 (1 = 보정 없음)
    pub factor: f64,
    /// 필요 에너지 [kWh]
    pub energy_kwh: f64,
    /// 손실 반영 실효 단가 [통화/kWh]
    pub price_per_kwh: f64,
    /// 여행 에너지 비용 [통화]
    pub cost: f64,
    /// 필요 충전량 [%]
    pub needed_pct: f64,
    pub start_soc_pct: f64,
    pub target_soc_pct: f64,
    /// 출발-목표 사이 사용 가능 충전량 [%]
    pub available_pct: f64,
    /// 중간 충전 없이 도달 가능 여부
    pub ok: bool,
    /// 부족 충전량 [%]
    pub extra_pct: f64,
    /// 부족 에너지 [kWh]
    pub extra_kwh: f64,
    /// 부족 에너지 충전 비용 [통화]
    pub extra_cost: f64,
    /// 경고/주의 메시지
    pub warnings: Vec<String>,
}

fn base_consumption(
    vehicle: &VehicleProfile,
    mode: ConsumptionMode,
    warnings: &mut Vec<String>,
) -> f64 {
    let override_or_base = |value: Option<f64>| match value {
        Some(v) if v > 0.0 => v,
        _ => vehicle.consumption_base_kwh_100,
    };
    let base = match mode {
        ConsumptionMode::Custom { kwh_100km } => {
            if kwh_100km <= 0.0 {
                warnings.push(
                    "사용자 지정 소비율이 0 이하입니다. 필요 에너지가 0으로 계산됩니다.".to_string(),
                );
            }
            kwh_100km
        }
        ConsumptionMode::Base => vehicle.consumption_base_kwh_100,
        ConsumptionMode::Kmh90 => override_or_base(vehicle.consumption_90_kwh_100),
        ConsumptionMode::Kmh110 => override_or_base(vehicle.consumption_110_kwh_100),
        ConsumptionMode::Kmh130 => override_or_base(vehicle.consumption_130_kwh_100),
    };
    base.max(0.0)
}

/// 여행 에너지, 비용, 무충전 도달 가능 여부를 계산한다.
///
/// 여행은 평균 단가가 아닌 선택한 충전 경로 하나의 단가를 쓴다.
/// 도달이 불가능해도 오류가 아니며, 부족분(추가 충전량/비용)을 함께 돌려준다.
pub fn compute_trip(
    vehicle: &VehicleProfile,
    tariff: &EnergyTariff,
    request: &TripRequest,
) -> TripResult {
    let mut warnings = Vec::new();
    let distance_km = request.distance_km.max(0.0);

    let base = base_consumption(vehicle, request.mode, &mut warnings);
    // 악화만 반영한다. 음수 보정(소비 감소)은 0으로 본다.
    let factor =
        1.0 + (request.temp_factor_pct.max(0.0) + request.hvac_factor_pct.max(0.0)) / 100.0;
    let consumption_kwh_100 = base * factor;

    let energy_kwh = consumption_kwh_100 / 100.0 * distance_km;
    let price_per_kwh = source_price(vehicle, tariff, request.source);
    let cost = energy_kwh * price_per_kwh;

    let battery_kwh = vehicle.usable_battery_kwh.max(MIN_BATTERY_KWH);
    let needed_pct = energy_kwh / battery_kwh * 100.0;

    let start_soc_pct = request.start_soc_pct.clamp(0.0, 100.0);
    let target_soc_pct = request.target_soc_pct.clamp(0.0, 100.0);
    let available_pct = (start_soc_pct - target_soc_pct).max(0.0);

    let ok = needed_pct <= available_pct + SOC_TOLERANCE_PCT;
    let (extra_pct, extra_kwh, extra_cost) = if ok {
        (0.0, 0.0, 0.0)
    } else {
        let extra_pct = needed_pct - available_pct;
        let extra_kwh = extra_pct / 100.0 * battery_kwh;
        (extra_pct, extra_kwh, extra_kwh * price_per_kwh)
    };

    if !ok && target_soc_pct >= start_soc_pct {
        warnings.push(format!(
            "목표 충전량({target_soc_pct:.0}%)이 출발 충전량({start_soc_pct:.0}%) 이상입니다."
        ));
    }

    TripResult {
        distance_km,
        consumption_kwh_100,
        factor,
        energy_kwh,
        price_per_kwh,
        cost,
        needed_pct,
        start_soc_pct,
        target_soc_pct,
        available_pct,
        ok,
        extra_pct,
        extra_kwh,
        extra_cost,
        warnings,
    }
}
