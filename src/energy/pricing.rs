use serde::Serialize;

use super::source::ChargingSource;
use crate::profile::{EnergyTariff, VehicleProfile};

/// 충전 손실 상한 [%]. 100%에 가까운 오입력으로 단가가 발산하지 않게 막는다.
pub const MAX_CHARGE_LOSS_PCT: f64 = 95.0;

/// 정규화된 충전 비중. 세 값의 합은 항상 100이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizedShares {
    pub home_pct: f64,
    pub ac_pct: f64,
    pub fast_pct: f64,
}

/// 충전 비중을 합계 100으로 정규화한다.
///
/// 음수는 0으로 보고, 세 값이 모두 0 이하면 전부 가정 충전(100/0/0)으로 간주한다.
pub fn normalize_shares(tariff: &EnergyTariff) -> NormalizedShares {
    let home = tariff.share_home_pct.max(0.0);
    let ac = tariff.share_ac_pct.max(0.0);
    let fast = tariff.share_fast_pct.max(0.0);
    let sum = home + ac + fast;
    if sum <= 0.0 {
        return NormalizedShares {
            home_pct: 100.0,
            ac_pct: 0.0,
            fast_pct: 0.0,
        };
    }
    NormalizedShares {
        home_pct: home / sum * 100.0,
        ac_pct: ac / sum * 100.0,
        fast_pct: fast / sum * 100.0,
    }
}

/// 충전 손실을 반영한 실효 단가: `price / (1 - loss/100)`.
/// 손실률은 0~95%로 제한한다.
pub fn loss_adjusted_price(price: f64, loss_pct: f64) -> f64 {
    let loss = loss_pct.clamp(0.0, MAX_CHARGE_LOSS_PCT) / 100.0;
    price / (1.0 - loss)
}

/// 특정 충전 경로 하나의 실효 단가 [통화/kWh].
pub fn source_price(
    vehicle: &VehicleProfile,
    tariff: &EnergyTariff,
    source: ChargingSource,
) -> f64 {
    match source {
        ChargingSource::Home => loss_adjusted_price(tariff.price_home, vehicle.charge_loss_home_pct),
        ChargingSource::Ac => loss_adjusted_price(tariff.price_ac, vehicle.charge_loss_ac_pct),
        ChargingSource::FastCharge => {
            loss_adjusted_price(tariff.price_fast, vehicle.charge_loss_fast_pct)
        }
    }
}

/// 충전 비중으로 가중 평균한 실효 단가 [통화/kWh]. 일상 주행 비용 계산에 쓴다.
pub fn average_energy_price(vehicle: &VehicleProfile, tariff: &EnergyTariff) -> f64 {
    let shares = normalize_shares(tariff);
    source_price(vehicle, tariff, ChargingSource::Home) * (shares.home_pct / 100.0)
        + source_price(vehicle, tariff, ChargingSource::Ac) * (shares.ac_pct / 100.0)
        + source_price(vehicle, tariff, ChargingSource::FastCharge) * (shares.fast_pct / 100.0)
}
