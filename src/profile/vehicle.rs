use serde::{Deserialize, Serialize};

use crate::input::{finite_opt, finite_or};

/// 차량 프로필. 배터리 용량, 소비율, 충전 경로별 손실을 담는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleProfile {
    /// 표시용 이름
    pub name: String,
    /// 사용 가능 배터리 용량 [kWh]
    #[serde(alias = "usableBatteryKWh")]
    pub usable_battery_kwh: f64,
    /// 기준 소비율 [kWh/100km]
    #[serde(alias = "consumptionBaseKWh100")]
    pub consumption_base_kwh_100: f64,
    /// 90 km/h 정속 소비율 [kWh/100km]. 없거나 0 이하면 기준 소비율을 쓴다.
    /// 파일에 키가 없으면 설정하지 않은 것으로 본다(TOML에는 null이 없음).
    #[serde(default, alias = "consumption90KWh100")]
    pub consumption_90_kwh_100: Option<f64>,
    /// 110 km/h 정속 소비율 [kWh/100km]
    #[serde(default, alias = "consumption110KWh100")]
    pub consumption_110_kwh_100: Option<f64>,
    /// 130 km/h 정속 소비율 [kWh/100km]
    #[serde(default, alias = "consumption130KWh100")]
    pub consumption_130_kwh_100: Option<f64>,
    /// 가정 충전 손실 [%]
    #[serde(alias = "chargeLossHomePct")]
    pub charge_loss_home_pct: f64,
    /// 완속(AC) 충전 손실 [%]
    #[serde(alias = "chargeLossAcPct")]
    pub charge_loss_ac_pct: f64,
    /// 급속(DC) 충전 손실 [%]
    #[serde(alias = "chargeLossHpcPct")]
    pub charge_loss_fast_pct: f64,
}

impl Default for VehicleProfile {
    fn default() -> Self {
        Self {
            name: "EV".to_string(),
            usable_battery_kwh: 75.0,
            consumption_base_kwh_100: 18.0,
            consumption_90_kwh_100: Some(16.0),
            consumption_110_kwh_100: Some(18.0),
            consumption_130_kwh_100: Some(22.0),
            charge_loss_home_pct: 12.0,
            charge_loss_ac_pct: 8.0,
            charge_loss_fast_pct: 5.0,
        }
    }
}

impl VehicleProfile {
    /// 유한하지 않은 값은 기본값으로, 빈 이름은 "EV"로 바꾼다.
    pub fn sanitized(self) -> Self {
        let d = Self::default();
        let name = self.name.trim().to_string();
        Self {
            name: if name.is_empty() { d.name } else { name },
            usable_battery_kwh: finite_or(self.usable_battery_kwh, d.usable_battery_kwh),
            consumption_base_kwh_100: finite_or(
                self.consumption_base_kwh_100,
                d.consumption_base_kwh_100,
            ),
            consumption_90_kwh_100: finite_opt(self.consumption_90_kwh_100),
            consumption_110_kwh_100: finite_opt(self.consumption_110_kwh_100),
            consumption_130_kwh_100: finite_opt(self.consumption_130_kwh_100),
            charge_loss_home_pct: finite_or(self.charge_loss_home_pct, d.charge_loss_home_pct),
            charge_loss_ac_pct: finite_or(self.charge_loss_ac_pct, d.charge_loss_ac_pct),
            charge_loss_fast_pct: finite_or(self.charge_loss_fast_pct, d.charge_loss_fast_pct),
        }
    }
}
