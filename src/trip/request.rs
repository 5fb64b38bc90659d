use serde::{Deserialize, Serialize};
use std::fmt;

use crate::energy::ChargingSource;

/// 여행 소비율 선택.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConsumptionMode {
    /// 차량 기준 소비율
    Base,
    /// 90 km/h 정속 소비율
    Kmh90,
    /// 110 km/h 정속 소비율
    Kmh110,
    /// 130 km/h 정속 소비율
    Kmh130,
    /// 사용자 지정 소비율 [kWh/100km]
    Custom { kwh_100km: f64 },
}

impl fmt::Display for ConsumptionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsumptionMode::Base => write!(f, "기준"),
            ConsumptionMode::Kmh90 => write!(f, "90 km/h"),
            ConsumptionMode::Kmh110 => write!(f, "110 km/h"),
            ConsumptionMode::Kmh130 => write!(f, "130 km/h"),
            ConsumptionMode::Custom { kwh_100km } => write!(f, "사용자 지정 {kwh_100km} kWh/100km"),
        }
    }
}

/// 여행 계산 입력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripRequest {
    /// 여행 거리 [km]
    pub distance_km: f64,
    /// 외기 온도에 따른 소비 증가 [%]
    pub temp_factor_pct: f64,
    /// 냉난방에 따른 소비 증가 [%]
    pub hvac_factor_pct: f64,
    /// 여행 중 충전 경로
    pub source: ChargingSource,
    /// 출발 충전량 [%]
    pub start_soc_pct: f64,
    /// 도착 시 남기고 싶은 최소 충전량 [%]
    pub target_soc_pct: f64,
    pub mode: ConsumptionMode,
}

impl Default for TripRequest {
    fn default() -> Self {
        Self {
            distance_km: 250.0,
            temp_factor_pct: 0.0,
            hvac_factor_pct: 0.0,
            source: ChargingSource::FastCharge,
            start_soc_pct: 80.0,
            target_soc_pct: 10.0,
            mode: ConsumptionMode::Base,
        }
    }
}
