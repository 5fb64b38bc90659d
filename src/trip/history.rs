use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::feasibility::TripResult;
use super::request::{ConsumptionMode, TripRequest};
use crate::energy::ChargingSource;
use crate::input::finite_or;

/// 저장된 여행 한 건.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TripRecordFormat")]
pub struct TripRecord {
    pub recorded_at: DateTime<Utc>,
    pub distance_km: f64,
    pub energy_kwh: f64,
    pub cost: f64,
    /// 다시 불러와 재계산할 수 있도록 입력을 그대로 보관한다.
    pub request: TripRequest,
}

impl TripRecord {
    pub fn from_result(request: &TripRequest, result: &TripResult, recorded_at: DateTime<Utc>) -> Self {
        Self {
            recorded_at,
            distance_km: result.distance_km,
            energy_kwh: result.energy_kwh,
            cost: result.cost,
            request: TripRequest {
                start_soc_pct: result.start_soc_pct,
                target_soc_pct: result.target_soc_pct,
                ..request.clone()
            },
        }
    }
}

/// 저장 파일의 여행 기록 형식. 현재 형식과 예전 백업 형식을 모두 받아들인다.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TripRecordFormat {
    Current {
        recorded_at: DateTime<Utc>,
        distance_km: f64,
        energy_kwh: f64,
        cost: f64,
        #[serde(default)]
        request: TripRequest,
    },
    Legacy(LegacyTripRecord),
}

/// 예전 백업의 여행 기록: 시각은 epoch 밀리초, 모드/경로는 문자열.
#[derive(Debug, Deserialize)]
struct LegacyTripRecord {
    ts: f64,
    #[serde(default)]
    dist: f64,
    #[serde(default)]
    kwh: f64,
    #[serde(default)]
    cost: f64,
    #[serde(default)]
    mode: Option<String>,
    #[serde(default)]
    custom: Option<f64>,
    #[serde(default)]
    temp: Option<f64>,
    #[serde(default)]
    hvac: Option<f64>,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    start: Option<f64>,
    #[serde(default)]
    end: Option<f64>,
}

impl LegacyTripRecord {
    fn consumption_mode(&self) -> ConsumptionMode {
        match self.mode.as_deref().map(str::trim) {
            Some("90") => ConsumptionMode::Kmh90,
            Some("110") => ConsumptionMode::Kmh110,
            Some("130") => ConsumptionMode::Kmh130,
            Some("custom") => ConsumptionMode::Custom {
                kwh_100km: finite_or(self.custom.unwrap_or(0.0), 0.0).max(0.0),
            },
            _ => ConsumptionMode::Base,
        }
    }
}

impl TryFrom<LegacyTripRecord> for TripRecord {
    type Error = String;

    fn try_from(legacy: LegacyTripRecord) -> Result<Self, Self::Error> {
        let recorded_at = if legacy.ts.is_finite() {
            DateTime::<Utc>::from_timestamp_millis(legacy.ts as i64)
        } else {
            None
        }
        .ok_or_else(|| format!("잘못된 기록 시각: {}", legacy.ts))?;

        let defaults = TripRequest::default();
        let source = legacy
            .source
            .as_deref()
            .and_then(|s| s.parse::<ChargingSource>().ok())
            .unwrap_or(defaults.source);
        let pct = |value: Option<f64>, fallback: f64| {
            finite_or(value.unwrap_or(fallback), fallback).clamp(0.0, 100.0)
        };
        let distance_km = finite_or(legacy.dist, 0.0).max(0.0);
        let request = TripRequest {
            distance_km,
            temp_factor_pct: finite_or(legacy.temp.unwrap_or(0.0), 0.0),
            hvac_factor_pct: finite_or(legacy.hvac.unwrap_or(0.0), 0.0),
            source,
            start_soc_pct: pct(legacy.start, defaults.start_soc_pct),
            target_soc_pct: pct(legacy.end, defaults.target_soc_pct),
            mode: legacy.consumption_mode(),
        };
        Ok(Self {
            recorded_at,
            distance_km,
            energy_kwh: finite_or(legacy.kwh, 0.0),
            cost: finite_or(legacy.cost, 0.0),
            request,
        })
    }
}

impl TryFrom<TripRecordFormat> for TripRecord {
    type Error = String;

    fn try_from(format: TripRecordFormat) -> Result<Self, Self::Error> {
        match format {
            TripRecordFormat::Current {
                recorded_at,
                distance_km,
                energy_kwh,
                cost,
                request,
            } => Ok(Self {
                recorded_at,
                distance_km,
                energy_kwh,
                cost,
                request,
            }),
            TripRecordFormat::Legacy(legacy) => TripRecord::try_from(legacy),
        }
    }
}

/// 여행 기록. 인덱스는 저장 순서(가장 오래된 기록 = 0)를 따른다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripHistory {
    records: Vec<TripRecord>,
}

impl TripHistory {
    pub fn push(&mut self, record: TripRecord) {
        self.records.push(record);
    }

    pub fn get(&self, index: usize) -> Option<&TripRecord> {
        self.records.get(index)
    }

    /// 기록 하나를 삭제한다. 범위를 벗어나면 None.
    pub fn remove(&mut self, index: usize) -> Option<TripRecord> {
        if index < self.records.len() {
            Some(self.records.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 최신 기록부터 (저장 인덱스, 기록) 순으로 돌려준다.
    pub fn newest_first(&self) -> impl Iterator<Item = (usize, &TripRecord)> {
        self.records.iter().enumerate().rev()
    }
}

impl From<Vec<TripRecord>> for TripHistory {
    fn from(records: Vec<TripRecord>) -> Self {
        Self { records }
    }
}
