use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 정비 항목의 반복 주기.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "basis", rename_all = "snake_case")]
pub enum MaintenanceSchedule {
    /// 주행거리 기준 [km]
    Distance { interval_km: f64 },
    /// 기간 기준 [개월]
    Time { interval_months: f64 },
    /// 주기 없음. 연간 비용에 포함하지 않는다.
    Unscheduled,
}

impl MaintenanceSchedule {
    /// 거리/기간 두 값으로 주기를 만든다.
    ///
    /// 둘 다 주어지면 거리 기준이 우선한다. 각 값은 1 이상으로 보정한다.
    pub fn from_intervals(interval_km: Option<f64>, interval_months: Option<f64>) -> Self {
        let km = interval_km.filter(|v| v.is_finite());
        let months = interval_months.filter(|v| v.is_finite());
        match (km, months) {
            (Some(km), _) => MaintenanceSchedule::Distance {
                interval_km: km.max(1.0),
            },
            (None, Some(months)) => MaintenanceSchedule::Time {
                interval_months: months.max(1.0),
            },
            (None, None) => MaintenanceSchedule::Unscheduled,
        }
    }
}

/// 정비 항목 추가 시 입력 검증 오류.
#[derive(Debug, Error, PartialEq)]
pub enum MaintenanceError {
    #[error("항목 이름을 입력하세요.")]
    EmptyName,
    #[error("비용은 0보다 커야 합니다. (입력값: {0})")]
    NonPositiveCost(f64),
}

/// 정비 항목 하나.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "MaintenanceItemRecord")]
pub struct MaintenanceItem {
    pub name: String,
    /// 1회 비용 [통화]
    pub cost: f64,
    pub schedule: MaintenanceSchedule,
}

impl MaintenanceItem {
    /// 사용자 입력으로 정비 항목을 만든다. 이름은 비어 있으면 안 되고 비용은 0보다 커야 한다.
    pub fn new(
        name: &str,
        cost: f64,
        interval_km: Option<f64>,
        interval_months: Option<f64>,
    ) -> Result<Self, MaintenanceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MaintenanceError::EmptyName);
        }
        if !(cost.is_finite() && cost > 0.0) {
            return Err(MaintenanceError::NonPositiveCost(cost));
        }
        Ok(Self {
            name: name.to_string(),
            cost,
            schedule: MaintenanceSchedule::from_intervals(interval_km, interval_months),
        })
    }

    fn scheduled(name: &str, cost: f64, schedule: MaintenanceSchedule) -> Self {
        Self {
            name: name.to_string(),
            cost,
            schedule,
        }
    }
}

/// 저장 파일의 정비 항목 형식.
///
/// 새 형식(`schedule`)과 예전 형식(거리/기간 두 필드)을 모두 받아들인다.
#[derive(Debug, Deserialize)]
struct MaintenanceItemRecord {
    #[serde(default)]
    name: String,
    #[serde(default)]
    cost: f64,
    #[serde(default)]
    schedule: Option<MaintenanceSchedule>,
    #[serde(default, alias = "intervalKm")]
    interval_km: Option<f64>,
    #[serde(default, alias = "intervalMonths")]
    interval_months: Option<f64>,
}

impl From<MaintenanceItemRecord> for MaintenanceItem {
    fn from(record: MaintenanceItemRecord) -> Self {
        let schedule = record.schedule.unwrap_or_else(|| {
            MaintenanceSchedule::from_intervals(record.interval_km, record.interval_months)
        });
        Self {
            name: record.name,
            cost: if record.cost.is_finite() { record.cost } else { 0.0 },
            schedule,
        }
    }
}

/// 기본 정비 항목 목록.
pub fn default_maintenance() -> Vec<MaintenanceItem> {
    use MaintenanceSchedule::{Distance, Time};
    vec![
        MaintenanceItem::scheduled("실내 필터", 30.0, Time { interval_months: 12.0 }),
        MaintenanceItem::scheduled("브레이크액", 80.0, Time { interval_months: 24.0 }),
        MaintenanceItem::scheduled("와이퍼", 40.0, Time { interval_months: 12.0 }),
        MaintenanceItem::scheduled("종합 점검", 120.0, Time { interval_months: 24.0 }),
        MaintenanceItem::scheduled("브레이크 패드(추정)", 300.0, Distance { interval_km: 60_000.0 }),
    ]
}
