use serde::{Deserialize, Serialize};

use crate::input::finite_or;

/// 연간 주행 정보.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageProfile {
    /// 연간 주행거리 [km]
    #[serde(alias = "kmPerYear")]
    pub km_per_year: f64,
}

impl Default for UsageProfile {
    fn default() -> Self {
        Self {
            km_per_year: 20_000.0,
        }
    }
}

impl UsageProfile {
    pub fn sanitized(self) -> Self {
        Self {
            km_per_year: finite_or(self.km_per_year, Self::default().km_per_year),
        }
    }
}

/// 고정비. 연 단위 항목과 월 단위 항목이 섞여 있으며 월 항목은 계산 시 ×12 한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedCosts {
    /// 보험료 [통화/년]
    #[serde(alias = "insurancePerYear")]
    pub insurance_per_year: f64,
    /// 자동차세 [통화/년]
    #[serde(alias = "roadTaxPerYear")]
    pub road_tax_per_year: f64,
    /// 정기 검사 [통화/년]
    #[serde(alias = "inspectionPerYear")]
    pub inspection_per_year: f64,
    /// 구독 서비스(커넥티드, 충전 멤버십 등) [통화/년]
    #[serde(alias = "subscriptionsPerYear")]
    pub subscriptions_per_year: f64,
    /// 할부/리스 [통화/월]
    #[serde(alias = "financingPerMonth")]
    pub financing_per_month: f64,
    /// 주차/차고 [통화/월]
    #[serde(alias = "parkingGaragePerMonth")]
    pub parking_per_month: f64,
}

impl Default for FixedCosts {
    fn default() -> Self {
        Self {
            insurance_per_year: 900.0,
            road_tax_per_year: 0.0,
            inspection_per_year: 40.0,
            subscriptions_per_year: 0.0,
            financing_per_month: 0.0,
            parking_per_month: 0.0,
        }
    }
}

impl FixedCosts {
    pub fn sanitized(self) -> Self {
        let d = Self::default();
        Self {
            insurance_per_year: finite_or(self.insurance_per_year, d.insurance_per_year),
            road_tax_per_year: finite_or(self.road_tax_per_year, d.road_tax_per_year),
            inspection_per_year: finite_or(self.inspection_per_year, d.inspection_per_year),
            subscriptions_per_year: finite_or(
                self.subscriptions_per_year,
                d.subscriptions_per_year,
            ),
            financing_per_month: finite_or(self.financing_per_month, d.financing_per_month),
            parking_per_month: finite_or(self.parking_per_month, d.parking_per_month),
        }
    }
}

/// 타이어 관련 비용.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TireProfile {
    /// 타이어 한 세트 가격 [통화]
    #[serde(alias = "tireSetCost")]
    pub set_cost: f64,
    /// 타이어 수명 [km]
    #[serde(alias = "tireLifeKm")]
    pub life_km: f64,
    /// 교체(탈착) 1회 공임 [통화]
    #[serde(alias = "mountingPerChange")]
    pub mounting_per_change: f64,
    /// 연간 교체 횟수 (여름/겨울 타이어 교체 포함)
    #[serde(alias = "changesPerYear")]
    pub changes_per_year: f64,
    /// 휠 얼라인먼트 [통화/년]
    #[serde(alias = "alignmentPerYear")]
    pub alignment_per_year: f64,
}

impl Default for TireProfile {
    fn default() -> Self {
        Self {
            set_cost: 800.0,
            life_km: 40_000.0,
            mounting_per_change: 60.0,
            changes_per_year: 2.0,
            alignment_per_year: 50.0,
        }
    }
}

impl TireProfile {
    pub fn sanitized(self) -> Self {
        let d = Self::default();
        Self {
            set_cost: finite_or(self.set_cost, d.set_cost),
            life_km: finite_or(self.life_km, d.life_km),
            mounting_per_change: finite_or(self.mounting_per_change, d.mounting_per_change),
            changes_per_year: finite_or(self.changes_per_year, d.changes_per_year),
            alignment_per_year: finite_or(self.alignment_per_year, d.alignment_per_year),
        }
    }
}
