use serde::{Deserialize, Serialize};

use crate::energy::pricing::normalize_shares;
use crate::input::finite_or;

/// 충전 경로별 전기 요금과 사용 비중.
///
/// 비중은 입력 그대로 저장하며 합계가 100일 필요는 없다. 계산 시 정규화한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyTariff {
    /// 가정 충전 단가 [통화/kWh]
    #[serde(alias = "priceHome")]
    pub price_home: f64,
    /// 완속(AC) 충전 단가 [통화/kWh]
    #[serde(alias = "priceAC")]
    pub price_ac: f64,
    /// 급속(DC) 충전 단가 [통화/kWh]
    #[serde(alias = "priceHPC")]
    pub price_fast: f64,
    /// 가정 충전 비중 [%]
    #[serde(alias = "shareHomePct")]
    pub share_home_pct: f64,
    /// 완속 충전 비중 [%]
    #[serde(alias = "shareAcPct")]
    pub share_ac_pct: f64,
    /// 급속 충전 비중 [%]
    #[serde(alias = "shareHpcPct")]
    pub share_fast_pct: f64,
}

impl Default for EnergyTariff {
    fn default() -> Self {
        Self {
            price_home: 0.30,
            price_ac: 0.55,
            price_fast: 0.75,
            share_home_pct: 70.0,
            share_ac_pct: 20.0,
            share_fast_pct: 10.0,
        }
    }
}

impl EnergyTariff {
    /// 비중을 정규화한 값(합계 100)으로 바꾼 사본을 반환한다. 설정 저장 시 사용.
    pub fn normalized(&self) -> Self {
        let shares = normalize_shares(self);
        Self {
            share_home_pct: shares.home_pct,
            share_ac_pct: shares.ac_pct,
            share_fast_pct: shares.fast_pct,
            ..self.clone()
        }
    }

    pub fn sanitized(self) -> Self {
        let d = Self::default();
        Self {
            price_home: finite_or(self.price_home, d.price_home),
            price_ac: finite_or(self.price_ac, d.price_ac),
            price_fast: finite_or(self.price_fast, d.price_fast),
            share_home_pct: finite_or(self.share_home_pct, d.share_home_pct),
            share_ac_pct: finite_or(self.share_ac_pct, d.share_ac_pct),
            share_fast_pct: finite_or(self.share_fast_pct, d.share_fast_pct),
        }
    }
}
