use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 충전 경로.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargingSource {
    /// 가정 충전
    Home,
    /// 공용 완속(AC) 충전
    Ac,
    /// 급속(DC, HPC) 충전
    #[serde(alias = "hpc")]
    FastCharge,
}

impl ChargingSource {
    pub fn label(&self) -> &'static str {
        match self {
            ChargingSource::Home => "가정 충전",
            ChargingSource::Ac => "완속(AC)",
            ChargingSource::FastCharge => "급속(DC)",
        }
    }
}

impl fmt::Display for ChargingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ChargingSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" | "1" => Ok(ChargingSource::Home),
            "ac" | "2" => Ok(ChargingSource::Ac),
            "hpc" | "dc" | "fast" | "fast_charge" | "3" => Ok(ChargingSource::FastCharge),
            other => Err(format!("알 수 없는 충전 경로: {other} (home/ac/hpc)")),
        }
    }
}
