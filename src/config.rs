use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::profile::{
    default_maintenance, EnergyTariff, FixedCosts, MaintenanceItem, TireProfile, UsageProfile,
    VehicleProfile,
};
use crate::trip::{TripHistory, TripRecord};

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_FILE: &str = "ev_cost.toml";

/// 저장 문서 전체: 계산 설정 + 여행 기록.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub vehicle: VehicleProfile,
    pub tariff: EnergyTariff,
    pub usage: UsageProfile,
    pub fixed: FixedCosts,
    pub tires: TireProfile,
    pub maintenance: Vec<MaintenanceItem>,
    pub trips: TripHistory,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vehicle: VehicleProfile::default(),
            tariff: EnergyTariff::default(),
            usage: UsageProfile::default(),
            fixed: FixedCosts::default(),
            tires: TireProfile::default(),
            maintenance: default_maintenance(),
            trips: TripHistory::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("JSON 오류: {0}")]
    Json(#[from] serde_json::Error),
}

/// 섹션 단위로 꺼내고 역직렬화할 수 있는 문서(TOML/JSON 공통).
trait Document: Sized {
    fn take_section(&mut self, names: &[&str]) -> Option<Self>;
    fn into_elements(self) -> Option<Vec<Self>>;
    fn decode<T: DeserializeOwned>(self) -> Result<T, String>;
}

impl Document for toml::Value {
    fn take_section(&mut self, names: &[&str]) -> Option<Self> {
        let table = self.as_table_mut()?;
        names.iter().find_map(|name| table.remove(*name))
    }

    fn into_elements(self) -> Option<Vec<Self>> {
        match self {
            toml::Value::Array(items) => Some(items),
            _ => None,
        }
    }

    fn decode<T: DeserializeOwned>(self) -> Result<T, String> {
        toml::Value::try_into::<T>(self).map_err(|e| e.to_string())
    }
}

impl Document for serde_json::Value {
    fn take_section(&mut self, names: &[&str]) -> Option<Self> {
        let object = self.as_object_mut()?;
        names.iter().find_map(|name| object.remove(*name))
    }

    fn into_elements(self) -> Option<Vec<Self>> {
        match self {
            serde_json::Value::Array(items) => Some(items),
            _ => None,
        }
    }

    fn decode<T: DeserializeOwned>(self) -> Result<T, String> {
        serde_json::from_value(self).map_err(|e| e.to_string())
    }
}

/// 섹션 하나를 읽는다. 없으면 기본값, 구조가 잘못되었으면 경고 후 기본값.
fn decode_section<D: Document, T: DeserializeOwned>(doc: &mut D, names: &[&str], default: T) -> T {
    match doc.take_section(names) {
        Some(section) => section.decode().unwrap_or_else(|err| {
            warn!(section = names[0], %err, "invalid section, using defaults");
            default
        }),
        None => {
            debug!(section = names[0], "section missing, using defaults");
            default
        }
    }
}

/// 목록 섹션을 읽는다. 배열이 아니면 기본 목록, 잘못된 원소는 건너뛴다.
fn decode_list<D: Document, T: DeserializeOwned>(
    doc: &mut D,
    names: &[&str],
    default: Vec<T>,
) -> Vec<T> {
    let Some(section) = doc.take_section(names) else {
        return default;
    };
    let Some(elements) = section.into_elements() else {
        warn!(section = names[0], "expected a list, using defaults");
        return default;
    };
    elements
        .into_iter()
        .enumerate()
        .filter_map(|(index, element)| match element.decode() {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(section = names[0], index, %err, "skipping invalid entry");
                None
            }
        })
        .collect()
}

/// 기본값과 섹션별로 병합한다. 예전 백업 형식의 섹션 이름(car, energy)도 받아들인다.
fn merge_with_defaults<D: Document>(mut doc: D) -> Config {
    let defaults = Config::default();
    let trips: Vec<TripRecord> = decode_list(&mut doc, &["trips"], Vec::new());
    let cfg = Config {
        vehicle: decode_section(&mut doc, &["vehicle", "car"], defaults.vehicle),
        tariff: decode_section(&mut doc, &["tariff", "energy"], defaults.tariff),
        usage: decode_section(&mut doc, &["usage"], defaults.usage),
        fixed: decode_section(&mut doc, &["fixed"], defaults.fixed),
        tires: decode_section(&mut doc, &["tires"], defaults.tires),
        maintenance: decode_list(&mut doc, &["maintenance"], defaults.maintenance),
        trips: TripHistory::from(trips),
    };
    cfg.sanitized()
}

impl Config {
    /// TOML 문자열에서 설정을 읽는다.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let doc: toml::Value = toml::from_str(content)?;
        Ok(merge_with_defaults(doc))
    }

    /// JSON 문자열(백업 파일)에서 설정을 읽는다.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let doc: serde_json::Value = serde_json::from_str(content)?;
        Ok(merge_with_defaults(doc))
    }

    /// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let cfg = Self::from_toml_str(&content)?;
            debug!(path = %path.display(), "config loaded");
            Ok(cfg)
        } else {
            let cfg = Self::default();
            cfg.save(path)?;
            info!(path = %path.display(), "created default config");
            Ok(cfg)
        }
    }

    /// 설정을 TOML 파일로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 설정 전체를 JSON 백업 파일로 내보낸다.
    pub fn export_json(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        info!(path = %path.display(), "config exported");
        Ok(())
    }

    /// JSON 백업 파일을 읽는다. 파싱에 실패하면 오류를 반환하고 현재 설정은 그대로 둔다.
    pub fn import_json(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let cfg = Self::from_json_str(&content)?;
        info!(path = %path.display(), "config imported");
        Ok(cfg)
    }

    /// 유한하지 않은 숫자를 항목별 기본값으로 바꾼다.
    pub fn sanitized(self) -> Self {
        Self {
            vehicle: self.vehicle.sanitized(),
            tariff: self.tariff.sanitized(),
            usage: self.usage.sanitized(),
            fixed: self.fixed.sanitized(),
            tires: self.tires.sanitized(),
            maintenance: self.maintenance,
            trips: self.trips,
        }
    }

    /// 정비 목록을 기본 목록으로 되돌린다.
    pub fn reset_maintenance(&mut self) {
        self.maintenance = default_maintenance();
    }

    /// 정비 항목 하나를 삭제한다. 범위를 벗어나면 None.
    pub fn remove_maintenance(&mut self, index: usize) -> Option<MaintenanceItem> {
        if index < self.maintenance.len() {
            Some(self.maintenance.remove(index))
        } else {
            None
        }
    }

    /// 모든 설정과 기록을 기본값으로 초기화한다.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
