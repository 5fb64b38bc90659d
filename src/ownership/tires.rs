use crate::profile::TireProfile;

/// 연간 타이어 비용: 마모 감가 + 교체 공임 + 얼라인먼트.
///
/// 타이어 수명은 최소 1 km로 보정한다.
pub fn tires_cost_per_year(tires: &TireProfile, km_per_year: f64) -> f64 {
    let wear_per_km = tires.set_cost.max(0.0) / tires.life_km.max(1.0);
    wear_per_km * km_per_year
        + tires.mounting_per_change.max(0.0) * tires.changes_per_year.max(0.0)
        + tires.alignment_per_year.max(0.0)
}
