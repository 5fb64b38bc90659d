use crate::profile::{MaintenanceItem, MaintenanceSchedule};

/// 정비 항목 하나의 연간 비용.
///
/// - 거리 기준: 비용 × (연간 주행거리 / 주기 km)
/// - 기간 기준: 비용 × (12 / 주기 개월)
/// - 주기 없음: 0
pub fn maintenance_item_annual_cost(item: &MaintenanceItem, km_per_year: f64) -> f64 {
    let cost = item.cost.max(0.0);
    match item.schedule {
        MaintenanceSchedule::Distance { interval_km } => cost * (km_per_year / interval_km.max(1.0)),
        MaintenanceSchedule::Time { interval_months } => cost * (12.0 / interval_months.max(1.0)),
        MaintenanceSchedule::Unscheduled => 0.0,
    }
}

/// 모든 정비 항목의 연간 비용 합계.
pub fn maintenance_cost_per_year(items: &[MaintenanceItem], km_per_year: f64) -> f64 {
    items
        .iter()
        .map(|item| maintenance_item_annual_cost(item, km_per_year))
        .sum()
}
