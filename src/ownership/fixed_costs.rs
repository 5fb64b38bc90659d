use crate::profile::FixedCosts;

/// 연간 고정비. 월 단위 항목은 ×12 하고, 음수 입력은 0으로 본다(환급으로 취급하지 않음).
pub fn fixed_cost_per_year(fixed: &FixedCosts) -> f64 {
    fixed.insurance_per_year.max(0.0)
        + fixed.road_tax_per_year.max(0.0)
        + fixed.inspection_per_year.max(0.0)
        + fixed.subscriptions_per_year.max(0.0)
        + fixed.financing_per_month.max(0.0) * 12.0
        + fixed.parking_per_month.max(0.0) * 12.0
}
