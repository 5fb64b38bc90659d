//! 여행 에너지/도달 가능 여부 회귀 테스트. 차량: 75 kWh, 18 kWh/100km.
use chrono::{TimeZone, Utc};
use ev_cost_toolbox::energy::ChargingSource;
use ev_cost_toolbox::profile::{EnergyTariff, VehicleProfile};
use ev_cost_toolbox::trip::{compute_trip, ConsumptionMode, TripHistory, TripRecord, TripRequest};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.3e}, tol {tol})"
    );
}

fn request(distance_km: f64, start: f64, target: f64) -> TripRequest {
    TripRequest {
        distance_km,
        temp_factor_pct: 0.0,
        hvac_factor_pct: 0.0,
        source: ChargingSource::FastCharge,
        start_soc_pct: start,
        target_soc_pct: target,
        mode: ConsumptionMode::Base,
    }
}

#[test]
fn short_trip_is_feasible() {
    let r = compute_trip(
        &VehicleProfile::default(),
        &EnergyTariff::default(),
        &request(100.0, 80.0, 10.0),
    );
    assert_close("energy", r.energy_kwh, 18.0, 1e-9);
    assert_close("needed", r.needed_pct, 24.0, 1e-9);
    assert_close("available", r.available_pct, 70.0, 1e-12);
    assert!(r.ok);
    assert_eq!((r.extra_pct, r.extra_kwh, r.extra_cost), (0.0, 0.0, 0.0));
    assert_close("price", r.price_per_kwh, 0.75 / 0.95, 1e-12);
    assert_close("cost", r.cost, 18.0 * 0.75 / 0.95, 1e-9);
    assert!(r.warnings.is_empty());
}

#[test]
fn long_trip_needs_extra_charge() {
    let r = compute_trip(
        &VehicleProfile::default(),
        &EnergyTariff::default(),
        &request(400.0, 50.0, 20.0),
    );
    assert_close("needed", r.needed_pct, 96.0, 1e-9);
    assert_close("available", r.available_pct, 30.0, 1e-12);
    assert!(!r.ok);
    assert_close("extra pct", r.extra_pct, 66.0, 1e-9);
    assert_close("extra kwh", r.extra_kwh, r.extra_pct * 75.0 / 100.0, 1e-9);
    assert_close("extra cost", r.extra_cost, r.extra_kwh * r.price_per_kwh, 1e-9);
    assert!(r.extra_kwh > 0.0 && r.extra_cost > 0.0);
    assert_close("extra cost value", r.extra_cost, 49.5 * 0.75 / 0.95, 1e-9);
}

#[test]
fn exact_fit_is_feasible() {
    // 18 kWh = 24% of 75 kWh
    let r = compute_trip(
        &VehicleProfile::default(),
        &EnergyTariff::default(),
        &request(100.0, 34.0, 10.0),
    );
    assert!(r.ok, "needed {} available {}", r.needed_pct, r.available_pct);
}

#[test]
fn environment_factors_only_increase_consumption() {
    let mut req = request(100.0, 80.0, 10.0);
    req.temp_factor_pct = 10.0;
    req.hvac_factor_pct = 5.0;
    let r = compute_trip(&VehicleProfile::default(), &EnergyTariff::default(), &req);
    assert_close("factor", r.factor, 1.15, 1e-12);
    assert_close("consumption", r.consumption_kwh_100, 18.0 * 1.15, 1e-9);

    req.temp_factor_pct = -30.0;
    req.hvac_factor_pct = -10.0;
    let r = compute_trip(&VehicleProfile::default(), &EnergyTariff::default(), &req);
    assert_eq!(r.factor, 1.0);
    assert_close("consumption", r.consumption_kwh_100, 18.0, 1e-12);
}

#[test]
fn speed_modes_use_overrides_or_fall_back_to_base() {
    let mut vehicle = VehicleProfile::default();
    let tariff = EnergyTariff::default();
    let mut req = request(100.0, 80.0, 10.0);

    req.mode = ConsumptionMode::Kmh130;
    assert_close("130", compute_trip(&vehicle, &tariff, &req).consumption_kwh_100, 22.0, 1e-12);
    req.mode = ConsumptionMode::Kmh90;
    assert_close("90", compute_trip(&vehicle, &tariff, &req).consumption_kwh_100, 16.0, 1e-12);

    vehicle.consumption_90_kwh_100 = None;
    assert_close("unset", compute_trip(&vehicle, &tariff, &req).consumption_kwh_100, 18.0, 1e-12);
    vehicle.consumption_90_kwh_100 = Some(0.0);
    assert_close("zero", compute_trip(&vehicle, &tariff, &req).consumption_kwh_100, 18.0, 1e-12);
}

#[test]
fn custom_mode_without_value_yields_zero_energy_with_warning() {
    let mut req = request(300.0, 80.0, 10.0);
    req.mode = ConsumptionMode::Custom { kwh_100km: 0.0 };
    let r = compute_trip(&VehicleProfile::default(), &EnergyTariff::default(), &req);
    assert_eq!(r.energy_kwh, 0.0);
    assert!(r.ok);
    assert_eq!(r.warnings.len(), 1);

    req.mode = ConsumptionMode::Custom { kwh_100km: 25.0 };
    let r = compute_trip(&VehicleProfile::default(), &EnergyTariff::default(), &req);
    assert_close("custom", r.energy_kwh, 75.0, 1e-9);
    assert!(r.warnings.is_empty());
}

#[test]
fn soc_inputs_are_clamped() {
    let r = compute_trip(
        &VehicleProfile::default(),
        &EnergyTariff::default(),
        &request(10.0, 150.0, -20.0),
    );
    assert_eq!(r.start_soc_pct, 100.0);
    assert_eq!(r.target_soc_pct, 0.0);
    assert_eq!(r.available_pct, 100.0);

    let r = compute_trip(
        &VehicleProfile::default(),
        &EnergyTariff::default(),
        &request(10.0, 20.0, 40.0),
    );
    assert_eq!(r.available_pct, 0.0);
    assert!(!r.ok);
}

#[test]
fn zero_battery_does_not_divide_by_zero() {
    let vehicle = VehicleProfile {
        usable_battery_kwh: 0.0,
        ..VehicleProfile::default()
    };
    let r = compute_trip(&vehicle, &EnergyTariff::default(), &request(100.0, 80.0, 10.0));
    assert!(r.needed_pct.is_finite());
    assert!(!r.ok);
    assert!(r.extra_kwh.is_finite());
}

#[test]
fn negative_distance_counts_as_zero() {
    let r = compute_trip(
        &VehicleProfile::default(),
        &EnergyTariff::default(),
        &request(-50.0, 80.0, 10.0),
    );
    assert_eq!(r.distance_km, 0.0);
    assert_eq!(r.energy_kwh, 0.0);
    assert!(r.ok);
}

#[test]
fn trip_is_deterministic() {
    let req = request(321.0, 90.0, 15.0);
    let a = compute_trip(&VehicleProfile::default(), &EnergyTariff::default(), &req);
    let b = compute_trip(&VehicleProfile::default(), &EnergyTariff::default(), &req);
    assert_eq!(a, b);
}

#[test]
fn history_lists_newest_first_and_removes_by_storage_index() {
    let vehicle = VehicleProfile::default();
    let tariff = EnergyTariff::default();
    let mut history = TripHistory::default();
    for (i, km) in [100.0, 200.0, 300.0].into_iter().enumerate() {
        let req = request(km, 80.0, 10.0);
        let result = compute_trip(&vehicle, &tariff, &req);
        let at = Utc.with_ymd_and_hms(2024, 5, 1 + i as u32, 9, 0, 0).unwrap();
        history.push(TripRecord::from_result(&req, &result, at));
    }
    let order: Vec<(usize, f64)> = history
        .newest_first()
        .map(|(i, r)| (i, r.distance_km))
        .collect();
    assert_eq!(order, vec![(2, 300.0), (1, 200.0), (0, 100.0)]);

    let removed = history.remove(1).expect("index 1");
    assert_eq!(removed.distance_km, 200.0);
    assert!(history.remove(5).is_none());
    assert_eq!(history.len(), 2);
    assert_eq!(history.get(1).map(|r| r.distance_km), Some(300.0));

    history.clear();
    assert!(history.is_empty());
}

#[test]
fn record_keeps_clamped_request_for_reload() {
    let req = request(120.0, 140.0, 5.0);
    let result = compute_trip(&VehicleProfile::default(), &EnergyTariff::default(), &req);
    let record = TripRecord::from_result(&req, &result, Utc::now());
    assert_eq!(record.request.start_soc_pct, 100.0);
    assert_eq!(record.request.distance_km, 120.0);
    assert_close("energy", record.energy_kwh, result.energy_kwh, 0.0);
}
