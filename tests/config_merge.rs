//! 설정 파일 로드 시 기본값 병합과 JSON 백업 가져오기 테스트.
use std::fs;
use std::path::PathBuf;

use ev_cost_toolbox::config::Config;
use ev_cost_toolbox::energy::ChargingSource;
use ev_cost_toolbox::profile::{
    default_maintenance, EnergyTariff, MaintenanceError, MaintenanceItem, MaintenanceSchedule,
    VehicleProfile,
};
use ev_cost_toolbox::trip::{compute_trip, ConsumptionMode, TripRecord, TripRequest};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("ev_cost_toolbox_{}_{name}", std::process::id()))
}

#[test]
fn empty_document_yields_defaults() {
    let cfg = Config::from_toml_str("").expect("empty toml");
    assert_eq!(cfg, Config::default());
}

#[test]
fn missing_fields_are_filled_per_section() {
    let cfg = Config::from_toml_str(
        r#"
        [vehicle]
        usable_battery_kwh = 60.0

        [fixed]
        parking_per_month = 50.0
        "#,
    )
    .expect("partial toml");
    assert_eq!(cfg.vehicle.usable_battery_kwh, 60.0);
    assert_eq!(cfg.vehicle.consumption_base_kwh_100, 18.0);
    assert_eq!(cfg.vehicle.consumption_90_kwh_100, None);
    assert_eq!(cfg.fixed.parking_per_month, 50.0);
    assert_eq!(cfg.fixed.insurance_per_year, 900.0);
    assert_eq!(cfg.tariff, EnergyTariff::default());
    assert_eq!(cfg.maintenance, default_maintenance());
    assert!(cfg.trips.is_empty());
}

#[test]
fn invalid_section_falls_back_without_touching_others() {
    let cfg = Config::from_toml_str(
        r#"
        [tariff]
        price_home = "cheap"

        [usage]
        km_per_year = 12000.0
        "#,
    )
    .expect("toml with bad section");
    assert_eq!(cfg.tariff, EnergyTariff::default());
    assert_eq!(cfg.usage.km_per_year, 12_000.0);
}

#[test]
fn non_finite_numbers_are_replaced_by_defaults() {
    let cfg = Config::from_toml_str(
        r#"
        [vehicle]
        usable_battery_kwh = nan
        consumption_base_kwh_100 = 20.0
        consumption_130_kwh_100 = inf

        [tires]
        life_km = inf
        "#,
    )
    .expect("toml with nan");
    assert_eq!(cfg.vehicle.usable_battery_kwh, 75.0);
    assert_eq!(cfg.vehicle.consumption_base_kwh_100, 20.0);
    assert_eq!(cfg.vehicle.consumption_130_kwh_100, None);
    assert_eq!(cfg.tires.life_km, 40_000.0);
}

#[test]
fn invalid_maintenance_list_uses_defaults_and_bad_entries_are_skipped() {
    let cfg = Config::from_toml_str("maintenance = 5").expect("scalar list");
    assert_eq!(cfg.maintenance, default_maintenance());

    let cfg = Config::from_json_str(
        r#"{ "maintenance": [
            { "name": "tagliando", "cost": 100, "intervalKm": 30000, "intervalMonths": 12 },
            "broken",
            { "name": "filtro", "cost": 30, "intervalKm": null, "intervalMonths": 12 },
            { "name": "vuoto", "cost": 10 }
        ] }"#,
    )
    .expect("json list");
    assert_eq!(cfg.maintenance.len(), 3);
    assert_eq!(
        cfg.maintenance[0].schedule,
        MaintenanceSchedule::Distance { interval_km: 30_000.0 }
    );
    assert_eq!(
        cfg.maintenance[1].schedule,
        MaintenanceSchedule::Time { interval_months: 12.0 }
    );
    assert_eq!(cfg.maintenance[2].schedule, MaintenanceSchedule::Unscheduled);
}

#[test]
fn legacy_backup_sections_are_accepted() {
    let cfg = Config::from_json_str(
        r#"{
            "car": { "name": "Model", "usableBatteryKWh": 58, "consumption90KWh100": null, "chargeLossHpcPct": 7 },
            "energy": { "priceHome": 0.25, "shareHomePct": 50, "shareAcPct": 50, "shareHpcPct": 0 },
            "usage": { "kmPerYear": 15000 },
            "tires": { "tireSetCost": 600, "tireLifeKm": 30000 },
            "trips": [
                { "ts": 1700000000000, "dist": 120, "kwh": 21.6, "cost": 17.0, "mode": "custom",
                  "custom": 18, "temp": 10, "hvac": 0, "source": "ac", "start": 80, "end": 10 },
                { "ts": 1700000500000, "dist": 300, "kwh": 66.0, "cost": 52.1, "mode": "130",
                  "custom": null, "temp": 0, "hvac": 5, "source": "hpc", "start": 100, "end": 15 },
                { "dist": 50 }
            ]
        }"#,
    )
    .expect("legacy json");
    assert_eq!(cfg.vehicle.name, "Model");
    assert_eq!(cfg.vehicle.usable_battery_kwh, 58.0);
    assert_eq!(cfg.vehicle.consumption_90_kwh_100, None);
    assert_eq!(cfg.vehicle.charge_loss_fast_pct, 7.0);
    assert_eq!(cfg.tariff.price_home, 0.25);
    assert_eq!(cfg.tariff.share_ac_pct, 50.0);
    assert_eq!(cfg.usage.km_per_year, 15_000.0);
    assert_eq!(cfg.tires.set_cost, 600.0);
    // 시각이 없는 기록만 건너뛴다.
    assert_eq!(cfg.trips.len(), 2);

    let first = cfg.trips.get(0).expect("first trip");
    assert_eq!(first.recorded_at.timestamp_millis(), 1_700_000_000_000);
    assert_eq!(first.distance_km, 120.0);
    assert_eq!(first.energy_kwh, 21.6);
    assert_eq!(first.cost, 17.0);
    assert_eq!(first.request.mode, ConsumptionMode::Custom { kwh_100km: 18.0 });
    assert_eq!(first.request.source, ChargingSource::Ac);
    assert_eq!(first.request.temp_factor_pct, 10.0);
    assert_eq!(first.request.start_soc_pct, 80.0);
    assert_eq!(first.request.target_soc_pct, 10.0);

    let second = cfg.trips.get(1).expect("second trip");
    assert_eq!(second.request.mode, ConsumptionMode::Kmh130);
    assert_eq!(second.request.source, ChargingSource::FastCharge);
    assert_eq!(second.request.hvac_factor_pct, 5.0);
    assert_eq!(second.request.start_soc_pct, 100.0);
    assert_eq!(second.request.target_soc_pct, 15.0);
}

#[test]
fn legacy_trips_survive_backup_round_trip() {
    let cfg = Config::from_json_str(
        r#"{ "trips": [ { "ts": 1700000000000, "dist": 120, "kwh": 21.6, "cost": 17.0,
            "mode": "base", "custom": null, "temp": 0, "hvac": 0, "source": "hpc",
            "start": 80, "end": 10 } ] }"#,
    )
    .expect("legacy trips");
    assert_eq!(cfg.trips.len(), 1);
    assert_eq!(
        cfg.trips.get(0).map(|r| r.request.mode),
        Some(ConsumptionMode::Base)
    );

    // 새 형식으로 저장한 뒤 다시 읽어도 같은 기록이다.
    let path = temp_path("legacy_trips.toml");
    cfg.save(&path).expect("save");
    let loaded = Config::load_or_default(&path).expect("load");
    fs::remove_file(&path).ok();
    assert_eq!(loaded.trips, cfg.trips);
}

#[test]
fn invalid_json_is_an_error() {
    assert!(Config::from_json_str("{ not json").is_err());
}

#[test]
fn save_load_and_export_import_preserve_document() {
    let mut cfg = Config::default();
    cfg.vehicle = VehicleProfile {
        name: "Test EV".to_string(),
        consumption_110_kwh_100: None,
        ..VehicleProfile::default()
    };
    cfg.maintenance.push(
        MaintenanceItem::new("타이어 점검", 25.0, None, None).expect("valid item"),
    );
    let req = TripRequest::default();
    let result = compute_trip(&cfg.vehicle, &cfg.tariff, &req);
    cfg.trips
        .push(TripRecord::from_result(&req, &result, chrono::Utc::now()));

    let toml_path = temp_path("roundtrip.toml");
    cfg.save(&toml_path).expect("save");
    let loaded = Config::load_or_default(&toml_path).expect("load");
    fs::remove_file(&toml_path).ok();
    assert_eq!(loaded, cfg);

    let json_path = temp_path("backup.json");
    cfg.export_json(&json_path).expect("export");
    let imported = Config::import_json(&json_path).expect("import");
    fs::remove_file(&json_path).ok();
    assert_eq!(imported, cfg);
}

#[test]
fn missing_file_creates_defaults() {
    let path = temp_path("fresh.toml");
    fs::remove_file(&path).ok();
    let cfg = Config::load_or_default(&path).expect("load default");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
    fs::remove_file(&path).ok();
}

#[test]
fn maintenance_item_validation() {
    assert_eq!(
        MaintenanceItem::new("  ", 10.0, None, Some(12.0)),
        Err(MaintenanceError::EmptyName)
    );
    assert_eq!(
        MaintenanceItem::new("필터", 0.0, None, Some(12.0)),
        Err(MaintenanceError::NonPositiveCost(0.0))
    );
    let both = MaintenanceItem::new(" 브레이크 ", 300.0, Some(60_000.0), Some(24.0)).expect("valid");
    assert_eq!(both.name, "브레이크");
    assert_eq!(both.schedule, MaintenanceSchedule::Distance { interval_km: 60_000.0 });
    let short = MaintenanceItem::new("와이퍼", 40.0, None, Some(0.0)).expect("valid");
    assert_eq!(short.schedule, MaintenanceSchedule::Time { interval_months: 1.0 });
}

#[test]
fn maintenance_list_editing() {
    let mut cfg = Config::default();
    let removed = cfg.remove_maintenance(0).expect("first item");
    assert_eq!(removed.name, default_maintenance()[0].name);
    assert!(cfg.remove_maintenance(99).is_none());
    cfg.reset_maintenance();
    assert_eq!(cfg.maintenance, default_maintenance());
    cfg.usage.km_per_year = 1.0;
    cfg.reset();
    assert_eq!(cfg, Config::default());
}
