use chrono::{Local, Utc};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::app::AppError;
use crate::config::Config;
use crate::energy::{normalize_shares, ChargingSource};
use crate::input::{parse_number, parse_optional};
use crate::ownership::{maintenance_item_annual_cost, CostBreakdown, MIN_ANNUAL_KM};
use crate::profile::{MaintenanceItem, MaintenanceSchedule};
use crate::trip::{compute_trip, ConsumptionMode, TripRecord, TripRequest, TripResult};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Summary,
    Vehicle,
    EnergyUsage,
    FixedCosts,
    Tires,
    Maintenance,
    Trip,
    History,
    Backup,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== EV Cost Toolbox ===");
    println!("1) 유지비 요약");
    println!("2) 차량 프로필");
    println!("3) 에너지/주행거리");
    println!("4) 고정비");
    println!("5) 타이어");
    println!("6) 정비 항목");
    println!("7) 여행 계산");
    println!("8) 여행 기록");
    println!("9) 백업/초기화");
    println!("0) 종료");
    read_menu_choice(&mut io::stdin().lock())
}

/// 메뉴 번호를 유효한 값이 나올 때까지 읽는다. 입력이 끝나면 종료로 본다.
pub fn read_menu_choice<R: BufRead>(input: &mut R) -> Result<MenuChoice, AppError> {
    loop {
        prompt("메뉴 선택: ")?;
        let sel = match read_line_from(input) {
            Ok(line) => line,
            Err(AppError::InputClosed) => return Ok(MenuChoice::Exit),
            Err(e) => return Err(e),
        };
        match sel.trim() {
            "1" => return Ok(MenuChoice::Summary),
            "2" => return Ok(MenuChoice::Vehicle),
            "3" => return Ok(MenuChoice::EnergyUsage),
            "4" => return Ok(MenuChoice::FixedCosts),
            "5" => return Ok(MenuChoice::Tires),
            "6" => return Ok(MenuChoice::Maintenance),
            "7" => return Ok(MenuChoice::Trip),
            "8" => return Ok(MenuChoice::History),
            "9" => return Ok(MenuChoice::Backup),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 차량 프로필 메뉴를 처리한다. 빈 입력은 현재 값을 유지한다.
pub fn handle_vehicle(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 차량 프로필 -- (엔터: 현재 값 유지)");
    let v = &mut cfg.vehicle;
    let name = read_line(&format!("이름 [{}]: ", v.name))?;
    if !name.trim().is_empty() {
        v.name = name.trim().to_string();
    }
    v.usable_battery_kwh = read_f64_or("사용 가능 배터리 [kWh]", v.usable_battery_kwh)?;
    v.consumption_base_kwh_100 = read_f64_or("기준 소비율 [kWh/100km]", v.consumption_base_kwh_100)?;
    println!("정속 소비율은 '-' 입력 시 비워서 기준 소비율을 사용합니다.");
    v.consumption_90_kwh_100 = read_opt_or("90 km/h 소비율", v.consumption_90_kwh_100)?;
    v.consumption_110_kwh_100 = read_opt_or("110 km/h 소비율", v.consumption_110_kwh_100)?;
    v.consumption_130_kwh_100 = read_opt_or("130 km/h 소비율", v.consumption_130_kwh_100)?;
    v.charge_loss_home_pct = read_f64_or("가정 충전 손실 [%]", v.charge_loss_home_pct)?;
    v.charge_loss_ac_pct = read_f64_or("완속 충전 손실 [%]", v.charge_loss_ac_pct)?;
    v.charge_loss_fast_pct = read_f64_or("급속 충전 손실 [%]", v.charge_loss_fast_pct)?;
    println!("차량 프로필을 적용했습니다.");
    Ok(())
}

/// 주행거리와 전기 요금 메뉴를 처리한다. 충전 비중은 합계 100으로 정규화해서 저장한다.
pub fn handle_energy_usage(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 에너지/주행거리 -- (엔터: 현재 값 유지)");
    cfg.usage.km_per_year = read_f64_or("연간 주행거리 [km]", cfg.usage.km_per_year)?;
    let t = &mut cfg.tariff;
    t.price_home = read_f64_or("가정 충전 단가 [/kWh]", t.price_home)?;
    t.price_ac = read_f64_or("완속 충전 단가 [/kWh]", t.price_ac)?;
    t.price_fast = read_f64_or("급속 충전 단가 [/kWh]", t.price_fast)?;
    t.share_home_pct = read_f64_or("가정 충전 비중 [%]", t.share_home_pct)?;
    t.share_ac_pct = read_f64_or("완속 충전 비중 [%]", t.share_ac_pct)?;
    t.share_fast_pct = read_f64_or("급속 충전 비중 [%]", t.share_fast_pct)?;
    cfg.tariff = cfg.tariff.normalized();
    let shares = normalize_shares(&cfg.tariff);
    println!(
        "충전 비중(정규화): 가정 {:.0}% / 완속 {:.0}% / 급속 {:.0}%",
        shares.home_pct, shares.ac_pct, shares.fast_pct
    );
    Ok(())
}

/// 고정비 메뉴를 처리한다.
pub fn handle_fixed_costs(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 고정비 -- (엔터: 현재 값 유지)");
    let f = &mut cfg.fixed;
    f.insurance_per_year = read_f64_or("보험료 [/년]", f.insurance_per_year)?;
    f.road_tax_per_year = read_f64_or("자동차세 [/년]", f.road_tax_per_year)?;
    f.inspection_per_year = read_f64_or("정기 검사 [/년]", f.inspection_per_year)?;
    f.subscriptions_per_year = read_f64_or("구독 서비스 [/년]", f.subscriptions_per_year)?;
    f.financing_per_month = read_f64_or("할부/리스 [/월]", f.financing_per_month)?;
    f.parking_per_month = read_f64_or("주차/차고 [/월]", f.parking_per_month)?;
    println!("고정비를 적용했습니다.");
    Ok(())
}

/// 타이어 메뉴를 처리한다.
pub fn handle_tires(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 타이어 -- (엔터: 현재 값 유지)");
    let t = &mut cfg.tires;
    t.set_cost = read_f64_or("타이어 세트 가격", t.set_cost)?;
    t.life_km = read_f64_or("타이어 수명 [km]", t.life_km)?;
    t.mounting_per_change = read_f64_or("교체 공임 [/회]", t.mounting_per_change)?;
    t.changes_per_year = read_f64_or("연간 교체 횟수", t.changes_per_year)?;
    t.alignment_per_year = read_f64_or("얼라인먼트 [/년]", t.alignment_per_year)?;
    println!("타이어 설정을 적용했습니다.");
    Ok(())
}

/// 정비 항목 메뉴를 처리한다.
pub fn handle_maintenance(cfg: &mut Config) -> Result<(), AppError> {
    print_maintenance(cfg);
    println!("1) 항목 추가  2) 항목 삭제  3) 기본값 복원  (엔터: 돌아가기)");
    let sel = read_line("선택: ")?;
    match sel.trim() {
        "1" => {
            let name = read_line("항목 이름: ")?;
            let cost = parse_number(&read_line("비용: ")?, 0.0);
            let km = parse_optional(&read_line("주기 [km] (없으면 엔터): ")?);
            let months = parse_optional(&read_line("주기 [개월] (없으면 엔터): ")?);
            match MaintenanceItem::new(&name, cost, km, months) {
                Ok(item) => {
                    cfg.maintenance.push(item);
                    println!("항목을 추가했습니다.");
                }
                Err(e) => println!("{e}"),
            }
        }
        "2" => {
            let index = read_index("삭제할 번호: ")?;
            match index.and_then(|i| cfg.remove_maintenance(i)) {
                Some(item) => println!("'{}' 항목을 삭제했습니다.", item.name),
                None => println!("해당 번호의 항목이 없습니다."),
            }
        }
        "3" => {
            cfg.reset_maintenance();
            println!("정비 항목을 기본값으로 되돌렸습니다.");
        }
        _ => {}
    }
    Ok(())
}

/// 여행 계산 메뉴를 처리한다. 계산 후 기록 저장 여부를 묻는다.
pub fn handle_trip(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 여행 계산 -- (엔터: 기본값)");
    let request = read_trip_request(&TripRequest::default())?;
    let result = compute_trip(&cfg.vehicle, &cfg.tariff, &request);
    print_trip_result(&result);
    let save = read_line("기록에 저장할까요? (y/N): ")?;
    if save.trim().eq_ignore_ascii_case("y") {
        cfg.trips
            .push(TripRecord::from_result(&request, &result, Utc::now()));
        println!("여행을 기록 목록에 추가했습니다.");
    }
    Ok(())
}

/// 여행 기록 메뉴를 처리한다.
pub fn handle_history(cfg: &mut Config) -> Result<(), AppError> {
    print_history(cfg);
    if cfg.trips.is_empty() {
        return Ok(());
    }
    println!("1) 불러와서 다시 계산  2) 삭제  3) 전체 삭제  (엔터: 돌아가기)");
    let sel = read_line("선택: ")?;
    match sel.trim() {
        "1" => {
            let index = read_index("번호: ")?;
            let Some(record) = index.and_then(|i| cfg.trips.get(i)).cloned() else {
                println!("해당 번호의 기록이 없습니다.");
                return Ok(());
            };
            println!("저장된 입력을 불러왔습니다. 엔터로 그대로 사용할 수 있습니다.");
            let request = read_trip_request(&record.request)?;
            let result = compute_trip(&cfg.vehicle, &cfg.tariff, &request);
            print_trip_result(&result);
        }
        "2" => {
            let index = read_index("삭제할 번호: ")?;
            match index.and_then(|i| cfg.trips.remove(i)) {
                Some(_) => println!("기록을 삭제했습니다."),
                None => println!("해당 번호의 기록이 없습니다."),
            }
        }
        "3" => {
            cfg.trips.clear();
            println!("여행 기록을 모두 삭제했습니다.");
        }
        _ => {}
    }
    Ok(())
}

/// 백업/초기화 메뉴를 처리한다.
pub fn handle_backup(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 백업/초기화 --");
    println!("1) JSON 내보내기  2) JSON 가져오기  3) 전체 초기화  (엔터: 돌아가기)");
    let sel = read_line("선택: ")?;
    match sel.trim() {
        "1" => {
            let path = read_path("파일 경로 [ev-cost-backup.json]: ")?;
            cfg.export_json(&path)?;
            println!("내보내기 완료: {}", path.display());
        }
        "2" => {
            let path = read_path("파일 경로 [ev-cost-backup.json]: ")?;
            match Config::import_json(&path) {
                Ok(imported) => {
                    *cfg = imported;
                    println!("가져오기 완료.");
                }
                Err(e) => println!("가져오기 실패: {e}"),
            }
        }
        "3" => {
            let confirm = read_line("모든 설정과 기록을 지웁니다. 계속할까요? (y/N): ")?;
            if confirm.trim().eq_ignore_ascii_case("y") {
                cfg.reset();
                println!("초기화했습니다.");
            }
        }
        _ => {}
    }
    Ok(())
}

/// 유지비 요약을 출력한다.
pub fn print_breakdown(totals: &CostBreakdown) {
    println!("\n-- 유지비 요약 --");
    println!("km당: {:.3}", totals.total_per_km);
    println!("월간: {:.2}", totals.total_per_month);
    println!("연간: {:.2}", totals.total_per_year);
    for (label, value) in totals.categories() {
        println!("  {label}: {value:.2} /년");
    }
    println!(
        "평균 실효 단가: {:.4} /kWh, 에너지 비용 {:.4} /km (연 {:.0} km 기준)",
        totals.avg_energy_price, totals.energy_cost_per_km, totals.km_per_year
    );
}

/// 여행 계산 결과를 출력한다.
pub fn print_trip_result(r: &TripResult) {
    println!("\n-- 여행 결과 --");
    println!("필요 에너지: {:.1} kWh", r.energy_kwh);
    println!("예상 비용: {:.2}", r.cost);
    println!("사용 소비율: {:.1} kWh/100km (보정 ×{:.2})", r.consumption_kwh_100, r.factor);
    println!("실효 단가(손실 포함): {:.4} /kWh", r.price_per_kwh);
    println!("필요 충전량: {:.1} %", r.needed_pct);
    println!(
        "사용 가능 충전량: {:.1} % ({:.0}% → {:.0}%)",
        r.available_pct, r.start_soc_pct, r.target_soc_pct
    );
    if r.ok {
        println!("결과: 중간 충전 없이 도달 가능");
    } else {
        println!("결과: 추가 충전 필요");
        println!("추가 필요: {:.1} kWh ({:.1} %)", r.extra_kwh, r.extra_pct);
        println!("추가 비용: {:.2}", r.extra_cost);
    }
    for w in &r.warnings {
        println!("주의: {w}");
    }
}

/// 여행 입력값을 한 줄로 출력한다.
pub fn print_trip_request(req: &TripRequest) {
    println!(
        "{:.0} km, 소비율 {}, 온도 +{:.0}%, 냉난방 +{:.0}%, {}, 충전량 {:.0}% → {:.0}%",
        req.distance_km,
        req.mode,
        req.temp_factor_pct,
        req.hvac_factor_pct,
        req.source,
        req.start_soc_pct,
        req.target_soc_pct
    );
}

/// 여행 기록을 최신 순으로 출력한다. 번호는 저장 인덱스다.
pub fn print_history(cfg: &Config) {
    println!("\n-- 여행 기록 --");
    if cfg.trips.is_empty() {
        println!("저장된 여행이 없습니다.");
        return;
    }
    for (index, record) in cfg.trips.newest_first() {
        println!(
            "[{index}] {:.0} km, {:.2}, {:.1} kWh, {}",
            record.distance_km,
            record.cost,
            record.energy_kwh,
            record.recorded_at.with_timezone(&Local).format("%Y-%m-%d %H:%M")
        );
    }
}

/// 정비 항목과 항목별 연간 비용을 출력한다.
pub fn print_maintenance(cfg: &Config) {
    println!("\n-- 정비 항목 --");
    if cfg.maintenance.is_empty() {
        println!("등록된 항목이 없습니다.");
        return;
    }
    let km_per_year = cfg.usage.km_per_year.max(MIN_ANNUAL_KM);
    for (index, item) in cfg.maintenance.iter().enumerate() {
        println!(
            "[{index}] {}: {:.2} / {} (연 {:.2})",
            item.name,
            item.cost,
            describe_schedule(&item.schedule),
            maintenance_item_annual_cost(item, km_per_year)
        );
    }
}

fn describe_schedule(schedule: &MaintenanceSchedule) -> String {
    match schedule {
        MaintenanceSchedule::Distance { interval_km } => format!("{interval_km:.0} km"),
        MaintenanceSchedule::Time { interval_months } => format!("{interval_months:.0}개월"),
        MaintenanceSchedule::Unscheduled => "주기 없음".to_string(),
    }
}

fn read_trip_request(defaults: &TripRequest) -> Result<TripRequest, AppError> {
    let distance_km = read_f64_or("거리 [km]", defaults.distance_km)?;
    println!("소비율: 1=기준 2=90km/h 3=110km/h 4=130km/h 5=사용자 지정");
    let mode = match read_line(&format!("선택 [{}]: ", defaults.mode))?.trim() {
        "1" => ConsumptionMode::Base,
        "2" => ConsumptionMode::Kmh90,
        "3" => ConsumptionMode::Kmh110,
        "4" => ConsumptionMode::Kmh130,
        "5" => ConsumptionMode::Custom {
            kwh_100km: parse_number(&read_line("사용자 지정 소비율 [kWh/100km]: ")?, 0.0),
        },
        _ => defaults.mode,
    };
    let temp_factor_pct = read_f64_or("외기 온도 보정 [%]", defaults.temp_factor_pct)?;
    let hvac_factor_pct = read_f64_or("냉난방 보정 [%]", defaults.hvac_factor_pct)?;
    println!("충전 경로: 1=가정 2=완속(AC) 3=급속(DC)");
    let source_input = read_line(&format!("선택 [{}]: ", defaults.source))?;
    let source = source_input
        .trim()
        .parse::<ChargingSource>()
        .unwrap_or(defaults.source);
    let start_soc_pct = read_f64_or("출발 충전량 [%]", defaults.start_soc_pct)?;
    let target_soc_pct = read_f64_or("도착 목표 충전량 [%]", defaults.target_soc_pct)?;
    Ok(TripRequest {
        distance_km,
        temp_factor_pct,
        hvac_factor_pct,
        source,
        start_soc_pct,
        target_soc_pct,
        mode,
    })
}

fn prompt(text: &str) -> Result<(), AppError> {
    print!("{text}");
    io::stdout().flush()?;
    Ok(())
}

fn read_line(text: &str) -> Result<String, AppError> {
    prompt(text)?;
    read_line_from(&mut io::stdin().lock())
}

/// 한 줄을 읽는다. 입력이 끝났으면(0바이트) `AppError::InputClosed`.
pub fn read_line_from<R: BufRead>(input: &mut R) -> Result<String, AppError> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(AppError::InputClosed);
    }
    Ok(buf)
}

/// 숫자를 읽는다. 빈 입력이나 해석 불가 입력은 현재 값을 유지한다.
fn read_f64_or(label: &str, current: f64) -> Result<f64, AppError> {
    let s = read_line(&format!("{label} [{current}]: "))?;
    if !s.trim().is_empty() && parse_optional(&s).is_none() {
        println!("숫자가 아니므로 {current}을(를) 유지합니다.");
    }
    Ok(parse_number(&s, current))
}

fn read_opt_or(label: &str, current: Option<f64>) -> Result<Option<f64>, AppError> {
    let shown = current.map_or_else(|| "-".to_string(), |v| v.to_string());
    let s = read_line(&format!("{label} [{shown}]: "))?;
    match s.trim() {
        "" => Ok(current),
        "-" => Ok(None),
        other => Ok(parse_optional(other).or(current)),
    }
}

fn read_index(prompt: &str) -> Result<Option<usize>, AppError> {
    let s = read_line(prompt)?;
    Ok(s.trim().parse::<usize>().ok())
}

fn read_path(prompt: &str) -> Result<PathBuf, AppError> {
    let s = read_line(prompt)?;
    let trimmed = s.trim();
    if trimmed.is_empty() {
        Ok(PathBuf::from("ev-cost-backup.json"))
    } else {
        Ok(PathBuf::from(trimmed))
    }
}
