use chrono::Utc;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::cli::{Command, HistoryAction, MaintenanceAction};
use crate::config::{Config, ConfigError};
use crate::ownership::compute_totals;
use crate::profile::{MaintenanceError, MaintenanceItem};
use crate::trip::{compute_trip, TripRecord};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("정비 항목 오류: {0}")]
    Maintenance(#[from] MaintenanceError),
    #[error("출력 오류: {0}")]
    Output(#[from] serde_json::Error),
    #[error("{kind} 번호 {index}이(가) 없습니다.")]
    InvalidIndex { kind: &'static str, index: usize },
    #[error("입력이 끝났습니다.")]
    InputClosed,
}

/// 설정을 저장하고 저장이 끝난 뒤에 알린다.
pub fn persist(config: &Config, path: &Path) -> Result<(), AppError> {
    config.save(path)?;
    println!("저장했습니다: {}", path.display());
    Ok(())
}

/// 대화형 CLI의 메인 루프를 실행한다. 설정을 바꾸는 메뉴 뒤에는 곧바로 저장한다.
pub fn run(config: &mut Config, path: &Path) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::Summary => ui_cli::print_breakdown(&compute_totals(config)),
            MenuChoice::Vehicle => {
                ui_cli::handle_vehicle(config)?;
                persist(config, path)?;
            }
            MenuChoice::EnergyUsage => {
                ui_cli::handle_energy_usage(config)?;
                persist(config, path)?;
            }
            MenuChoice::FixedCosts => {
                ui_cli::handle_fixed_costs(config)?;
                persist(config, path)?;
            }
            MenuChoice::Tires => {
                ui_cli::handle_tires(config)?;
                persist(config, path)?;
            }
            MenuChoice::Maintenance => {
                ui_cli::handle_maintenance(config)?;
                persist(config, path)?;
            }
            MenuChoice::Trip => {
                ui_cli::handle_trip(config)?;
                persist(config, path)?;
            }
            MenuChoice::History => {
                ui_cli::handle_history(config)?;
                persist(config, path)?;
            }
            MenuChoice::Backup => {
                ui_cli::handle_backup(config)?;
                persist(config, path)?;
            }
            MenuChoice::Exit => {
                config.save(path)?;
                println!("프로그램을 종료합니다.");
                break;
            }
        }
    }
    Ok(())
}

/// 하위 명령 하나를 실행한다. 설정이 바뀌면 `path`에 저장한다.
pub fn execute(command: Command, config: &mut Config, path: &Path) -> Result<(), AppError> {
    match command {
        Command::Summary { json } => {
            let totals = compute_totals(config);
            if json {
                println!("{}", serde_json::to_string_pretty(&totals)?);
            } else {
                ui_cli::print_breakdown(&totals);
            }
        }
        Command::Trip(args) => {
            let request = args.to_request();
            let result = compute_trip(&config.vehicle, &config.tariff, &request);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                ui_cli::print_trip_result(&result);
            }
            if args.save {
                config
                    .trips
                    .push(TripRecord::from_result(&request, &result, Utc::now()));
                config.save(path)?;
                info!(trips = config.trips.len(), "trip saved");
                println!("여행을 기록했습니다.");
            }
        }
        Command::History { action } => match action {
            HistoryAction::List => ui_cli::print_history(config),
            HistoryAction::Show { index } => {
                let record = config.trips.get(index).ok_or(AppError::InvalidIndex {
                    kind: "여행 기록",
                    index,
                })?;
                let result = compute_trip(&config.vehicle, &config.tariff, &record.request);
                ui_cli::print_trip_request(&record.request);
                ui_cli::print_trip_result(&result);
            }
            HistoryAction::Remove { index } => {
                config.trips.remove(index).ok_or(AppError::InvalidIndex {
                    kind: "여행 기록",
                    index,
                })?;
                config.save(path)?;
                println!("기록을 삭제했습니다.");
            }
            HistoryAction::Clear => {
                config.trips.clear();
                config.save(path)?;
                println!("여행 기록을 모두 삭제했습니다.");
            }
        },
        Command::Maintenance { action } => match action {
            MaintenanceAction::List => ui_cli::print_maintenance(config),
            MaintenanceAction::Add {
                name,
                cost,
                km,
                months,
            } => {
                let item = MaintenanceItem::new(&name, cost, km, months)?;
                config.maintenance.push(item);
                config.save(path)?;
                println!("정비 항목을 추가했습니다.");
            }
            MaintenanceAction::Remove { index } => {
                config
                    .remove_maintenance(index)
                    .ok_or(AppError::InvalidIndex { kind: "정비 항목", index })?;
                config.save(path)?;
                println!("정비 항목을 삭제했습니다.");
            }
            MaintenanceAction::Reset => {
                config.reset_maintenance();
                config.save(path)?;
                println!("정비 항목을 기본값으로 되돌렸습니다.");
            }
        },
        Command::Export { path: target } => {
            config.export_json(&target)?;
            println!("내보내기 완료: {}", target.display());
        }
        Command::Import { path: source } => {
            *config = Config::import_json(&source)?;
            config.save(path)?;
            println!("가져오기 완료.");
        }
        Command::Reset => {
            config.reset();
            config.save(path)?;
            println!("모든 설정을 초기화했습니다.");
        }
    }
    Ok(())
}
