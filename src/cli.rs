use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;
use crate::energy::ChargingSource;
use crate::input::finite_or;
use crate::trip::{ConsumptionMode, TripRequest};

/// 전기차 유지비 및 여행 계산기.
#[derive(Debug, Parser)]
#[command(name = "ev_cost_toolbox", version)]
pub struct Cli {
    /// 설정 파일 경로
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// 하위 명령이 없으면 대화형 메뉴를 실행한다.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 연간/월간/km당 유지비 요약
    Summary {
        /// JSON으로 출력
        #[arg(long)]
        json: bool,
    },
    /// 여행 에너지/비용 및 도달 가능 여부 계산
    Trip(TripArgs),
    /// 여행 기록 관리
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    /// 정비 항목 관리
    Maintenance {
        #[command(subcommand)]
        action: MaintenanceAction,
    },
    /// 설정과 기록을 JSON 파일로 내보내기
    Export { path: PathBuf },
    /// JSON 백업 파일 가져오기 (현재 설정을 대체)
    Import { path: PathBuf },
    /// 모든 설정과 기록을 기본값으로 초기화
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum HistoryAction {
    /// 최신 순으로 목록 표시
    List,
    /// 저장된 여행을 다시 계산해서 표시
    Show { index: usize },
    /// 기록 하나 삭제
    Remove { index: usize },
    /// 기록 전체 삭제
    Clear,
}

#[derive(Debug, Subcommand)]
pub enum MaintenanceAction {
    /// 항목 목록과 항목별 연간 비용 표시
    List,
    /// 항목 추가. 거리와 기간을 모두 주면 거리 기준이 우선한다.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        cost: f64,
        /// 주기 [km]
        #[arg(long)]
        km: Option<f64>,
        /// 주기 [개월]
        #[arg(long)]
        months: Option<f64>,
    },
    /// 항목 하나 삭제
    Remove { index: usize },
    /// 기본 목록으로 되돌리기
    Reset,
}

/// 소비율 선택지.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Base,
    #[value(name = "90")]
    Kmh90,
    #[value(name = "110")]
    Kmh110,
    #[value(name = "130")]
    Kmh130,
    Custom,
}

#[derive(Debug, clap::Args)]
pub struct TripArgs {
    /// 거리 [km]
    #[arg(long, default_value_t = 250.0)]
    pub distance: f64,
    #[arg(long, value_enum, default_value_t = ModeArg::Base)]
    pub mode: ModeArg,
    /// 사용자 지정 소비율 [kWh/100km] (mode=custom)
    #[arg(long)]
    pub custom: Option<f64>,
    /// 외기 온도 보정 [%]
    #[arg(long, default_value_t = 0.0)]
    pub temp: f64,
    /// 냉난방 보정 [%]
    #[arg(long, default_value_t = 0.0)]
    pub hvac: f64,
    /// 충전 경로 (home/ac/hpc)
    #[arg(long, default_value = "hpc")]
    pub source: ChargingSource,
    /// 출발 충전량 [%]
    #[arg(long, default_value_t = 80.0)]
    pub start: f64,
    /// 도착 목표 충전량 [%]
    #[arg(long, default_value_t = 10.0)]
    pub target: f64,
    /// 결과를 여행 기록에 저장
    #[arg(long)]
    pub save: bool,
    /// JSON으로 출력
    #[arg(long)]
    pub json: bool,
}

impl TripArgs {
    /// 명령행 인자를 여행 입력으로 바꾼다. custom 모드에서 값이 없으면 0으로 둔다.
    /// `nan`/`inf` 같은 값은 기본 입력값으로 대체한다.
    pub fn to_request(&self) -> TripRequest {
        let d = TripRequest::default();
        let mode = match self.mode {
            ModeArg::Base => ConsumptionMode::Base,
            ModeArg::Kmh90 => ConsumptionMode::Kmh90,
            ModeArg::Kmh110 => ConsumptionMode::Kmh110,
            ModeArg::Kmh130 => ConsumptionMode::Kmh130,
            ModeArg::Custom => ConsumptionMode::Custom {
                kwh_100km: finite_or(self.custom.unwrap_or(0.0), 0.0),
            },
        };
        TripRequest {
            distance_km: finite_or(self.distance, d.distance_km),
            temp_factor_pct: finite_or(self.temp, d.temp_factor_pct),
            hvac_factor_pct: finite_or(self.hvac, d.hvac_factor_pct),
            source: self.source,
            start_soc_pct: finite_or(self.start, d.start_soc_pct),
            target_soc_pct: finite_or(self.target, d.target_soc_pct),
            mode,
        }
    }
}
