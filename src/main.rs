use clap::Parser;
use ev_cost_toolbox::{app, cli::Cli, config::Config, init_tracing};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 하위 명령 또는 대화형 메뉴를 실행한다.
fn main() {
    let cli = Cli::parse();
    init_tracing();
    if let Err(err) = try_run(cli) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = Config::load_or_default(&cli.config)?;
    match cli.command {
        Some(command) => app::execute(command, &mut cfg, &cli.config)?,
        None => app::run(&mut cfg, &cli.config)?,
    }
    Ok(())
}
