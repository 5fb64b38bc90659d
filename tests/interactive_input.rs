//! 대화형 입력 처리 테스트. 표준 입력 대신 메모리 버퍼를 넣는다.
use std::io::Cursor;
use std::path::Path;

use ev_cost_toolbox::app::{persist, AppError};
use ev_cost_toolbox::config::Config;
use ev_cost_toolbox::ui_cli::{read_line_from, read_menu_choice, MenuChoice};

#[test]
fn menu_skips_invalid_lines_until_a_choice() {
    let mut input = Cursor::new("x\n\n7\n");
    assert_eq!(read_menu_choice(&mut input).expect("choice"), MenuChoice::Trip);
}

#[test]
fn closed_input_exits_the_menu() {
    let mut empty = Cursor::new("");
    assert_eq!(read_menu_choice(&mut empty).expect("eof"), MenuChoice::Exit);

    // 잘못된 입력 뒤에 입력이 끝나도 같은 줄을 반복하지 않는다.
    let mut tail = Cursor::new("abc\n");
    assert_eq!(read_menu_choice(&mut tail).expect("eof after junk"), MenuChoice::Exit);
}

#[test]
fn read_line_reports_end_of_input() {
    let mut input = Cursor::new("42\n");
    assert_eq!(read_line_from(&mut input).expect("line"), "42\n");
    assert!(matches!(read_line_from(&mut input), Err(AppError::InputClosed)));
}

#[test]
fn persist_propagates_save_failure() {
    let missing_dir = std::env::temp_dir()
        .join(format!("ev_cost_toolbox_{}_missing", std::process::id()))
        .join("nested")
        .join("ev_cost.toml");
    let result = persist(&Config::default(), Path::new(&missing_dir));
    assert!(matches!(result, Err(AppError::Config(_))));
}
