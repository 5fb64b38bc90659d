use ev_cost_toolbox::input::{finite_opt, finite_or, parse_number, parse_optional};

#[test]
fn unparseable_text_uses_fallback() {
    assert_eq!(parse_number("12.5", 0.0), 12.5);
    assert_eq!(parse_number(" 0,30 ", 1.0), 0.30);
    assert_eq!(parse_number("", 75.0), 75.0);
    assert_eq!(parse_number("abc", 18.0), 18.0);
    assert_eq!(parse_number("NaN", 3.0), 3.0);
    assert_eq!(parse_number("inf", 3.0), 3.0);
}

#[test]
fn blank_optional_is_none() {
    assert_eq!(parse_optional("   "), None);
    assert_eq!(parse_optional("60000"), Some(60_000.0));
    assert_eq!(parse_optional("-"), None);
}

#[test]
fn non_finite_values_are_replaced() {
    assert_eq!(finite_or(f64::NAN, 1.0), 1.0);
    assert_eq!(finite_or(f64::INFINITY, 1.0), 1.0);
    assert_eq!(finite_or(-4.0, 1.0), -4.0);
    assert_eq!(finite_opt(Some(f64::NEG_INFINITY)), None);
    assert_eq!(finite_opt(Some(2.0)), Some(2.0));
}
