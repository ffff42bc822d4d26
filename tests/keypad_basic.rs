use numpad_mini::{
    AuxKey, Configuration, Decimal, FormatContext, Key, NumberPad, OutputControlDataType,
    PadEvent,
};

mod support;
use support::fixed_formatter::FixedFormatter;
use support::fixtures::{integer_config, money_config, pad_with, percentage_config, type_digits};

#[test]
fn money_entry_end_to_end() {
    let mut pad = NumberPad::new();

    for d in [1, 2, 3, 4] {
        pad.press_digit(d);
    }
    assert_eq!(pad.raw_value(), "1234");
    assert_eq!(pad.decimal_value(), Decimal::new(1234, 2));

    pad.backspace();
    assert_eq!(pad.raw_value(), "123");
    assert_eq!(pad.decimal_value(), Decimal::new(123, 2));

    pad.clear();
    assert_eq!(pad.raw_value(), "");
    assert_eq!(pad.decimal_value(), Decimal::ZERO);
    assert_eq!(pad.integer_value(), 0);
}

#[test]
fn digit_press_reports_change_then_tap() {
    let mut pad = NumberPad::new();
    let events = pad.press_digit(7);
    assert_eq!(
        events,
        vec![
            PadEvent::ValueChanged("7".to_string()),
            PadEvent::IntegerKeyTapped
        ]
    );
}

#[test]
fn digits_concatenate_in_order() {
    let mut pad = pad_with(integer_config(10));
    type_digits(&mut pad, "0072");
    assert_eq!(pad.raw_value(), "0072");
    assert_eq!(pad.integer_value(), 72);
    assert_eq!(pad.decimal_value(), Decimal::from(72));
}

#[test]
fn out_of_range_digit_is_ignored() {
    let mut pad = NumberPad::new();
    assert!(pad.press_digit(10).is_empty());
    assert_eq!(pad.raw_value(), "");
}

#[test]
fn backspace_on_empty_is_a_no_op() {
    let mut pad = NumberPad::new();
    assert!(pad.backspace().is_empty());
    assert_eq!(pad.raw_value(), "");

    pad.press_digit(5);
    let events = pad.backspace();
    assert_eq!(pad.raw_value(), "");
    assert_eq!(
        events,
        vec![
            PadEvent::SingleValueDeleted,
            PadEvent::ValueChanged(String::new())
        ]
    );
}

#[test]
fn clear_always_notifies() {
    let mut pad = NumberPad::new();
    let expected = vec![PadEvent::Cleared, PadEvent::ValueChanged(String::new())];
    assert_eq!(pad.clear(), expected);

    type_digits(&mut pad, "987");
    assert_eq!(pad.clear(), expected);
    assert_eq!(pad.raw_value(), "");
}

#[test]
fn handle_key_routes_every_key() {
    let mut pad = NumberPad::new();
    pad.handle_key(Key::Digit(4));
    pad.handle_key(Key::DoubleZero);
    assert_eq!(pad.raw_value(), "400");
    pad.handle_key(Key::Backspace);
    assert_eq!(pad.raw_value(), "40");
    // default right action is backspace
    pad.handle_key(Key::Aux(AuxKey::Right));
    assert_eq!(pad.raw_value(), "4");
    pad.handle_key(Key::Clear);
    assert_eq!(pad.raw_value(), "");
}

#[test]
fn keys_from_characters() {
    let mut pad = NumberPad::new();
    for key in "12\u{7f}5".chars().filter_map(Key::from_char) {
        pad.handle_key(key);
    }
    assert_eq!(pad.raw_value(), "15");
}

#[test]
fn display_text_uses_configured_formatter() {
    let mut pad = NumberPad::new();
    assert_eq!(pad.display_text(), "$0.00");
    type_digits(&mut pad, "123456");
    assert_eq!(pad.display_text(), "$1,234.56");

    pad.configuration().borrow_mut().set_hide_numerical_symbol(true);
    assert_eq!(pad.display_text(), "1,234.56");

    let mut pct = pad_with(percentage_config(2, 100));
    type_digits(&mut pct, "5000");
    assert_eq!(pct.display_text(), "50.00%");

    let mut int = pad_with(integer_config(10));
    type_digits(&mut int, "1234");
    assert_eq!(int.display_text(), "1,234");
}

#[test]
fn custom_formatter_is_injected() {
    let config = Configuration::builder()
        .number_formatter(|v: Decimal, ctx: &FormatContext| {
            format!("{v} ({} places)", ctx.decimal_places)
        })
        .build()
        .unwrap();
    let mut pad = pad_with(config);
    type_digits(&mut pad, "250");
    assert_eq!(pad.display_text(), "2.50 (2 places)");
}

#[test]
fn formatter_struct_follows_mode_changes() {
    let config = Configuration::builder()
        .number_formatter(FixedFormatter { prefix: "= " })
        .currency_decimal_places(3)
        .build()
        .unwrap();
    let mut pad = pad_with(config);
    type_digits(&mut pad, "1500");
    assert_eq!(pad.display_text(), "= 1.500");

    pad.change_output_control_data_type(OutputControlDataType::Integer);
    assert_eq!(pad.display_text(), "= 1500");
}

#[test]
fn snapshot_reflects_state() {
    let mut pad = pad_with(money_config(1, 1000));
    type_digits(&mut pad, "125");
    let snap = pad.snapshot();
    assert_eq!(snap.raw, "125");
    assert_eq!(snap.decimal_value, Decimal::new(125, 1));
    assert_eq!(snap.integer_value, 125);
    assert_eq!(snap.data_type, OutputControlDataType::Money);
    assert_eq!(snap.display_text, "$12.5");
}

#[test]
fn integer_value_ignores_scaling() {
    let mut pad = pad_with(money_config(3, 1000));
    type_digits(&mut pad, "4321");
    assert_eq!(pad.integer_value(), 4321);
    assert_eq!(pad.decimal_value(), Decimal::new(4321, 3));
}
