use numpad_mini::{Configuration, Decimal, NumberPad, OutputControlDataType};

pub fn money_config(places: u32, max_dollars: i64) -> Configuration {
    Configuration::builder()
        .output_control_data_type(OutputControlDataType::Money)
        .currency_decimal_places(places)
        .max_dollar_amount(Decimal::from(max_dollars))
        .build()
        .expect("valid money config")
}

pub fn percentage_config(places: u32, max_percent: i64) -> Configuration {
    Configuration::builder()
        .output_control_data_type(OutputControlDataType::Percentage)
        .percentage_decimal_places(places)
        .max_percentage_amount(Decimal::from(max_percent))
        .build()
        .expect("valid percentage config")
}

pub fn integer_config(max_digits: u32) -> Configuration {
    Configuration::builder()
        .output_control_data_type(OutputControlDataType::Integer)
        .max_integer_digits(max_digits)
        .build()
        .expect("valid integer config")
}

pub fn pad_with(config: Configuration) -> NumberPad {
    NumberPad::builder().configuration(config).build()
}

/// Press each character of `digits` as a digit key.
pub fn type_digits(pad: &mut NumberPad, digits: &str) {
    for ch in digits.chars() {
        let d = ch.to_digit(10).expect("digit") as u8;
        pad.press_digit(d);
    }
}
