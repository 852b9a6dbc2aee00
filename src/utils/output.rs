use colored::{Color, Colorize};

/// Makes `colored` emit escape codes even when the stream is not a terminal.
pub fn force_color() {
    colored::control::set_override(true);
}

pub fn paint(text: &str, color: Color) -> String {
    text.color(color).to_string()
}

/// Formats a number for display: `-0` prints as `0` and infinities as
/// `Infinity` / `-Infinity`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        value.to_string()
    }
}

pub fn result_text(value: f64) -> String {
    format!("Result: {}", format_number(value))
}

pub fn error_text(message: &str) -> String {
    format!("Error: {}", message)
}

pub fn success_line(value: f64) -> String {
    paint(&result_text(value), Color::Green)
}

pub fn error_line(message: &str) -> String {
    paint(&error_text(message), Color::Red)
}
