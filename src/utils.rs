use rust_decimal::prelude::*;

/// Format a value with an SI suffix, rounded to `digits` significant figures.
pub fn format_si(value: &f64, digits: u32) -> String {
    fn set_suffix(thousands: i8) -> &'static str {
        const POSITIVE: [&str; 9] = ["", "k", "M", "G", "T", "P", "E", "Z", "Y"];
        const NEGATIVE: [&str; 9] = ["", "m", "μ", "n", "p", "f", "a", "z", "y"];
        match thousands {
            -8..=-1 => NEGATIVE[-thousands as usize],
            0..=8 => POSITIVE[thousands as usize],
            _ => "",
        }
    }

    if *value == 0.0 || !value.is_finite() {
        return value.to_string();
    }
    let magnitude = value.abs().log10().floor() as i32;
    let thousands = magnitude.div_euclid(3).clamp(-8, 8) as i8;
    let prefix = if thousands < 0 {
        value * 10f64.powi(-3 * thousands as i32)
    } else {
        value / 10f64.powi(3 * thousands as i32)
    };
    let rounded = match Decimal::from_f64_retain(prefix)
        .and_then(|d| d.round_sf_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero))
    {
        Some(d) => d.normalize().to_string(),
        None => prefix.to_string(),
    };
    format!("{}{}", rounded, set_suffix(thousands))
}
