//! Locale-invariant decimal formatting shared by the text codecs

/// Decimal places used for frequencies in every format
pub(crate) const FREQ_DECIMALS: usize = 2;
/// Decimal places used for gains (band gain, preamp, curve gain)
pub(crate) const GAIN_DECIMALS: usize = 6;
/// Decimal places used for Q
pub(crate) const Q_DECIMALS: usize = 4;

/// Round to at most `decimals` places, then drop trailing zeros
///
/// `1000.0` prints as `1000`, `1.41` as `1.41`, `0.0000004` (6 places) as `0`.
pub(crate) fn format_compact(value: f64, decimals: usize) -> String {
    let mut text = format!("{:.*}", decimals, value);
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text.remove(0);
    }
    text
}

/// Round to exactly `decimals` places
pub(crate) fn format_fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}
