//! EqualizerAPO text format
//!
//! ```text
//! Preamp: -3 dB
//! Filter 1: ON PK Fc 1000 Hz Gain 3 dB Q 1.41
//! Filter 2: ON LSC Fc 100 Hz Gain 5 dB Q 0.71
//! ```
//!
//! Import is line oriented and tolerant: each line is classified on its own
//! and a bad line never aborts the rest of the document.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use peqkit_dsp::{Band, FilterType};

use super::number::{format_compact, FREQ_DECIMALS, GAIN_DECIMALS, Q_DECIMALS};

/// Preamp range accepted on import (dB)
pub const PREAMP_MIN_DB: f64 = -30.0;
pub const PREAMP_MAX_DB: f64 = 0.0;

/// What an EqualizerAPO import kept and skipped
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ApoImportResult {
    /// Well-formed filter lines whose type is not supported
    pub skipped_filters: usize,
    /// Non-comment lines that were not understood at all
    pub ignored_lines: usize,
    /// Parsed preamp, clamped to [-30, 0]; 0 when absent
    pub preamp_db: f64,
}

/// Parsed EqualizerAPO document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApoImport {
    pub bands: Vec<Band>,
    pub result: ApoImportResult,
}

fn preamp_regex() -> &'static Regex {
    static PREAMP: OnceLock<Regex> = OnceLock::new();
    PREAMP.get_or_init(|| {
        Regex::new(r"(?i)Preamp:\s*([-0-9.]+)\s*dB").expect("preamp pattern is a valid regex")
    })
}

fn filter_regex() -> &'static Regex {
    static FILTER: OnceLock<Regex> = OnceLock::new();
    FILTER.get_or_init(|| {
        Regex::new(
            r"(?i)Filter\s+[0-9]+:\s+ON\s+(\S+)\s+Fc\s+([0-9.]+)\s+Hz\s+Gain\s+([-0-9.]+)\s+dB\s+Q\s+([0-9.]+)",
        )
        .expect("filter pattern is a valid regex")
    })
}

/// Export bands and preamp, one `\n`-terminated line each
pub fn to_apo_string(bands: &[Band], preamp_db: f64) -> String {
    let mut out = format!("Preamp: {} dB\n", format_compact(preamp_db, GAIN_DECIMALS));
    for (i, band) in bands.iter().enumerate() {
        out.push_str(&format!(
            "Filter {}: ON {} Fc {} Hz Gain {} dB Q {}\n",
            i + 1,
            band.filter_type().apo_label(),
            format_compact(band.frequency(), FREQ_DECIMALS),
            format_compact(band.gain(), GAIN_DECIMALS),
            format_compact(band.q(), Q_DECIMALS),
        ));
    }
    out
}

/// Parse an EqualizerAPO document
pub fn from_apo_string(text: &str) -> ApoImport {
    let mut import = ApoImport::default();

    // Lone `\r` counts as a line break too
    for line in text.split(['\n', '\r']) {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if starts_with_ignore_case(trimmed, "Preamp") {
            match preamp_regex().captures(trimmed) {
                Some(caps) => {
                    let preamp = caps[1].parse::<f64>().unwrap_or(0.0);
                    import.result.preamp_db = preamp.clamp(PREAMP_MIN_DB, PREAMP_MAX_DB);
                }
                None => {
                    debug!("from_apo_string: could not parse preamp line: {}", trimmed);
                    import.result.ignored_lines += 1;
                }
            }
            continue;
        }

        let Some(caps) = filter_regex().captures(trimmed) else {
            debug!("from_apo_string: skipping unrecognized line: {}", trimmed);
            import.result.ignored_lines += 1;
            continue;
        };

        let (Ok(frequency), Ok(gain), Ok(q)) = (
            caps[2].parse::<f64>(),
            caps[3].parse::<f64>(),
            caps[4].parse::<f64>(),
        ) else {
            debug!("from_apo_string: malformed numbers in line: {}", trimmed);
            import.result.ignored_lines += 1;
            continue;
        };

        let Some(filter_type) = FilterType::from_apo_label(&caps[1]) else {
            debug!("from_apo_string: unsupported filter type '{}', skipping", &caps[1]);
            import.result.skipped_filters += 1;
            continue;
        };

        import.bands.push(Band::new(frequency, gain, q, filter_type));
    }

    debug!(
        "from_apo_string: {} bands, {} unsupported filters, preamp {} dB",
        import.bands.len(),
        import.result.skipped_filters,
        import.result.preamp_db
    );

    import
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_format() {
        let bands = [
            Band::new(1000.0, 3.0, 1.41, FilterType::Peaking),
            Band::new(100.0, 5.0, 0.71, FilterType::LowShelf),
            Band::new(10000.0, -2.123, 0.7, FilterType::HighShelf),
        ];

        assert_eq!(
            to_apo_string(&bands, -3.5),
            "Preamp: -3.5 dB\n\
             Filter 1: ON PK Fc 1000 Hz Gain 3 dB Q 1.41\n\
             Filter 2: ON LSC Fc 100 Hz Gain 5 dB Q 0.71\n\
             Filter 3: ON HSC Fc 10000 Hz Gain -2.123 dB Q 0.7\n"
        );
    }

    #[test]
    fn test_export_empty_list_has_preamp_only() {
        assert_eq!(to_apo_string(&[], 0.0), "Preamp: 0 dB\n");
    }

    #[test]
    fn test_preamp_is_clamped() {
        let import = from_apo_string("Preamp: -45 dB\nFilter 1: ON PK Fc 1000 Hz Gain 3 dB Q 1.41");

        assert_eq!(import.result.preamp_db, -30.0);
        assert_eq!(import.bands.len(), 1);

        let band = import.bands[0];
        assert_eq!(band.filter_type(), FilterType::Peaking);
        assert_eq!(band.frequency(), 1000.0);
        assert_eq!(band.gain(), 3.0);
        assert_eq!(band.q(), 1.41);

        let positive = from_apo_string("Preamp: 6 dB");
        assert_eq!(positive.result.preamp_db, 0.0);
    }

    #[test]
    fn test_unsupported_filter_is_counted() {
        let import = from_apo_string(
            "Filter 1: ON PK Fc 1000 Hz Gain 3 dB Q 1.41\n\
             Filter 2: ON LP Fc 80 Hz Gain 0 dB Q 0.7\n\
             Filter 3: ON HS Fc 9000 Hz Gain -2 dB Q 0.7\n",
        );

        assert_eq!(import.bands.len(), 2);
        assert_eq!(import.result.skipped_filters, 1);
        assert_eq!(import.bands[1].filter_type(), FilterType::HighShelf);
    }

    #[test]
    fn test_comments_blank_and_unknown_lines() {
        let import = from_apo_string(
            "# Generated by AutoEQ\n\
             \n\
             Device: Speakers\n\
             filter 1: on lsc fc 105 hz gain 6.5 db q 0.70\n\
             Include: other.txt\n",
        );

        assert_eq!(import.bands.len(), 1);
        assert_eq!(import.bands[0].filter_type(), FilterType::LowShelf);
        assert_eq!(import.result.skipped_filters, 0);
        assert_eq!(import.result.ignored_lines, 2);
        assert_eq!(import.result.preamp_db, 0.0);
    }

    #[test]
    fn test_unparsable_numbers_drop_line_silently() {
        let import = from_apo_string(
            "Preamp: - dB\nFilter 1: ON PK Fc 1.0.0 Hz Gain 3 dB Q 1\nFilter 2: ON XX Fc 1..2 Hz Gain 3 dB Q 1",
        );

        assert!(import.bands.is_empty());
        assert_eq!(import.result.skipped_filters, 0);
        assert_eq!(import.result.preamp_db, 0.0);
    }

    #[test]
    fn test_crlf_line_endings() {
        let import =
            from_apo_string("Preamp: -6.2 dB\r\nFilter 1: ON PK Fc 250 Hz Gain -1.5 dB Q 2\r\n");

        assert_eq!(import.result.preamp_db, -6.2);
        assert_eq!(import.bands.len(), 1);
    }

    #[test]
    fn test_bare_cr_line_endings() {
        let import = from_apo_string(
            "Preamp: -3 dB\rFilter 1: ON PK Fc 1000 Hz Gain 3 dB Q 1.41\rFilter 2: ON HS Fc 8000 Hz Gain -2 dB Q 0.7\r",
        );

        assert_eq!(import.result.preamp_db, -3.0);
        assert_eq!(import.bands.len(), 2);
        assert_eq!(import.bands[0].frequency(), 1000.0);
        assert_eq!(import.bands[1].filter_type(), FilterType::HighShelf);
    }

    #[test]
    fn test_round_trip_within_precision() {
        let bands = vec![
            Band::new(64.129, 7.1234567, 0.66666, FilterType::LowShelf),
            Band::new(2150.5, -3.25, 4.0, FilterType::Peaking),
            Band::new(11000.0, 2.0, 0.71, FilterType::HighShelf),
        ];

        let import = from_apo_string(&to_apo_string(&bands, -7.75));
        assert_eq!(import.result.preamp_db, -7.75);
        assert_eq!(import.bands.len(), 3);

        for (original, restored) in bands.iter().zip(&import.bands) {
            assert!((original.frequency() - restored.frequency()).abs() <= 0.005);
            assert!((original.gain() - restored.gain()).abs() <= 0.0000005);
            assert!((original.q() - restored.q()).abs() <= 0.00005);
            assert_eq!(original.filter_type(), restored.filter_type());
        }
    }
}
