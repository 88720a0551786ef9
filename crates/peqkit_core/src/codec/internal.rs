//! Internal `PEQ:` format
//!
//! Compact persistence format: `"PEQ: f g q t; f g q t; "`. Each record is
//! frequency, gain, Q and the filter type code separated by spaces.

use tracing::debug;

use peqkit_dsp::{Band, FilterType};

use super::number::{format_compact, FREQ_DECIMALS, GAIN_DECIMALS, Q_DECIMALS};

/// Leading tag of an internal-format string
pub const INTERNAL_PREFIX: &str = "PEQ:";

/// Bands decoded from an internal-format string
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InternalImport {
    pub bands: Vec<Band>,
    /// Non-blank segments that did not hold four parseable numbers
    pub dropped_segments: usize,
}

/// Encode bands in list order
pub fn serialize(bands: &[Band]) -> String {
    let mut out = String::from("PEQ: ");
    for band in bands {
        out.push_str(&format_compact(band.frequency(), FREQ_DECIMALS));
        out.push(' ');
        out.push_str(&format_compact(band.gain(), GAIN_DECIMALS));
        out.push(' ');
        out.push_str(&format_compact(band.q(), Q_DECIMALS));
        out.push(' ');
        out.push_str(&band.filter_type().code().to_string());
        out.push_str("; ");
    }
    out
}

/// Decode an internal-format string
///
/// Malformed segments are dropped one at a time; the rest still decode.
pub fn deserialize(text: &str) -> InternalImport {
    let mut import = InternalImport::default();

    let normalized = text.replace(INTERNAL_PREFIX, "").replace('\n', " ");
    for segment in normalized.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        match parse_record(segment) {
            Some(band) => import.bands.push(band),
            None => {
                debug!("deserialize: dropping malformed segment '{}'", segment);
                import.dropped_segments += 1;
            }
        }
    }

    import
}

fn parse_record(segment: &str) -> Option<Band> {
    let mut tokens = segment.split_whitespace();
    let frequency = tokens.next()?.parse::<f64>().ok()?;
    let gain = tokens.next()?.parse::<f64>().ok()?;
    let q = tokens.next()?.parse::<f64>().ok()?;
    let code = tokens.next()?.parse::<i32>().ok()?;

    Some(Band::new(frequency, gain, q, FilterType::from_code(code)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64, eps: f64) {
        assert!((a - b).abs() <= eps, "{} != {} (eps {})", a, b, eps);
    }

    #[test]
    fn test_serialize_format() {
        let bands = [
            Band::new(1000.0, 3.0, 1.41, FilterType::Peaking),
            Band::new(100.0, -5.25, 0.7071, FilterType::LowShelf),
        ];
        assert_eq!(serialize(&bands), "PEQ: 1000 3 1.41 0; 100 -5.25 0.7071 1; ");
        assert_eq!(serialize(&[]), "PEQ: ");
    }

    #[test]
    fn test_round_trip_within_precision() {
        let bands = vec![
            Band::new(31.123456, 4.1234567891, 0.707106, FilterType::LowShelf),
            Band::new(1000.0, -2.5, 1.41, FilterType::Peaking),
            Band::new(12345.678, 0.000001, 3.33333, FilterType::HighShelf),
        ];

        let decoded = deserialize(&serialize(&bands));
        assert_eq!(decoded.dropped_segments, 0);
        assert_eq!(decoded.bands.len(), bands.len());

        for (original, restored) in bands.iter().zip(&decoded.bands) {
            assert_close(original.frequency(), restored.frequency(), 0.005);
            assert_close(original.gain(), restored.gain(), 0.0000005);
            assert_close(original.q(), restored.q(), 0.00005);
            assert_eq!(original.filter_type(), restored.filter_type());
        }
    }

    #[test]
    fn test_malformed_segments_are_dropped() {
        let decoded =
            deserialize("PEQ: 1000 3 1.41 0; abc 1 1 0; 200 1 1; 300 2 0.5 1.5; 400 -1 2 2; ");

        assert_eq!(decoded.bands.len(), 2);
        assert_eq!(decoded.dropped_segments, 3);
        assert_eq!(decoded.bands[0].frequency(), 1000.0);
        assert_eq!(decoded.bands[1].filter_type(), FilterType::HighShelf);
    }

    #[test]
    fn test_tolerates_newlines_and_extra_whitespace() {
        let decoded = deserialize("PEQ:\n  60   6 0.7 1 ;\n\n;8000 -3 0.7 2");

        assert_eq!(decoded.bands.len(), 2);
        assert_eq!(decoded.bands[0].filter_type(), FilterType::LowShelf);
        assert_eq!(decoded.bands[1].gain(), -3.0);
    }

    #[test]
    fn test_unknown_type_code_is_peaking() {
        let decoded = deserialize("PEQ: 500 2 1 9; ");
        assert_eq!(decoded.bands[0].filter_type(), FilterType::Peaking);
    }

    #[test]
    fn test_extra_tokens_are_ignored() {
        let decoded = deserialize("PEQ: 500 2 1 2 trailing junk; ");
        assert_eq!(decoded.bands.len(), 1);
        assert_eq!(decoded.bands[0].filter_type(), FilterType::HighShelf);
    }

    #[test]
    fn test_empty_input() {
        assert!(deserialize("").bands.is_empty());
        assert!(deserialize("PEQ: ").bands.is_empty());
    }
}
