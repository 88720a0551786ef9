//! GraphicEQ curve format (export only)
//!
//! Encodes an already sampled response as `"GraphicEQ: f g; f g; "`. The
//! curve is tabulated, so it cannot be turned back into bands.

use peqkit_dsp::ResponsePoint;

use super::number::{format_fixed, FREQ_DECIMALS, GAIN_DECIMALS};

/// Leading tag of a GraphicEQ string
pub const GRAPHIC_EQ_PREFIX: &str = "GraphicEQ:";

/// Format a sampled curve, adding `preamp_offset` dB to every gain
pub fn to_graphic_eq_string(response: &[ResponsePoint], preamp_offset: f64) -> String {
    let mut out = format!("{} ", GRAPHIC_EQ_PREFIX);
    for point in response {
        out.push_str(&format_fixed(point.frequency, FREQ_DECIMALS));
        out.push(' ');
        out.push_str(&format_fixed(point.gain_db + preamp_offset, GAIN_DECIMALS));
        out.push_str("; ");
    }
    out
}
