// Logging and formatting helpers shared by the components
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

pub fn cwarn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

/// Signed score with an explicit plus for positive values.
pub fn format_signed(v: i64) -> String {
    if v > 0 { format!("+{}", v) } else { v.to_string() }
}

pub fn format_percent(p: f64) -> String {
    if p.is_finite() { format!("{:.0}%", p) } else { "-".to_string() }
}

/// Clock time (HH:MM:SS, UTC) for an epoch-milliseconds timestamp.
pub fn format_clock(at_ms: f64) -> String {
    if !at_ms.is_finite() || at_ms < 0.0 {
        return "--:--:--".to_string();
    }
    let secs = (at_ms / 1000.0).floor() as u64 % 86_400;
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed() {
        assert_eq!(format_signed(15), "+15");
        assert_eq!(format_signed(0), "0");
        assert_eq!(format_signed(-7), "-7");
    }

    #[test]
    fn percent_and_clock() {
        assert_eq!(format_percent(99.6), "100%");
        assert_eq!(format_percent(f64::NAN), "-");
        assert_eq!(format_clock(3_723_000.0), "01:02:03");
        assert_eq!(format_clock(86_400_000.0 + 61_000.0), "00:01:01");
        assert_eq!(format_clock(-1.0), "--:--:--");
    }
}
