//! Display formatting for metric values.

/// Two-decimal kilometers, e.g. `10.00`.
pub fn format_distance(km: f64) -> String {
    if !km.is_finite() {
        return "0.00".to_string();
    }
    format!("{:.2}", km.max(0.0))
}

/// Minutes rendered as `HH:MM`.
pub fn format_duration(minutes: f64) -> String {
    if !minutes.is_finite() {
        return "00:00".to_string();
    }
    let total = minutes.max(0.0).floor() as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Minutes per kilometer rendered as `MM:SS`.
pub fn format_pace(pace: f64) -> String {
    if !pace.is_finite() {
        return "00:00".to_string();
    }
    let pace = pace.max(0.0);
    let mut minutes = pace.floor() as u64;
    let mut seconds = ((pace - pace.floor()) * 60.0).round() as u64;
    if seconds == 60 {
        minutes += 1;
        seconds = 0;
    }
    format!("{minutes:02}:{seconds:02}")
}
