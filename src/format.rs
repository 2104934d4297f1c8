//! Human-readable byte sizes

const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];
const STEP: u64 = 1024;

/// Format a byte count as e.g. "1.5 KB".
///
/// The unit is the largest one not exceeding the value, clamped to TB. The
/// scaled value is rounded to two decimals with trailing zeros dropped.
pub fn format_size(bytes: u64) -> String {
  if bytes == 0 {
    return "0 Bytes".to_string();
  }

  let mut index = 0;
  let mut threshold = STEP;
  while index < UNITS.len() - 1 && bytes >= threshold {
    index += 1;
    match threshold.checked_mul(STEP) {
      Some(next) => threshold = next,
      None => break,
    }
  }

  let scaled = bytes as f64 / (STEP as f64).powi(index as i32);
  let rounded = (scaled * 100.0).round() / 100.0;
  format!("{} {}", rounded, UNITS[index])
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_format_size() {
    assert_eq!(format_size(0), "0 Bytes");
    assert_eq!(format_size(1), "1 Bytes");
    assert_eq!(format_size(800), "800 Bytes");
    assert_eq!(format_size(1023), "1023 Bytes");
    assert_eq!(format_size(1024), "1 KB");
    assert_eq!(format_size(1536), "1.5 KB");
    assert_eq!(format_size(2048), "2 KB");
    assert_eq!(format_size(1048576), "1 MB");
    assert_eq!(format_size(5 * 1024 * 1024 * 1024), "5 GB");
  }

  #[test]
  fn test_format_size_rounding() {
    // 1234 / 1024 = 1.205...
    assert_eq!(format_size(1234), "1.21 KB");
    // 1025 / 1024 = 1.00097...
    assert_eq!(format_size(1025), "1 KB");
  }

  #[test]
  fn test_format_size_large_values_clamp_to_tb() {
    let tb = 1024u64.pow(4);
    assert_eq!(format_size(tb), "1 TB");
    assert_eq!(format_size(1024 * tb), "1024 TB");
    assert!(format_size(u64::MAX).ends_with(" TB"));
  }
}
