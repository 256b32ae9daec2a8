/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// PDF date string (`D:YYYYMMDDHHmmSS+00'00'`) for a UTC timestamp already
/// formatted as `YYYYMMDDHHmmSS`.
pub fn pdf_date(utc_compact: &str) -> String {
    format!("D:{utc_compact}+00'00'")
}
