/// Offset that centers `inner` within `outer`, floored and never negative.
pub(crate) fn centered_offset(outer: i32, inner: i32) -> i32 {
    (outer - inner).div_euclid(2).max(0)
}

pub(crate) fn format_size(width: i32, height: i32) -> String {
    format!("{}x{}", width, height)
}
