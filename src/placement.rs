use crate::types::PlacementRequest;
use crate::util::centered_offset;

pub(crate) const WINDOW_WIDTH: i32 = 400;
pub(crate) const WINDOW_HEIGHT: i32 = 200;
pub(crate) const DEFAULT_SCREEN_WIDTH: i32 = 1920;
pub(crate) const DEFAULT_SCREEN_HEIGHT: i32 = 1080;

/// Substitutes the default resolution when the display query came back empty.
/// A zero in either dimension replaces both.
pub(crate) fn effective_screen_size(screen_width: i32, screen_height: i32) -> (i32, i32) {
    if screen_width <= 0 || screen_height <= 0 {
        (DEFAULT_SCREEN_WIDTH, DEFAULT_SCREEN_HEIGHT)
    } else {
        (screen_width, screen_height)
    }
}

pub(crate) fn compute_placement(screen_width: i32, screen_height: i32) -> PlacementRequest {
    let (screen_width, screen_height) = effective_screen_size(screen_width, screen_height);
    PlacementRequest {
        screen_width,
        screen_height,
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        x: centered_offset(screen_width, WINDOW_WIDTH),
        y: centered_offset(screen_height, WINDOW_HEIGHT),
    }
}
