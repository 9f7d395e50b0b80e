use serde::Serialize;

/// Opaque native window handle, carried as its raw pointer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WindowHandle(pub(crate) isize);

impl WindowHandle {
    pub(crate) const NULL: WindowHandle = WindowHandle(0);

    pub(crate) fn is_null(&self) -> bool {
        self.0 == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DisplayMetric {
    ScreenWidth,
    ScreenHeight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct PlacementRequest {
    pub(crate) screen_width: i32,
    pub(crate) screen_height: i32,
    pub(crate) window_width: i32,
    pub(crate) window_height: i32,
    pub(crate) x: i32,
    pub(crate) y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlacementReport {
    pub(crate) handle: WindowHandle,
    pub(crate) previous_style: i32,
    pub(crate) request: PlacementRequest,
    pub(crate) outcome: Result<(), crate::placer::PlacementError>,
    /// Final status line printed for the outcome.
    pub(crate) status_line: String,
}
