use crate::types::{DisplayMetric, WindowHandle};

/// Window style with no caption, border, or system menu.
pub(crate) const POPUP_STYLE: i32 = 0x8000_0000_u32 as i32;
/// Re-evaluate the frame after a style change.
pub(crate) const FLAG_FRAME_CHANGED: u32 = 0x0020;
pub(crate) const FLAG_SHOW_WINDOW: u32 = 0x0040;

/// The slice of the host windowing subsystem the placer needs.
pub(crate) trait WindowingPort {
    fn console_window(&self) -> WindowHandle;
    fn display_metric(&self, metric: DisplayMetric) -> i32;
    fn window_style(&self, handle: WindowHandle) -> i32;
    /// Returns the previous style value.
    fn set_window_style(&self, handle: WindowHandle, style: i32) -> i32;
    #[allow(clippy::too_many_arguments)]
    fn set_window_placement(
        &self,
        handle: WindowHandle,
        insert_after: WindowHandle,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        flags: u32,
    ) -> bool;
    fn last_error_code(&self) -> u32;
}

#[cfg(target_os = "windows")]
pub(crate) fn native_port() -> Option<crate::win32::Win32Port> {
    Some(crate::win32::Win32Port)
}

#[cfg(not(target_os = "windows"))]
pub(crate) fn native_port() -> Option<NoNativePort> {
    None
}

/// Placeholder for hosts without a console window API.
#[cfg(not(target_os = "windows"))]
pub(crate) enum NoNativePort {}

#[cfg(not(target_os = "windows"))]
impl WindowingPort for NoNativePort {
    fn console_window(&self) -> WindowHandle {
        match *self {}
    }

    fn display_metric(&self, _metric: DisplayMetric) -> i32 {
        match *self {}
    }

    fn window_style(&self, _handle: WindowHandle) -> i32 {
        match *self {}
    }

    fn set_window_style(&self, _handle: WindowHandle, _style: i32) -> i32 {
        match *self {}
    }

    fn set_window_placement(
        &self,
        _handle: WindowHandle,
        _insert_after: WindowHandle,
        _x: i32,
        _y: i32,
        _width: i32,
        _height: i32,
        _flags: u32,
    ) -> bool {
        match *self {}
    }

    fn last_error_code(&self) -> u32 {
        match *self {}
    }
}
