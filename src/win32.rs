use crate::port::WindowingPort;
use crate::types::{DisplayMetric, WindowHandle};
use windows::Win32::Foundation::{GetLastError, HWND};
use windows::Win32::System::Console::GetConsoleWindow;
use windows::Win32::UI::WindowsAndMessaging::{
    GWL_STYLE, GetSystemMetrics, GetWindowLongW, SET_WINDOW_POS_FLAGS, SM_CXSCREEN, SM_CYSCREEN,
    SetWindowLongW, SetWindowPos,
};

/// `WindowingPort` backed by user32/kernel32.
pub(crate) struct Win32Port;

fn to_hwnd(handle: WindowHandle) -> HWND {
    HWND(handle.0 as *mut core::ffi::c_void)
}

impl WindowingPort for Win32Port {
    fn console_window(&self) -> WindowHandle {
        let hwnd = unsafe { GetConsoleWindow() };
        WindowHandle(hwnd.0 as isize)
    }

    fn display_metric(&self, metric: DisplayMetric) -> i32 {
        let index = match metric {
            DisplayMetric::ScreenWidth => SM_CXSCREEN,
            DisplayMetric::ScreenHeight => SM_CYSCREEN,
        };
        unsafe { GetSystemMetrics(index) }
    }

    fn window_style(&self, handle: WindowHandle) -> i32 {
        unsafe { GetWindowLongW(to_hwnd(handle), GWL_STYLE) }
    }

    fn set_window_style(&self, handle: WindowHandle, style: i32) -> i32 {
        unsafe { SetWindowLongW(to_hwnd(handle), GWL_STYLE, style) }
    }

    fn set_window_placement(
        &self,
        handle: WindowHandle,
        insert_after: WindowHandle,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        flags: u32,
    ) -> bool {
        let after = (!insert_after.is_null()).then(|| to_hwnd(insert_after));
        unsafe {
            SetWindowPos(
                to_hwnd(handle),
                after,
                x,
                y,
                width,
                height,
                SET_WINDOW_POS_FLAGS(flags),
            )
        }
        .is_ok()
    }

    fn last_error_code(&self) -> u32 {
        unsafe { GetLastError().0 }
    }
}
