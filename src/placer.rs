use crate::debuglog::debug_log_line;
use crate::placement::compute_placement;
use crate::port::{FLAG_FRAME_CHANGED, FLAG_SHOW_WINDOW, POPUP_STYLE, WindowingPort};
use crate::types::{DisplayMetric, PlacementReport, WindowHandle};
use crate::util::format_size;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PlacementError {
    ApplyFailed { code: u32 },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::ApplyFailed { code } => {
                write!(f, "Failed to apply window placement (error code {})", code)
            }
        }
    }
}

impl Error for PlacementError {}

pub(crate) struct WindowPlacer<P: WindowingPort> {
    port: P,
    verbose: bool,
}

impl<P: WindowingPort> WindowPlacer<P> {
    pub(crate) fn new(port: P, verbose: bool) -> Self {
        Self { port, verbose }
    }

    /// Strips the console window's frame and centers it on the primary display.
    ///
    /// Every step is best-effort. Only the final placement call is checked, and
    /// its failure is reported in the returned outcome rather than propagated.
    pub(crate) fn place(&self) -> PlacementReport {
        debug_log_line("place begin");
        let handle = self.port.console_window();
        println!("WindowPlacer: Console window handle: {:#x}", handle.0);
        if handle.is_null() {
            println!("WindowPlacer: No console window is attached; placement will likely fail.");
            debug_log_line("console window handle is null");
        }

        let previous_style = self.port.window_style(handle);
        let replaced = self.port.set_window_style(handle, POPUP_STYLE);
        if self.verbose {
            println!(
                "WindowPlacer (DEBUG): Window style {:#010x} -> {:#010x} (set returned {:#010x})",
                previous_style, POPUP_STYLE, replaced
            );
        }
        debug_log_line(&format!(
            "style previous={:#x} new={:#x} set_returned={:#x}",
            previous_style, POPUP_STYLE, replaced
        ));

        let raw_width = self.port.display_metric(DisplayMetric::ScreenWidth);
        let raw_height = self.port.display_metric(DisplayMetric::ScreenHeight);
        let request = compute_placement(raw_width, raw_height);
        if (raw_width, raw_height) != (request.screen_width, request.screen_height) {
            debug_log_line(&format!(
                "display metrics {}x{} unusable, substituted {}x{}",
                raw_width, raw_height, request.screen_width, request.screen_height
            ));
        }
        println!(
            "WindowPlacer: Screen resolution: {}",
            format_size(request.screen_width, request.screen_height)
        );
        println!(
            "WindowPlacer: Target position=({}, {}), size={}",
            request.x,
            request.y,
            format_size(request.window_width, request.window_height)
        );

        let applied = self.port.set_window_placement(
            handle,
            WindowHandle::NULL,
            request.x,
            request.y,
            request.window_width,
            request.window_height,
            FLAG_FRAME_CHANGED | FLAG_SHOW_WINDOW,
        );
        // Read the error code before anything else can touch the thread's last error.
        let outcome = if applied {
            Ok(())
        } else {
            Err(PlacementError::ApplyFailed {
                code: self.port.last_error_code(),
            })
        };
        let status_line = match &outcome {
            Ok(()) => "WindowPlacer: Window placed successfully.".to_string(),
            Err(e) => format!("WindowPlacer: {}", e),
        };
        println!("{}", status_line);
        debug_log_line(&format!("place end outcome={:?}", outcome));

        PlacementReport {
            handle,
            previous_style,
            request,
            outcome,
            status_line,
        }
    }
}
