use crate::MyError;
use crate::debuglog::debug_log_line;
use crate::placement::compute_placement;
use crate::placer::WindowPlacer;
use crate::port::{WindowingPort, native_port};
use crate::types::{DisplayMetric, PlacementRequest};
use crate::util::format_size;
use std::error::Error;
use std::thread;
use std::time::Duration;

const EXIT_PAUSE: Duration = Duration::from_millis(500);

pub(crate) fn place_console_window(verbose: bool) -> Result<(), Box<dyn Error>> {
    let Some(port) = native_port() else {
        println!("WindowPlacer: No console window API on this platform; nothing to place.");
        debug_log_line("place skipped: no native windowing port");
        return Ok(());
    };

    let report = WindowPlacer::new(port, verbose).place();
    debug_log_line(&format!(
        "report handle={:#x} previous_style={:#x} request={:?}",
        report.handle.0, report.previous_style, report.request
    ));
    if report.outcome.is_err() {
        debug_log_line(&format!("placement failed: {}", report.status_line));
    }
    thread::sleep(EXIT_PAUSE);
    Ok(())
}

fn read_display_size<P: WindowingPort>(port: Option<&P>) -> (i32, i32) {
    match port {
        Some(port) => (
            port.display_metric(DisplayMetric::ScreenWidth),
            port.display_metric(DisplayMetric::ScreenHeight),
        ),
        None => (0, 0),
    }
}

pub(crate) fn resolve_plan_request(
    screen_width: Option<i32>,
    screen_height: Option<i32>,
    detected: impl FnOnce() -> (i32, i32),
) -> Result<PlacementRequest, Box<dyn Error>> {
    for (name, value) in [("width", screen_width), ("height", screen_height)] {
        if let Some(v) = value
            && v < 0
        {
            return Err(MyError(format!("Screen {} must not be negative (got {}).", name, v)).into());
        }
    }

    let (width, height) = match (screen_width, screen_height) {
        (Some(w), Some(h)) => (w, h),
        (w, h) => {
            let (dw, dh) = detected();
            (w.unwrap_or(dw), h.unwrap_or(dh))
        }
    };
    debug_log_line(&format!("plan input {}x{}", width, height));
    Ok(compute_placement(width, height))
}

fn print_kv_table(title: &str, rows: Vec<(&str, String)>) {
    println!("WindowPlacer: {}", title);
    let key_width = rows
        .iter()
        .map(|(k, _)| k.len())
        .max()
        .unwrap_or(3)
        .max("Key".len());
    let val_width = rows
        .iter()
        .map(|(_, v)| v.len())
        .max()
        .unwrap_or(5)
        .max("Value".len());

    let sep = format!("+-{}-+-{}-+", "-".repeat(key_width), "-".repeat(val_width));
    println!("{}", sep);
    println!(
        "| {:<key_width$} | {:<val_width$} |",
        "Key",
        "Value",
        key_width = key_width,
        val_width = val_width
    );
    println!("{}", sep);
    for (k, v) in rows {
        println!(
            "| {:<key_width$} | {:<val_width$} |",
            k,
            v,
            key_width = key_width,
            val_width = val_width
        );
    }
    println!("{}", sep);
}

pub(crate) fn show_plan(
    screen_width: Option<i32>,
    screen_height: Option<i32>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let port = native_port();
    let request = resolve_plan_request(screen_width, screen_height, || {
        read_display_size(port.as_ref())
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&request)?);
        return Ok(());
    }

    print_kv_table(
        "Planned Placement",
        vec![
            (
                "screen",
                format_size(request.screen_width, request.screen_height),
            ),
            (
                "window",
                format_size(request.window_width, request.window_height),
            ),
            ("position", format!("({}, {})", request.x, request.y)),
        ],
    );
    Ok(())
}
