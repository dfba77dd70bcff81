//! Work area resolution for an owner window
//!
//! The work area is the part of a monitor available to application windows
//! (the taskbar is excluded). It is queried fresh for every dialog because the
//! monitor layout can change between calls.

use crate::domain::core::{Rect, WindowHandle};
use crate::platform::WindowSystem;

/// Work area of the monitor the owner is displayed on
///
/// Falls back to the desktop work area size anchored at (0, 0) when the
/// monitor cannot be resolved, and to the empty rectangle when that query
/// fails as well.
///
/// # Arguments
/// * `system` - Window system to query
/// * `owner` - Window whose monitor determines the work area
///
/// # Returns
/// The work area in screen coordinates, possibly empty
pub fn work_area_for<S: WindowSystem + ?Sized>(system: &S, owner: WindowHandle) -> Rect {
    match system.monitor_work_area(owner) {
        Ok(area) if !area.is_degenerate() => area,
        Ok(area) => {
            log::debug!("Monitor work area {area:?} for {owner:?} is empty, using desktop");
            desktop_fallback(system)
        }
        Err(err) => {
            log::debug!("{err}, using desktop work area");
            desktop_fallback(system)
        }
    }
}

fn desktop_fallback<S: WindowSystem + ?Sized>(system: &S) -> Rect {
    match system.desktop_work_area_size() {
        Ok((width, height)) => Rect::new(0, 0, width.max(0), height.max(0)),
        Err(err) => {
            log::warn!("{err}");
            Rect::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::fake::FakeWindowSystem;

    const OWNER: WindowHandle = WindowHandle(0x10);

    #[test]
    fn uses_owner_monitor_work_area() {
        let system = FakeWindowSystem::new();
        system.set_monitor_work_area(OWNER, Rect::new(1920, 0, 3840, 1040));

        assert_eq!(work_area_for(&system, OWNER), Rect::new(1920, 0, 3840, 1040));
    }

    #[test]
    fn failed_monitor_lookup_uses_desktop_size() {
        let system = FakeWindowSystem::new();
        system.set_desktop_size(Some((1600, 860)));

        let area = work_area_for(&system, OWNER);
        assert_eq!(area, Rect::new(0, 0, 1600, 860));
        assert!(area.width() >= 0 && area.height() >= 0);
    }

    #[test]
    fn degenerate_monitor_area_uses_desktop_size() {
        let system = FakeWindowSystem::new();
        system.set_monitor_work_area(OWNER, Rect::new(500, 500, 500, 900));
        system.set_desktop_size(Some((1280, 984)));

        assert_eq!(work_area_for(&system, OWNER), Rect::new(0, 0, 1280, 984));
    }

    #[test]
    fn both_queries_failing_yield_empty_rect() {
        let system = FakeWindowSystem::new();
        system.set_desktop_size(None);

        assert_eq!(work_area_for(&system, OWNER), Rect::default());
    }

    #[test]
    fn negative_desktop_size_is_not_inverted() {
        let system = FakeWindowSystem::new();
        system.set_desktop_size(Some((-10, 700)));

        assert_eq!(work_area_for(&system, OWNER), Rect::new(0, 0, 0, 700));
    }
}
