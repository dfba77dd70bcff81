//! Dialog placement relative to an owner window
//!
//! Pure functions only: the same inputs always give the same position, which
//! is what makes the hook behavior testable without a window manager.

use crate::domain::core::{Point, Rect};

/// Origin that centers `dialog` over `owner`, before any clamping
pub fn centered_origin(owner: &Rect, dialog: &Rect) -> Point {
    Point::new(
        owner.left + (owner.width() - dialog.width()) / 2,
        owner.top + (owner.height() - dialog.height()) / 2,
    )
}

/// Pulls `origin` back so a dialog of the given size stays inside `work_area`
///
/// When the dialog is larger than the work area on an axis, the upper bound
/// collapses onto the lower one and the dialog is anchored at the work area's
/// left/top edge.
pub fn clamp_origin(origin: Point, dialog: &Rect, work_area: &Rect) -> Point {
    let max_x = work_area.left.max(work_area.right - dialog.width());
    let max_y = work_area.top.max(work_area.bottom - dialog.height());

    Point::new(
        origin.x.clamp(work_area.left, max_x),
        origin.y.clamp(work_area.top, max_y),
    )
}

/// Top-left position that centers `dialog` over `owner` inside `work_area`
pub fn center(owner: &Rect, dialog: &Rect, work_area: &Rect) -> Point {
    clamp_origin(centered_origin(owner, dialog), dialog, work_area)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop() -> Rect {
        Rect::new(0, 0, 1920, 1040)
    }

    #[test]
    fn centers_small_dialog_over_owner() {
        let owner = Rect::new(100, 100, 700, 500);
        let dialog = Rect::new(0, 0, 300, 150);

        assert_eq!(center(&owner, &dialog, &desktop()), Point::new(250, 225));
    }

    #[test]
    fn oversized_dialog_is_pulled_back_to_work_area() {
        let owner = Rect::new(0, 0, 200, 200);
        let dialog = Rect::new(0, 0, 500, 500);

        assert_eq!(centered_origin(&owner, &dialog), Point::new(-150, -150));
        assert_eq!(center(&owner, &dialog, &desktop()), Point::new(0, 0));
    }

    #[test]
    fn owner_near_right_edge_keeps_dialog_on_screen() {
        let owner = Rect::new(1800, 900, 2000, 1000);
        let dialog = Rect::new(0, 0, 400, 200);

        let position = center(&owner, &dialog, &desktop());
        assert_eq!(position, Point::new(1520, 840));
        assert!(desktop().contains_rect(&Rect::from_origin_size(position, 400, 200)));
    }

    #[test]
    fn dialog_larger_than_work_area_anchors_to_origin() {
        let work_area = Rect::new(1920, 0, 2720, 600);
        let owner = Rect::new(2000, 100, 2400, 400);
        let dialog = Rect::new(0, 0, 1000, 800);

        assert_eq!(center(&owner, &dialog, &work_area), Point::new(1920, 0));
    }

    #[test]
    fn secondary_monitor_with_negative_coordinates() {
        let work_area = Rect::new(-1920, 0, 0, 1040);
        let owner = Rect::new(-1000, 200, -200, 800);
        let dialog = Rect::new(0, 0, 300, 100);

        assert_eq!(center(&owner, &dialog, &work_area), Point::new(-750, 450));
    }

    #[test]
    fn exact_centering_when_owner_inside_work_area() {
        let work_area = desktop();
        for (owner, dialog) in [
            (Rect::new(0, 0, 1920, 1040), Rect::new(0, 0, 1920, 1040)),
            (Rect::new(300, 200, 1100, 800), Rect::new(50, 50, 350, 250)),
            (Rect::new(10, 10, 410, 310), Rect::new(0, 0, 400, 300)),
        ] {
            let position = center(&owner, &dialog, &work_area);
            let placed = Rect::from_origin_size(position, dialog.width(), dialog.height());
            assert_eq!(placed.left - owner.left, owner.right - placed.right);
            assert_eq!(placed.top - owner.top, owner.bottom - placed.bottom);
        }
    }

    #[test]
    fn clamping_never_goes_before_work_area_origin() {
        let work_area = Rect::new(100, 50, 900, 650);
        for size in [10, 799, 800, 801, 5000] {
            let dialog = Rect::new(0, 0, size, size);
            let owner = Rect::new(-4000, -4000, -3000, -3000);
            let position = center(&owner, &dialog, &work_area);
            assert!(position.x >= work_area.left);
            assert!(position.y >= work_area.top);
        }
    }

    #[test]
    fn odd_size_difference_truncates_toward_owner_origin() {
        let owner = Rect::new(0, 0, 101, 101);
        let dialog = Rect::new(0, 0, 50, 50);

        assert_eq!(centered_origin(&owner, &dialog), Point::new(25, 25));
    }
}
