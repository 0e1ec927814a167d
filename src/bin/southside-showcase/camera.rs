//! Camera math for the stage-diagram viewer.
//!
//! The diagram lives in a fixed 800×450 logical space. The camera is a
//! translation applied before a uniform scale, `screen = world · scale +
//! offset`, so the visible world rectangle is `(viewport − offset) /
//! scale`. Every offset written anywhere in the viewer goes through
//! [`clamp_offset`] first.

use crate::constants::{
    DIAGRAM_EDGE_MARGIN, DIAGRAM_VIEW_H, DIAGRAM_VIEW_W, ZOOM_LEVEL_MAX, ZOOM_LEVEL_MIN,
    ZOOM_LEVEL_SCALES,
};
use eframe::egui::{Pos2, Rect, Vec2, pos2, vec2};
use southside_showcase::Stage;

/// The virtual camera over the floor plan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub offset: Vec2,
    pub scale: f32,
}

impl Camera {
    pub fn world_to_screen(&self, world: Pos2) -> Pos2 {
        pos2(
            world.x * self.scale + self.offset.x,
            world.y * self.scale + self.offset.y,
        )
    }

    pub fn screen_to_world(&self, screen: Pos2) -> Pos2 {
        pos2(
            (screen.x - self.offset.x) / self.scale,
            (screen.y - self.offset.y) / self.scale,
        )
    }

    /// World-space point currently under the viewport center.
    pub fn center_world(&self) -> Pos2 {
        self.screen_to_world(view_rect().center())
    }

    pub fn visible_world_rect(&self) -> Rect {
        Rect::from_min_max(
            self.screen_to_world(view_rect().min),
            self.screen_to_world(view_rect().max),
        )
    }
}

/// The fixed logical viewport of the diagram.
pub fn view_rect() -> Rect {
    Rect::from_min_size(Pos2::ZERO, vec2(DIAGRAM_VIEW_W, DIAGRAM_VIEW_H))
}

/// `[x, y, w, h]` content bounds as a rect.
pub fn rect_from_bounds(bounds: [f32; 4]) -> Rect {
    Rect::from_min_size(pos2(bounds[0], bounds[1]), vec2(bounds[2], bounds[3]))
}

pub fn clamp_level(level: i32) -> u8 {
    level.clamp(ZOOM_LEVEL_MIN as i32, ZOOM_LEVEL_MAX as i32) as u8
}

pub fn scale_for_level(level: u8) -> f32 {
    ZOOM_LEVEL_SCALES[(clamp_level(level as i32) - 1) as usize]
}

fn clamp_axis(value: f32, scale: f32, content_min: f32, content_max: f32, view_len: f32) -> f32 {
    let lo = view_len - DIAGRAM_EDGE_MARGIN - content_max * scale;
    let hi = DIAGRAM_EDGE_MARGIN - content_min * scale;
    if lo > hi {
        // Scaled content plus margins fits inside the viewport on this
        // axis: center it.
        (lo + hi) * 0.5
    } else {
        value.clamp(lo, hi)
    }
}

/// Nearest offset that keeps the viewport inside `plan` expanded by the
/// edge margin. Applied after every camera mutation.
pub fn clamp_offset(offset: Vec2, scale: f32, plan: Rect) -> Vec2 {
    vec2(
        clamp_axis(offset.x, scale, plan.min.x, plan.max.x, DIAGRAM_VIEW_W),
        clamp_axis(offset.y, scale, plan.min.y, plan.max.y, DIAGRAM_VIEW_H),
    )
}

/// Camera centered on `center` at `scale`, clamped.
pub fn centered_on(center: Pos2, scale: f32, plan: Rect) -> Camera {
    let view = view_rect().center();
    let offset = vec2(view.x - center.x * scale, view.y - center.y * scale);
    Camera {
        offset: clamp_offset(offset, scale, plan),
        scale,
    }
}

/// The mount/reset view: the whole floor plan centered at zoom level 1.
pub fn fit_full(plan: Rect) -> Camera {
    centered_on(plan.center(), scale_for_level(ZOOM_LEVEL_MIN), plan)
}

/// Rescales the camera so the world point under `anchor` stays put,
/// then clamps. Drives wheel zoom and double-click zoom.
pub fn anchored_zoom(camera: Camera, anchor: Pos2, scale: f32, plan: Rect) -> Camera {
    let world = camera.screen_to_world(anchor);
    let offset = vec2(anchor.x - world.x * scale, anchor.y - world.y * scale);
    Camera {
        offset: clamp_offset(offset, scale, plan),
        scale,
    }
}

/// Re-derives the camera after a viewport change, preserving the world
/// point under the viewport center at the current scale.
pub fn recentered(camera: Camera, plan: Rect) -> Camera {
    centered_on(camera.center_world(), camera.scale, plan)
}

/// Index of the stage whose bounding-box center is screen-closest to the
/// viewport center. Keeps the stage selector synced with free panning.
pub fn nearest_stage(camera: &Camera, stages: &[Stage]) -> Option<usize> {
    let center = view_rect().center();
    let mut best: Option<(usize, f32)> = None;
    for (idx, stage) in stages.iter().enumerate() {
        let screen = camera.world_to_screen(rect_from_bounds(stage.bounds).center());
        let dist_sq = screen.distance_sq(center);
        if best.is_none_or(|(_, b)| dist_sq < b) {
            best = Some((idx, dist_sq));
        }
    }
    best.map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> Rect {
        rect_from_bounds([50.0, 50.0, 700.0, 300.0])
    }

    fn stages() -> Vec<Stage> {
        [
            ("stage-01", [90.0, 70.0, 220.0, 160.0]),
            ("stage-02", [305.0, 70.0, 190.0, 160.0]),
            ("stage-03", [510.0, 70.0, 220.0, 160.0]),
        ]
        .into_iter()
        .map(|(id, bounds)| Stage {
            id: id.to_string(),
            name: id.to_string(),
            floor_area: String::new(),
            bounds,
        })
        .collect()
    }

    /// Per-axis feasibility of the margin constraint at `scale`.
    fn axis_feasible(scale: f32, content_min: f32, content_max: f32, view_len: f32) -> bool {
        (content_max - content_min) * scale + 2.0 * DIAGRAM_EDGE_MARGIN >= view_len
    }

    #[test]
    fn fit_full_centers_the_plan() {
        let camera = fit_full(plan());
        assert_eq!(camera.scale, 1.0);
        let center = camera.center_world();
        assert!((center.x - plan().center().x).abs() < 1e-4);
        assert!((center.y - plan().center().y).abs() < 1e-4);
    }

    #[test]
    fn clamp_keeps_viewport_inside_padded_plan() {
        let plan = plan();
        for level in ZOOM_LEVEL_MIN..=ZOOM_LEVEL_MAX {
            let scale = scale_for_level(level);
            for ox in [-2000.0, -300.0, -10.0, 0.0, 55.0, 900.0] {
                for oy in [-1500.0, -80.0, 0.0, 40.0, 700.0] {
                    let offset = clamp_offset(vec2(ox, oy), scale, plan);
                    let camera = Camera { offset, scale };
                    let visible = camera.visible_world_rect();
                    let margin = DIAGRAM_EDGE_MARGIN / scale;

                    if axis_feasible(scale, plan.min.x, plan.max.x, DIAGRAM_VIEW_W) {
                        assert!(visible.min.x >= plan.min.x - margin - 1e-3);
                        assert!(visible.max.x <= plan.max.x + margin + 1e-3);
                    } else {
                        // Degenerate axis centers the content
                        let slack_left = plan.min.x - visible.min.x;
                        let slack_right = visible.max.x - plan.max.x;
                        assert!((slack_left - slack_right).abs() < 1e-3);
                    }
                    if axis_feasible(scale, plan.min.y, plan.max.y, DIAGRAM_VIEW_H) {
                        assert!(visible.min.y >= plan.min.y - margin - 1e-3);
                        assert!(visible.max.y <= plan.max.y + margin + 1e-3);
                    } else {
                        let slack_top = plan.min.y - visible.min.y;
                        let slack_bottom = visible.max.y - plan.max.y;
                        assert!((slack_top - slack_bottom).abs() < 1e-3);
                    }
                }
            }
        }
    }

    #[test]
    fn zoom_levels_clamp_at_the_bounds() {
        assert_eq!(clamp_level(0), 1);
        assert_eq!(clamp_level(1), 1);
        assert_eq!(clamp_level(5), 4);
        assert_eq!(clamp_level(-3), 1);
        assert_eq!(scale_for_level(1), 1.0);
        assert_eq!(scale_for_level(4), 1.9);
    }

    #[test]
    fn focus_centers_stage_exactly_where_feasible() {
        let stages = stages();
        let target = rect_from_bounds(stages[1].bounds).center();

        // At zoom level 4 both axes are feasible: exact centering.
        let camera = centered_on(target, scale_for_level(4), plan());
        let center = camera.center_world();
        assert!((center.x - target.x).abs() < 1e-3);
        assert!((center.y - target.y).abs() < 1e-3);

        // At zoom level 2 the x axis centers exactly; the y axis hits the
        // margin clamp because the stage row sits above the plan center.
        let camera = centered_on(target, scale_for_level(2), plan());
        assert!((camera.center_world().x - target.x).abs() < 1e-3);
        let visible = camera.visible_world_rect();
        let margin = DIAGRAM_EDGE_MARGIN / camera.scale;
        assert!(visible.min.y >= plan().min.y - margin - 1e-3);
    }

    #[test]
    fn anchored_zoom_pins_the_cursor_point() {
        let camera = fit_full(plan());
        let anchor = pos2(700.0, 175.0);
        let before = camera.screen_to_world(anchor);

        let zoomed = anchored_zoom(camera, anchor, scale_for_level(4), plan());
        // The clamp did not bite here, so the anchor is exactly pinned
        let after = zoomed.screen_to_world(anchor);
        assert!((before.x - after.x).abs() < 1e-3);
        assert!((before.y - after.y).abs() < 1e-3);
    }

    #[test]
    fn recentering_after_resize_preserves_the_world_center() {
        let mut camera = fit_full(plan());
        let center = camera.center_world();
        for _ in 0..4 {
            camera = recentered(camera, plan());
        }
        assert!((camera.center_world().x - center.x).abs() < 1e-3);
        assert!((camera.center_world().y - center.y).abs() < 1e-3);
        assert_eq!(camera.scale, 1.0);
    }

    #[test]
    fn nearest_stage_tracks_the_viewport_center() {
        let stages = stages();
        let full = fit_full(plan());
        // Full view: the middle stage wins
        assert_eq!(nearest_stage(&full, &stages), Some(1));

        let on_third = centered_on(
            rect_from_bounds(stages[2].bounds).center(),
            scale_for_level(4),
            plan(),
        );
        assert_eq!(nearest_stage(&on_third, &stages), Some(2));

        assert_eq!(nearest_stage(&full, &[]), None);
    }
}
