//! The stage-diagram viewer: a virtual camera over the studio floor
//! plan, driven by wheel, modifier-gated drag, double-click and keyboard
//! input. All camera writes go through the clamp in [`crate::camera`];
//! the tweens here only chase the already-clamped target.

use crate::anim::{Ease, Reveal, Tween, polyline_prefix};
use crate::camera::{self, Camera};
use crate::colors;
use crate::constants::{
    CAMERA_PAN_SECS, CAMERA_ZOOM_SECS, DIAGRAM_VIEW_H, DIAGRAM_VIEW_W, KEY_PAN_STEP,
    KEY_PAN_STEP_FAST, MOMENTUM_MULTIPLIER, MOMENTUM_SECS, WHEEL_STEP_POINTS, ZOOM_LEVEL_MAX,
    ZOOM_LEVEL_MIN,
};
use eframe::egui::{
    self, Align2, CursorIcon, FontId, Pos2, Rect, Sense, Shape, Stroke, Vec2, pos2, vec2,
};
use southside_showcase::{FloorPlan, Stage};

/// Momentum glide started when a drag is released.
struct Glide {
    from: Vec2,
    delta: Vec2,
    start: f64,
}

pub struct DiagramView {
    plan: Rect,
    stages: Vec<Stage>,
    outline: Vec<(Vec<Pos2>, bool)>,

    /// Clamped camera target; the display tweens chase it
    target: Camera,
    cam_x: Tween,
    cam_y: Tween,
    cam_scale: Tween,

    zoom_level: u8,
    active_stage: usize,

    /// Last pointer position in diagram coordinates; zoom anchors here
    last_pointer: Option<Pos2>,
    dragging: bool,
    drag_velocity: Vec2,
    glide: Option<Glide>,
    scroll_accum: f32,

    reveal: Reveal,
    widget_size: Vec2,
    hovered: bool,
    reduced_motion: bool,
}

impl DiagramView {
    pub fn new(floor_plan: &FloorPlan, reduced_motion: bool) -> Self {
        let plan = camera::rect_from_bounds(floor_plan.bounds);
        let target = camera::fit_full(plan);
        Self {
            plan,
            stages: floor_plan.stages.clone(),
            outline: floor_plan
                .outline
                .iter()
                .map(|line| {
                    let points = line.points.iter().map(|p| pos2(p[0], p[1])).collect();
                    (points, line.closed)
                })
                .collect(),
            target,
            cam_x: Tween::fixed(target.offset.x),
            cam_y: Tween::fixed(target.offset.y),
            cam_scale: Tween::fixed(target.scale),
            zoom_level: ZOOM_LEVEL_MIN,
            active_stage: 0,
            last_pointer: None,
            dragging: false,
            drag_velocity: Vec2::ZERO,
            glide: None,
            scroll_accum: 0.0,
            reveal: Reveal::default(),
            widget_size: Vec2::ZERO,
            hovered: false,
            reduced_motion,
        }
    }

    pub fn zoom_level(&self) -> u8 {
        self.zoom_level
    }

    pub fn active_stage(&self) -> usize {
        self.active_stage
    }

    pub fn camera_target(&self) -> Camera {
        self.target
    }

    /// True while the pointer is over the diagram; the page scroll area
    /// is disabled for that frame so the wheel zooms instead of scrolls.
    pub fn wants_wheel(&self) -> bool {
        self.hovered
    }

    fn set_target(&mut self, now: f64, cam: Camera, instant: bool) {
        self.target = cam;
        if instant || self.reduced_motion {
            self.cam_x.snap(cam.offset.x);
            self.cam_y.snap(cam.offset.y);
            self.cam_scale.snap(cam.scale);
        } else {
            self.cam_x
                .retarget(now, cam.offset.x, CAMERA_PAN_SECS, Ease::OutCubic);
            self.cam_y
                .retarget(now, cam.offset.y, CAMERA_PAN_SECS, Ease::OutCubic);
            self.cam_scale
                .retarget(now, cam.scale, CAMERA_ZOOM_SECS, Ease::OutCubic);
        }
    }

    fn displayed_camera(&self, now: f64) -> Camera {
        Camera {
            offset: vec2(self.cam_x.value_at(now), self.cam_y.value_at(now)),
            scale: self.cam_scale.value_at(now),
        }
    }

    /// Reset to the full-plan fit at zoom level 1.
    pub fn reset_view(&mut self, now: f64) {
        self.glide = None;
        self.zoom_level = ZOOM_LEVEL_MIN;
        self.set_target(now, camera::fit_full(self.plan), false);
    }

    /// Centers on a stage. Selecting while still at zoom level 1 steps
    /// to level 2 first, so the selection reads as a zoom-in.
    pub fn focus_stage(&mut self, now: f64, idx: usize) {
        let Some(stage) = self.stages.get(idx) else {
            return;
        };
        self.glide = None;
        if self.zoom_level == ZOOM_LEVEL_MIN {
            self.zoom_level = ZOOM_LEVEL_MIN + 1;
        }
        let scale = camera::scale_for_level(self.zoom_level);
        let center = camera::rect_from_bounds(stage.bounds).center();
        self.active_stage = idx;
        self.set_target(now, camera::centered_on(center, scale, self.plan), false);
    }

    /// Steps the discrete zoom level, anchored at the last pointer
    /// position; a step past either bound is a no-op.
    pub fn step_zoom(&mut self, now: f64, direction: i32) {
        let level = camera::clamp_level(self.zoom_level as i32 + direction);
        self.snap_zoom_to_level(now, level);
    }

    /// Jumps to a zoom level: level 1 re-fits the whole plan, other
    /// levels keep the anchor point fixed. Refreshes the active stage
    /// from the new view.
    pub fn snap_zoom_to_level(&mut self, now: f64, level: u8) {
        let level = camera::clamp_level(level as i32);
        if level == self.zoom_level {
            return;
        }
        self.glide = None;
        self.zoom_level = level;

        if level == ZOOM_LEVEL_MIN {
            self.set_target(now, camera::fit_full(self.plan), false);
        } else {
            let anchor = self.last_pointer.unwrap_or(camera::view_rect().center());
            let scale = camera::scale_for_level(level);
            let zoomed = camera::anchored_zoom(self.target, anchor, scale, self.plan);
            self.set_target(now, zoomed, false);
        }

        if let Some(idx) = camera::nearest_stage(&self.target, &self.stages) {
            self.active_stage = idx;
        }
    }

    /// Pans the camera target by `delta` diagram units, clamped.
    pub fn pan_by(&mut self, now: f64, delta: Vec2, instant: bool) {
        let offset =
            camera::clamp_offset(self.target.offset + delta, self.target.scale, self.plan);
        self.set_target(
            now,
            Camera {
                offset,
                scale: self.target.scale,
            },
            instant,
        );
    }

    /// Re-projects the camera after the widget viewport changed,
    /// preserving the world-space center at the current scale.
    pub fn handle_resize(&mut self, now: f64) {
        self.set_target(now, camera::recentered(self.target, self.plan), true);
    }

    fn tick_glide(&mut self, now: f64) {
        let Some(glide) = &self.glide else {
            return;
        };
        let p = (((now - glide.start) as f32) / MOMENTUM_SECS).min(1.0);
        let raw = glide.from + glide.delta * Ease::OutQuart.apply(p);
        let offset = camera::clamp_offset(raw, self.target.scale, self.plan);
        self.target.offset = offset;
        self.cam_x.snap(offset.x);
        self.cam_y.snap(offset.y);
        if p >= 1.0 {
            self.glide = None;
        }
    }

    fn animating(&self, now: f64) -> bool {
        self.glide.is_some()
            || !self.cam_x.settled_at(now)
            || !self.cam_y.settled_at(now)
            || !self.cam_scale.settled_at(now)
            || self.reveal.running(now, 1.5)
    }

    // ------------------------------------------------------------------
    // UI
    // ------------------------------------------------------------------

    pub fn show(&mut self, ui: &mut egui::Ui) {
        let now = ui.input(|i| i.time);

        ui.add_space(48.0);
        self.show_stage_labels(ui, now);
        ui.add_space(24.0);
        self.show_canvas(ui, now);
        ui.add_space(48.0);

        if self.animating(now) {
            ui.ctx().request_repaint();
        }
    }

    /// The stage selector row: names with floor areas, active one lit.
    fn show_stage_labels(&mut self, ui: &mut egui::Ui, now: f64) {
        if self.stages.is_empty() {
            return;
        }
        let mut clicked = None;
        ui.columns(self.stages.len(), |columns| {
            for (idx, column) in columns.iter_mut().enumerate() {
                let stage = &self.stages[idx];
                let active = idx == self.active_stage;
                let name_color = if active {
                    colors::TEXT_WHITE
                } else {
                    colors::STAGE_LABEL_DIM
                };

                column.vertical_centered(|ui| {
                    let name = ui
                        .add(
                            egui::Label::new(
                                egui::RichText::new(&stage.name)
                                    .family(egui::FontFamily::Proportional)
                                    .size(44.0)
                                    .color(name_color),
                            )
                            .sense(Sense::click()),
                        )
                        .on_hover_cursor(CursorIcon::PointingHand);

                    let area = ui
                        .add(
                            egui::Label::new(
                                egui::RichText::new(format!("— {} SQUARE FEET", stage.floor_area))
                                    .size(11.0)
                                    .color(colors::TEXT_GRAY),
                            )
                            .sense(Sense::click()),
                        )
                        .on_hover_cursor(CursorIcon::PointingHand);

                    if name.clicked() || area.clicked() {
                        clicked = Some(idx);
                    }
                });
            }
        });

        if let Some(idx) = clicked {
            self.focus_stage(now, idx);
        }
    }

    fn show_canvas(&mut self, ui: &mut egui::Ui, now: f64) {
        let width = ui.available_width();
        let height = (width * DIAGRAM_VIEW_H / DIAGRAM_VIEW_W)
            .min(ui.ctx().screen_rect().height() * 0.72);
        let (rect, response) =
            ui.allocate_exact_size(vec2(width, height), Sense::click_and_drag());

        if self.widget_size != rect.size() {
            if self.widget_size != Vec2::ZERO {
                self.handle_resize(now);
            }
            self.widget_size = rect.size();
        }

        if ui.is_rect_visible(rect) {
            self.reveal.trigger(now);
        }

        // Uniform aspect-preserving fit of the 800×450 logical viewport
        let fit = (rect.width() / DIAGRAM_VIEW_W).min(rect.height() / DIAGRAM_VIEW_H);
        let origin = rect.center() - vec2(DIAGRAM_VIEW_W, DIAGRAM_VIEW_H) * fit * 0.5;

        let pointer = ui.input(|i| i.pointer.hover_pos());
        self.hovered = pointer.is_some_and(|p| rect.contains(p));
        if let Some(p) = pointer.filter(|p| rect.contains(*p)) {
            self.last_pointer = Some(pos2((p.x - origin.x) / fit, (p.y - origin.y) / fit));
        }

        self.handle_wheel(ui, now);
        self.handle_drag(ui, &response, fit, now);
        if response.double_clicked() {
            self.step_zoom(now, 1);
        }
        if ui.is_rect_visible(rect) {
            self.handle_keys(ui, now);
        }
        self.tick_glide(now);

        self.paint(ui, rect, origin, fit, now);
        self.show_zoom_rail(ui, rect, now);
    }

    fn handle_wheel(&mut self, ui: &egui::Ui, now: f64) {
        if !self.hovered {
            self.scroll_accum = 0.0;
            return;
        }
        self.scroll_accum += ui.input(|i| i.raw_scroll_delta.y);
        while self.scroll_accum >= WHEEL_STEP_POINTS {
            self.scroll_accum -= WHEEL_STEP_POINTS;
            self.step_zoom(now, 1);
        }
        while self.scroll_accum <= -WHEEL_STEP_POINTS {
            self.scroll_accum += WHEEL_STEP_POINTS;
            self.step_zoom(now, -1);
        }
    }

    /// Ctrl/Cmd-gated drag pan: 1:1 while held, momentum glide on
    /// release.
    fn handle_drag(&mut self, ui: &egui::Ui, response: &egui::Response, fit: f32, now: f64) {
        if response.drag_started() {
            self.dragging = ui.input(|i| i.modifiers.command);
            if self.dragging {
                self.glide = None;
                self.drag_velocity = Vec2::ZERO;
            }
        }

        if self.dragging && response.dragged() {
            let delta = response.drag_delta() / fit;
            self.pan_by(now, delta, true);
            self.drag_velocity = delta;
        }

        if response.drag_stopped() && self.dragging {
            self.dragging = false;
            if self.drag_velocity != Vec2::ZERO {
                self.glide = Some(Glide {
                    from: self.target.offset,
                    delta: self.drag_velocity * MOMENTUM_MULTIPLIER,
                    start: now,
                });
            }
        }
    }

    fn handle_keys(&mut self, ui: &egui::Ui, now: f64) {
        let (plus, minus, zero, arrows, fast) = ui.input(|i| {
            let arrow = |key: egui::Key| i.key_pressed(key);
            (
                i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
                i.key_pressed(egui::Key::Minus),
                i.key_pressed(egui::Key::Num0),
                [
                    arrow(egui::Key::ArrowLeft),
                    arrow(egui::Key::ArrowRight),
                    arrow(egui::Key::ArrowUp),
                    arrow(egui::Key::ArrowDown),
                ],
                i.modifiers.shift,
            )
        });

        if plus {
            self.step_zoom(now, 1);
        }
        if minus {
            self.step_zoom(now, -1);
        }
        if zero {
            self.reset_view(now);
        }

        let step = if fast { KEY_PAN_STEP_FAST } else { KEY_PAN_STEP };
        let mut delta = Vec2::ZERO;
        if arrows[0] {
            delta.x += step;
        }
        if arrows[1] {
            delta.x -= step;
        }
        if arrows[2] {
            delta.y += step;
        }
        if arrows[3] {
            delta.y -= step;
        }
        if delta != Vec2::ZERO {
            self.pan_by(now, delta, false);
        }
    }

    fn paint(&self, ui: &mut egui::Ui, rect: Rect, origin: Pos2, fit: f32, now: f64) {
        let painter = ui.painter_at(rect);
        let cam = self.displayed_camera(now);
        let to_paint =
            |world: Pos2| -> Pos2 { origin + cam.world_to_screen(world).to_vec2() * fit };

        let stroke_width = (0.75 * cam.scale * fit).max(0.5);
        let stroke = Stroke::new(stroke_width, colors::WIREFRAME_STROKE);

        for (idx, (points, closed)) in self.outline.iter().enumerate() {
            let draw_in =
                self.reveal
                    .progress(now, 0.03 * idx as f32, 1.0, Ease::OutQuart);
            if draw_in <= 0.0 || points.len() < 2 {
                continue;
            }

            if *closed && draw_in >= 1.0 {
                let pts: Vec<Pos2> = points.iter().map(|p| to_paint(*p)).collect();
                painter.add(Shape::closed_line(pts, stroke));
                continue;
            }

            // Draw-in renders a closed run as an open loop back to the
            // first point
            let mut run: Vec<Pos2> = points.clone();
            if *closed {
                run.push(points[0]);
            }
            let pts: Vec<Pos2> = polyline_prefix(&run, draw_in)
                .into_iter()
                .map(to_paint)
                .collect();
            if pts.len() >= 2 {
                painter.add(Shape::line(pts, stroke));
            }
        }

        // Controls caption, centered near the bottom edge
        painter.text(
            pos2(rect.center().x, rect.max.y - 14.0),
            Align2::CENTER_CENTER,
            "SCROLL TO ZOOM  •  CTRL/CMD + DRAG TO PAN  •  0 TO RESET",
            FontId::proportional(10.0),
            colors::TEXT_GRAY,
        );
    }

    /// Vertical zoom rail overlaid on the right edge: minus, one dot per
    /// level, plus, reset.
    fn show_zoom_rail(&mut self, ui: &mut egui::Ui, rect: Rect, now: f64) {
        let painter = ui.painter_at(rect);
        let x = rect.max.x - 28.0;
        let center_y = rect.center().y;
        let dot_gap = 26.0;
        let levels = ZOOM_LEVEL_MAX - ZOOM_LEVEL_MIN + 1;
        let rail_half = (levels - 1) as f32 * dot_gap * 0.5;

        painter.line_segment(
            [
                pos2(x, center_y - rail_half - 8.0),
                pos2(x, center_y + rail_half + 8.0),
            ],
            Stroke::new(1.0, colors::ZOOM_RAIL),
        );

        let mut control = |pos: Pos2, id: &str, size: Vec2| -> egui::Response {
            ui.interact(
                Rect::from_center_size(pos, size),
                ui.id().with(id),
                Sense::click(),
            )
            .on_hover_cursor(CursorIcon::PointingHand)
        };

        // Step-out above the rail, step-in below, reset at the bottom
        let minus_pos = pos2(x, center_y - rail_half - 28.0);
        if control(minus_pos, "zoom-out", vec2(24.0, 24.0)).clicked() {
            self.step_zoom(now, -1);
        }
        painter.text(
            minus_pos,
            Align2::CENTER_CENTER,
            "−",
            FontId::proportional(22.0),
            colors::TEXT_WHITE,
        );

        for level in ZOOM_LEVEL_MIN..=ZOOM_LEVEL_MAX {
            let pos = pos2(
                x,
                center_y - rail_half + (level - ZOOM_LEVEL_MIN) as f32 * dot_gap,
            );
            let response = control(pos, &format!("zoom-dot-{level}"), vec2(18.0, 18.0));
            if response.clicked() {
                self.snap_zoom_to_level(now, level);
            }
            let active = level == self.zoom_level;
            let radius = if active { 5.0 } else { 3.0 };
            let color = if active {
                colors::TEXT_WHITE
            } else {
                colors::ZOOM_RAIL
            };
            painter.circle_filled(pos, radius, color);
        }

        let plus_pos = pos2(x, center_y + rail_half + 28.0);
        if control(plus_pos, "zoom-in", vec2(24.0, 24.0)).clicked() {
            self.step_zoom(now, 1);
        }
        painter.text(
            plus_pos,
            Align2::CENTER_CENTER,
            "+",
            FontId::proportional(20.0),
            colors::TEXT_WHITE,
        );

        let reset_pos = pos2(x, center_y + rail_half + 56.0);
        if control(reset_pos, "zoom-reset", vec2(44.0, 18.0)).clicked() {
            self.reset_view(now);
        }
        painter.text(
            reset_pos,
            Align2::CENTER_CENTER,
            "RESET",
            FontId::proportional(10.0),
            colors::TEXT_GRAY,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{fit_full, rect_from_bounds, scale_for_level};
    use southside_showcase::{FloorPlan, Polyline as ContentPolyline};

    fn floor_plan() -> FloorPlan {
        FloorPlan {
            bounds: [50.0, 50.0, 700.0, 300.0],
            outline: vec![ContentPolyline {
                points: vec![[50.0, 350.0], [200.0, 250.0], [600.0, 250.0]],
                closed: false,
            }],
            stages: [
                ("stage-01", "Stage 01", "10,930", [90.0, 70.0, 220.0, 160.0]),
                ("stage-02", "Stage 02", "10,486", [305.0, 70.0, 190.0, 160.0]),
                ("stage-03", "Stage 03", "21,918", [510.0, 70.0, 220.0, 160.0]),
            ]
            .into_iter()
            .map(|(id, name, area, bounds)| Stage {
                id: id.into(),
                name: name.into(),
                floor_area: area.into(),
                bounds,
            })
            .collect(),
        }
    }

    fn view() -> DiagramView {
        // Reduced motion snaps the tweens so targets are observable
        DiagramView::new(&floor_plan(), true)
    }

    #[test]
    fn mounts_on_the_full_plan_fit() {
        let view = view();
        let plan = rect_from_bounds([50.0, 50.0, 700.0, 300.0]);
        assert_eq!(view.camera_target(), fit_full(plan));
        assert_eq!(view.zoom_level(), 1);
        assert_eq!(view.active_stage(), 0);
    }

    #[test]
    fn select_stage_then_reset() {
        let mut view = view();

        // Selecting Stage 02 from the mount view zooms to level 2,
        // centered on the stage
        view.focus_stage(0.0, 1);
        assert_eq!(view.zoom_level(), 2);
        assert_eq!(view.active_stage(), 1);
        assert_eq!(view.camera_target().scale, scale_for_level(2));
        let stage_center = rect_from_bounds([305.0, 70.0, 190.0, 160.0]).center();
        let center = view.camera_target().center_world();
        assert!((center.x - stage_center.x).abs() < 1e-3);

        // Reset returns to the full fit at level 1
        view.reset_view(1.0);
        assert_eq!(view.zoom_level(), 1);
        let plan = rect_from_bounds([50.0, 50.0, 700.0, 300.0]);
        assert_eq!(view.camera_target(), fit_full(plan));
    }

    #[test]
    fn wheel_zoom_over_stage_three_retargets_the_selection() {
        let mut view = view();
        view.last_pointer = Some(pos2(700.0, 175.0));

        for step in 0..3 {
            view.step_zoom(step as f64, 1);
        }
        assert_eq!(view.zoom_level(), 4);
        assert_eq!(view.stages[view.active_stage()].id, "stage-03");

        // A fourth step past the top bound is a no-op
        let before = view.camera_target();
        view.step_zoom(3.0, 1);
        assert_eq!(view.zoom_level(), 4);
        assert_eq!(view.camera_target(), before);
    }

    #[test]
    fn zoom_round_trip_restores_the_fit() {
        let mut view = view();
        let start = view.camera_target();
        view.last_pointer = Some(pos2(320.0, 160.0));

        view.step_zoom(0.0, 1);
        assert_eq!(view.zoom_level(), 2);
        view.step_zoom(1.0, -1);

        assert_eq!(view.zoom_level(), 1);
        assert_eq!(view.camera_target(), start);
    }

    #[test]
    fn step_below_level_one_is_a_no_op() {
        let mut view = view();
        let before = view.camera_target();
        view.step_zoom(0.0, -1);
        assert_eq!(view.zoom_level(), 1);
        assert_eq!(view.camera_target(), before);
    }

    #[test]
    fn keyboard_pan_stays_clamped() {
        let mut view = view();
        view.focus_stage(0.0, 2);

        // Hammer the pan far past the edge; the clamp holds the line
        for _ in 0..200 {
            view.pan_by(0.0, vec2(-KEY_PAN_STEP_FAST, 0.0), false);
        }
        let visible = view.camera_target().visible_world_rect();
        let margin = crate::constants::DIAGRAM_EDGE_MARGIN / view.camera_target().scale;
        assert!(visible.max.x <= 750.0 + margin + 1e-3);
    }

    #[test]
    fn resize_preserves_the_world_center() {
        let mut view = view();
        view.focus_stage(0.0, 2);
        let center = view.camera_target().center_world();
        view.handle_resize(1.0);
        view.handle_resize(2.0);
        let after = view.camera_target().center_world();
        assert!((center.x - after.x).abs() < 1e-3);
        assert!((center.y - after.y).abs() < 1e-3);
    }

    #[test]
    fn glide_is_clamped_while_decaying() {
        let mut view = view();
        view.focus_stage(0.0, 1);
        view.glide = Some(Glide {
            from: view.camera_target().offset,
            delta: vec2(-4000.0, 0.0),
            start: 0.0,
        });
        view.tick_glide(0.4);
        view.tick_glide(1.0);
        assert!(view.glide.is_none());

        let visible = view.camera_target().visible_world_rect();
        let margin = crate::constants::DIAGRAM_EDGE_MARGIN / view.camera_target().scale;
        assert!(visible.max.x <= 750.0 + margin + 1e-3);
    }
}
