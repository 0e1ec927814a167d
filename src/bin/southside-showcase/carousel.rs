//! Projects carousel: production stills cycling on a timer with a
//! cross-fade, manual prev/next and drag-swipe, and a progress bar
//! tracking the active slide.

use crate::assets::MediaLibrary;
use crate::colors;
use crate::constants::{CAROUSEL_FADE_SECS, CAROUSEL_PERIOD_SECS, CAROUSEL_SWIPE_POINTS};
use crate::ui::draw_cover_image;
use eframe::egui::{self, Align2, CursorIcon, FontId, Rect, Sense, pos2, vec2};
use southside_showcase::ProjectsContent;

pub struct ProjectsCarousel {
    active: usize,
    /// Slide fading out underneath the active one
    fade_from: Option<usize>,
    last_change: Option<f64>,
    drag_accum: f32,
    reduced_motion: bool,
}

impl ProjectsCarousel {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            active: 0,
            fade_from: None,
            last_change: None,
            drag_accum: 0.0,
            reduced_motion,
        }
    }

    /// Index of the slide currently on top.
    pub fn active_index(&self) -> usize {
        self.active
    }

    fn advance(&mut self, now: f64, len: usize, direction: i32) {
        if len == 0 {
            return;
        }
        self.fade_from = (!self.reduced_motion).then_some(self.active);
        self.active = (self.active as i32 + direction).rem_euclid(len as i32) as usize;
        self.last_change = Some(now);
    }

    /// Auto-advances once the period elapses; the clock starts on the
    /// first call.
    fn tick(&mut self, now: f64, len: usize) {
        match self.last_change {
            None => self.last_change = Some(now),
            Some(at) if now - at >= CAROUSEL_PERIOD_SECS => self.advance(now, len, 1),
            Some(_) => {}
        }
    }

    /// Cross-fade progress into the active slide, 1.0 when settled.
    fn fade_progress(&self, now: f64) -> f32 {
        match (self.fade_from, self.last_change) {
            (Some(_), Some(at)) => (((now - at) as f32) / CAROUSEL_FADE_SECS).clamp(0.0, 1.0),
            _ => 1.0,
        }
    }

    fn release_drag(&mut self, now: f64, len: usize) {
        if self.drag_accum <= -CAROUSEL_SWIPE_POINTS {
            self.advance(now, len, 1);
        } else if self.drag_accum >= CAROUSEL_SWIPE_POINTS {
            self.advance(now, len, -1);
        }
        self.drag_accum = 0.0;
    }

    pub fn show(&mut self, ui: &mut egui::Ui, projects: &ProjectsContent, media: &MediaLibrary) {
        let now = ui.input(|i| i.time);
        let len = projects.entries.len();
        self.tick(now, len);
        if self.fade_progress(now) >= 1.0 {
            self.fade_from = None;
        }

        let width = ui.available_width();
        let image_w = (width * 0.62).min(980.0);
        let image_h = image_w * 2.0 / 3.0;
        let (rect, _) = ui.allocate_exact_size(vec2(width, image_h + 200.0), Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, colors::PAPER_BEIGE);

        // Flanking display words
        let flank_size = (width * 0.1).clamp(48.0, 160.0);
        painter.text(
            pos2(rect.min.x + 24.0, rect.min.y + 24.0),
            Align2::LEFT_TOP,
            &projects.flank_left,
            FontId::proportional(flank_size),
            colors::PAGE_BLACK,
        );
        painter.text(
            pos2(rect.max.x - 24.0, rect.max.y - 24.0),
            Align2::RIGHT_BOTTOM,
            &projects.flank_right,
            FontId::proportional(flank_size),
            colors::PAGE_BLACK,
        );

        if len == 0 {
            return;
        }

        let image_rect =
            Rect::from_center_size(rect.center() - vec2(0.0, 40.0), vec2(image_w, image_h));
        let response = ui
            .interact(
                image_rect,
                ui.id().with("carousel-stack"),
                Sense::click_and_drag(),
            )
            .on_hover_cursor(CursorIcon::Grab);

        if response.dragged() {
            self.drag_accum += response.drag_delta().x;
            // Hold the auto-advance while the user is holding the stack
            self.last_change = Some(now);
        }
        if response.drag_stopped() {
            self.release_drag(now, len);
        }

        // Cross-fade: outgoing slide underneath, active on top
        let fade = self.fade_progress(now);
        if let Some(from) = self.fade_from {
            draw_cover_image(
                &painter,
                image_rect,
                media.texture(&projects.entries[from].still.path),
                1.0,
                colors::MEDIA_PLACEHOLDER_LIGHT,
            );
        }
        draw_cover_image(
            &painter,
            image_rect,
            media.texture(&projects.entries[self.active].still.path),
            fade,
            colors::MEDIA_PLACEHOLDER_LIGHT,
        );

        // Prev / next
        let arrow = |x: f32, label: &str, id: &str| -> egui::Response {
            let pos = pos2(x, image_rect.center().y);
            let response = ui
                .interact(
                    Rect::from_center_size(pos, vec2(44.0, 88.0)),
                    ui.id().with(id),
                    Sense::click(),
                )
                .on_hover_cursor(CursorIcon::PointingHand);
            painter.text(
                pos,
                Align2::CENTER_CENTER,
                label,
                FontId::proportional(36.0),
                colors::PAGE_BLACK.gamma_multiply(if response.hovered() { 1.0 } else { 0.5 }),
            );
            response
        };
        if arrow(image_rect.min.x - 48.0, "‹", "carousel-prev").clicked() {
            self.advance(now, len, -1);
        }
        if arrow(image_rect.max.x + 48.0, "›", "carousel-next").clicked() {
            self.advance(now, len, 1);
        }

        // Active slide meta
        let project = &projects.entries[self.active];
        let meta_y = image_rect.max.y + 28.0;
        painter.text(
            pos2(image_rect.min.x, meta_y),
            Align2::LEFT_TOP,
            &project.title,
            FontId::proportional(16.0),
            colors::PAGE_BLACK.gamma_multiply(fade),
        );
        painter.text(
            pos2(image_rect.max.x, meta_y),
            Align2::RIGHT_TOP,
            &project.years,
            FontId::proportional(16.0),
            colors::PAGE_BLACK.gamma_multiply(fade),
        );

        // Progress bar: slide position plus time into the current hold
        let within = self
            .last_change
            .map(|at| (((now - at) / CAROUSEL_PERIOD_SECS).clamp(0.0, 1.0)) as f32)
            .unwrap_or(0.0);
        let progress = (self.active as f32 + within) / len as f32;
        let bar = Rect::from_min_size(
            pos2(image_rect.min.x, image_rect.max.y + 64.0),
            vec2(image_w, 3.0),
        );
        painter.rect_filled(bar, 1.5, colors::PAGE_BLACK.gamma_multiply(0.1));
        painter.rect_filled(
            Rect::from_min_size(bar.min, vec2(image_w * progress, 3.0)),
            1.5,
            colors::PAGE_BLACK,
        );

        if self.fade_from.is_some() {
            ui.ctx().request_repaint();
        } else if ui.is_rect_visible(rect) {
            // Keep the progress bar crawling
            ui.ctx()
                .request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_advances_and_wraps() {
        let mut carousel = ProjectsCarousel::new(true);
        carousel.tick(0.0, 4);
        assert_eq!(carousel.active_index(), 0);

        carousel.tick(CAROUSEL_PERIOD_SECS - 0.1, 4);
        assert_eq!(carousel.active_index(), 0);

        carousel.tick(CAROUSEL_PERIOD_SECS + 0.1, 4);
        assert_eq!(carousel.active_index(), 1);

        for step in 0..3 {
            carousel.tick((step as f64 + 2.5) * CAROUSEL_PERIOD_SECS, 4);
        }
        assert_eq!(carousel.active_index(), 0, "wraps past the last slide");
    }

    #[test]
    fn manual_advance_wraps_both_directions() {
        let mut carousel = ProjectsCarousel::new(true);
        carousel.advance(0.0, 4, -1);
        assert_eq!(carousel.active_index(), 3);
        carousel.advance(0.0, 4, 1);
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn swipe_threshold_gates_the_release() {
        let mut carousel = ProjectsCarousel::new(true);

        carousel.drag_accum = -(CAROUSEL_SWIPE_POINTS + 10.0);
        carousel.release_drag(0.0, 4);
        assert_eq!(carousel.active_index(), 1, "drag left goes forward");

        carousel.drag_accum = CAROUSEL_SWIPE_POINTS + 10.0;
        carousel.release_drag(0.0, 4);
        assert_eq!(carousel.active_index(), 0, "drag right goes back");

        carousel.drag_accum = CAROUSEL_SWIPE_POINTS * 0.5;
        carousel.release_drag(0.0, 4);
        assert_eq!(carousel.active_index(), 0, "short drag is ignored");
        assert_eq!(carousel.drag_accum, 0.0);
    }

    #[test]
    fn cross_fade_settles() {
        let mut carousel = ProjectsCarousel::new(false);
        carousel.tick(0.0, 2);
        carousel.advance(1.0, 2, 1);
        assert!(carousel.fade_progress(1.0) < 1.0);
        assert!(carousel.fade_progress(1.0 + f64::from(CAROUSEL_FADE_SECS)) >= 1.0);

        // Reduced motion never fades
        let mut cut = ProjectsCarousel::new(true);
        cut.advance(0.0, 2, 1);
        assert_eq!(cut.fade_progress(0.0), 1.0);
    }
}
