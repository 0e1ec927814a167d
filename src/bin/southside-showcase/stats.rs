//! Facility statistics: counters that run up with thousands separators
//! when the section first scrolls into view, next to a reel still framed
//! by a drawing-in outline and a running timecode.

use crate::anim::{Ease, Reveal, polyline_prefix};
use crate::assets::MediaLibrary;
use crate::colors;
use crate::constants::{STAT_COUNT_SECS, STAT_STAGGER_SECS};
use crate::ui::draw_cover_image;
use eframe::egui::{self, Pos2, Rect, RichText, Sense, Shape, Stroke, pos2, vec2};
use egui_extras::{Size, StripBuilder};
use southside_showcase::StatsContent;

pub struct StatsSection {
    reveal: Reveal,
    /// Set when the section first paints; feeds the timecode
    epoch: Option<f64>,
    reduced_motion: bool,
}

impl StatsSection {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            reveal: Reveal::default(),
            epoch: None,
            reduced_motion,
        }
    }

    /// Counter value shown for entry `idx` at `now`.
    fn counter_value(&self, now: f64, idx: usize, target: u64) -> u64 {
        if self.reduced_motion {
            return target;
        }
        let p = self.reveal.progress(
            now,
            idx as f32 * STAT_STAGGER_SECS,
            STAT_COUNT_SECS,
            Ease::OutQuad,
        );
        (target as f64 * f64::from(p)).floor() as u64
    }

    fn total_anim_secs(count: usize) -> f32 {
        count as f32 * STAT_STAGGER_SECS + STAT_COUNT_SECS
    }

    pub fn show(&mut self, ui: &mut egui::Ui, stats: &StatsContent, media: &MediaLibrary) {
        let now = ui.input(|i| i.time);
        if self.epoch.is_none() {
            self.epoch = Some(now);
        }

        let probe = Rect::from_min_size(ui.cursor().min, vec2(1.0, 120.0));
        let on_screen = ui.is_rect_visible(probe);
        if on_screen {
            self.reveal.trigger(now);
        }

        ui.add_space(72.0);
        StripBuilder::new(ui)
            .size(Size::relative(0.5))
            .size(Size::relative(0.5))
            .horizontal(|mut strip| {
                strip.cell(|ui| self.show_entries(ui, stats, now));
                strip.cell(|ui| self.show_reel(ui, stats, media, now));
            });
        ui.add_space(72.0);

        if !self.reduced_motion && self.reveal.running(now, Self::total_anim_secs(stats.entries.len()))
        {
            ui.ctx().request_repaint();
        } else if on_screen {
            // Timecode ticks once a second
            ui.ctx()
                .request_repaint_after(std::time::Duration::from_millis(250));
        }
    }

    fn show_entries(&self, ui: &mut egui::Ui, stats: &StatsContent, now: f64) {
        for (idx, stat) in stats.entries.iter().enumerate() {
            let fade = if self.reduced_motion {
                1.0
            } else {
                self.reveal.progress(
                    now,
                    idx as f32 * STAT_STAGGER_SECS,
                    STAT_COUNT_SECS,
                    Ease::OutCubic,
                )
            };
            let value = self.counter_value(now, idx, stat.value);

            ui.label(
                RichText::new(format_thousands(value))
                    .size(56.0)
                    .strong()
                    .color(colors::TEXT_WHITE.gamma_multiply(fade)),
            );
            ui.label(
                RichText::new(&stat.label)
                    .size(20.0)
                    .color(colors::TEXT_LIGHT_GRAY.gamma_multiply(fade * 0.9)),
            );
            ui.add_space(44.0);
        }
    }

    fn show_reel(&self, ui: &mut egui::Ui, stats: &StatsContent, media: &MediaLibrary, now: f64) {
        let width = ui.available_width() - 40.0;
        let height = (width * 1.1).min(ui.ctx().screen_rect().height() * 0.65);
        let (rect, _) = ui.allocate_exact_size(vec2(width, height), Sense::hover());
        let painter = ui.painter_at(rect);

        draw_cover_image(
            &painter,
            rect,
            media.texture(&stats.reel.path),
            1.0,
            colors::MEDIA_PLACEHOLDER,
        );

        // Frame outline draws in around the reel
        let outline_p = if self.reduced_motion {
            1.0
        } else {
            self.reveal.progress(now, 0.0, 0.6, Ease::OutQuad)
        };
        if outline_p > 0.0 {
            let outline = rounded_rect_outline(rect.shrink(2.0), 28.0);
            let points = polyline_prefix(&outline, outline_p);
            if points.len() >= 2 {
                painter.add(Shape::line(
                    points,
                    Stroke::new(1.5, colors::TEXT_WHITE.gamma_multiply(0.9)),
                ));
            }
        }

        // Timecode running up the right edge
        let elapsed = self.epoch.map(|epoch| now - epoch).unwrap_or(0.0);
        let galley = painter.layout_no_wrap(
            format_timecode(elapsed),
            egui::FontId::monospace(13.0),
            colors::TEXT_WHITE.gamma_multiply(0.8),
        );
        let mut shape = egui::epaint::TextShape::new(
            pos2(rect.max.x + 18.0, rect.center().y - galley.size().x * 0.5),
            galley,
            colors::TEXT_WHITE,
        );
        shape.angle = std::f32::consts::FRAC_PI_2;
        painter.add(shape);
    }
}

/// Sampled outline of a rounded rectangle, starting after the top-left
/// corner and running clockwise back around to it.
fn rounded_rect_outline(rect: Rect, radius: f32) -> Vec<Pos2> {
    let r = radius.min(rect.width() * 0.5).min(rect.height() * 0.5);
    let mut points = Vec::new();

    let corner = |points: &mut Vec<Pos2>, center: Pos2, from_deg: f32| {
        const STEPS: usize = 8;
        for step in 0..=STEPS {
            let angle = (from_deg + 90.0 * step as f32 / STEPS as f32).to_radians();
            points.push(pos2(
                center.x + r * angle.cos(),
                center.y + r * angle.sin(),
            ));
        }
    };

    points.push(pos2(rect.min.x + r, rect.min.y));
    points.push(pos2(rect.max.x - r, rect.min.y));
    corner(&mut points, pos2(rect.max.x - r, rect.min.y + r), -90.0);
    points.push(pos2(rect.max.x, rect.max.y - r));
    corner(&mut points, pos2(rect.max.x - r, rect.max.y - r), 0.0);
    points.push(pos2(rect.min.x + r, rect.max.y));
    corner(&mut points, pos2(rect.min.x + r, rect.max.y - r), 90.0);
    points.push(pos2(rect.min.x, rect.min.y + r));
    corner(&mut points, pos2(rect.min.x + r, rect.min.y + r), 180.0);

    points
}

/// Formats an integer with comma thousands separators.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn format_timecode(secs: f64) -> String {
    let total = secs.max(0.0) as u64;
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(36), "36");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(70000), "70,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn timecode_rolls_over_minutes_and_hours() {
        assert_eq!(format_timecode(0.0), "00:00:00");
        assert_eq!(format_timecode(59.9), "00:00:59");
        assert_eq!(format_timecode(61.0), "00:01:01");
        assert_eq!(format_timecode(3725.0), "01:02:05");
        assert_eq!(format_timecode(-5.0), "00:00:00");
    }

    #[test]
    fn counters_run_up_to_the_target() {
        let mut section = StatsSection::new(false);
        assert_eq!(section.counter_value(0.0, 0, 70000), 0);

        section.reveal.trigger(0.0);
        let mid = section.counter_value(f64::from(STAT_COUNT_SECS) * 0.5, 0, 70000);
        assert!(mid > 0 && mid < 70000);
        assert_eq!(
            section.counter_value(f64::from(STAT_COUNT_SECS) + 0.1, 0, 70000),
            70000
        );

        // Staggered entry has not started yet at t=0
        assert_eq!(section.counter_value(0.01, 3, 50000), 0);
    }

    #[test]
    fn reduced_motion_shows_final_values_immediately() {
        let section = StatsSection::new(true);
        assert_eq!(section.counter_value(0.0, 2, 36), 36);
    }

    #[test]
    fn rounded_outline_is_closed_and_inside_the_rect() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 80.0));
        let outline = rounded_rect_outline(rect, 20.0);
        assert!(outline.len() > 30);
        let first = outline[0];
        let last = outline[outline.len() - 1];
        assert!(first.distance(last) < 1e-3);
        for p in &outline {
            assert!(p.x >= -1e-3 && p.x <= 100.0 + 1e-3);
            assert!(p.y >= -1e-3 && p.y <= 80.0 + 1e-3);
        }
    }
}
