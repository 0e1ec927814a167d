//! Hero section: full-bleed backdrops cross-fading on a repeating
//! timeline, with a one-shot staggered reveal of the heading, side notes
//! and ruled lines.

use crate::anim::{Ease, Reveal};
use crate::assets::MediaLibrary;
use crate::colors;
use crate::constants::{HERO_FADE_SECS, HERO_HOLD_SECS, HERO_REDUCED_PERIOD_SECS};
use crate::ui::draw_cover_image;
use eframe::egui::{self, Align2, Color32, FontId, Sense, pos2, vec2};
use southside_showcase::HeroContent;

/// Backdrop brightness cap; the hero reads as a dark stage, not a photo.
const BACKDROP_OPACITY: f32 = 0.4;

pub struct HeroSection {
    reveal: Reveal,
    /// Start of the backdrop loop, set on the first frame shown
    epoch: Option<f64>,
    reduced_motion: bool,
}

impl HeroSection {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            reveal: Reveal::default(),
            epoch: None,
            reduced_motion,
        }
    }

    /// Backdrop currently on screen plus the cross-fade progress into it
    /// (1.0 while holding).
    fn slide_state(&self, now: f64, count: usize) -> (usize, f32) {
        let Some(epoch) = self.epoch else {
            return (0, 1.0);
        };
        if count <= 1 {
            return (0, 1.0);
        }
        let elapsed = now - epoch;

        if self.reduced_motion {
            // Hard cuts on a fixed interval
            return ((elapsed / HERO_REDUCED_PERIOD_SECS) as usize % count, 1.0);
        }

        let period = HERO_HOLD_SECS + HERO_FADE_SECS;
        let slot = (elapsed / period) as usize;
        let within = elapsed - slot as f64 * period;
        let fade = (within / HERO_FADE_SECS).min(1.0) as f32;
        (slot % count, fade)
    }

    /// Seconds until the next cross-fade starts; lets the frame loop
    /// sleep between transitions.
    fn secs_to_next_slide(&self, now: f64) -> f64 {
        let Some(epoch) = self.epoch else {
            return 0.0;
        };
        let period = if self.reduced_motion {
            HERO_REDUCED_PERIOD_SECS
        } else {
            HERO_HOLD_SECS + HERO_FADE_SECS
        };
        let elapsed = now - epoch;
        period - elapsed % period
    }

    pub fn show(&mut self, ui: &mut egui::Ui, hero: &HeroContent, media: &MediaLibrary) {
        let now = ui.input(|i| i.time);
        if self.epoch.is_none() {
            self.epoch = Some(now);
            self.reveal.trigger(now);
        }

        let height = ui.ctx().screen_rect().height();
        let (rect, _) =
            ui.allocate_exact_size(vec2(ui.available_width(), height), Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, colors::PAGE_BLACK);

        // Backdrops
        let count = hero.backdrops.len();
        let mut fading = false;
        if count > 0 {
            let (idx, fade) = self.slide_state(now, count);
            fading = fade < 1.0;
            if fading {
                let prev = (idx + count - 1) % count;
                draw_cover_image(
                    &painter,
                    rect,
                    media.texture(&hero.backdrops[prev].path),
                    BACKDROP_OPACITY * (1.0 - fade),
                    colors::MEDIA_PLACEHOLDER,
                );
            }
            draw_cover_image(
                &painter,
                rect,
                media.texture(&hero.backdrops[idx].path),
                BACKDROP_OPACITY * fade,
                colors::MEDIA_PLACEHOLDER,
            );
        }

        // Dark tint fades in over the backdrop during the intro
        let overlay = self.reveal.progress(now, 0.0, 0.5, Ease::OutQuart);
        painter.rect_filled(rect, 0.0, Color32::from_black_alpha((153.0 * overlay) as u8));

        // Heading, rising into place
        let title = self.reveal.progress(now, 0.4, 0.9, Ease::OutQuart);
        let size = (rect.width() * 0.115).clamp(40.0, 170.0);
        let line_h = size * 0.92;
        let top = rect.center().y - line_h * (hero.heading.len() as f32 - 1.0) * 0.5;
        for (i, line) in hero.heading.iter().enumerate() {
            let dy = (1.0 - title) * line_h * 1.2;
            painter.text(
                pos2(rect.min.x + rect.width() * 0.07, top + i as f32 * line_h + dy),
                Align2::LEFT_CENTER,
                line,
                FontId::proportional(size),
                colors::TEXT_WHITE.gamma_multiply(title),
            );
        }

        // Side notes beside the heading
        let notes = self.reveal.progress(now, 0.75, 0.6, Ease::OutQuart);
        let mut note_y = rect.center().y - 24.0 + (1.0 - notes) * 24.0;
        for note in &hero.side_notes {
            let note_rect = painter.text(
                pos2(rect.max.x - rect.width() * 0.07, note_y),
                Align2::RIGHT_TOP,
                note.to_uppercase(),
                FontId::proportional(11.0),
                colors::TEXT_WHITE.gamma_multiply(0.7 * notes),
            );
            note_y += note_rect.height() + 28.0;
        }

        // Ruled lines, scaling out from the left in a stagger
        let rule_w = 320.0_f32.min(rect.width() * 0.4);
        let rule_x = rect.center().x - rule_w * 0.5;
        for i in 0..hero.rule_count {
            let p = self
                .reveal
                .progress(now, 1.05 + i as f32 * 0.08, 0.7, Ease::OutQuad);
            if p <= 0.0 {
                continue;
            }
            let y = rect.max.y - 48.0 + i as f32 * 7.0;
            painter.line_segment(
                [pos2(rule_x, y), pos2(rule_x + rule_w * p, y)],
                egui::Stroke::new(1.0, colors::TEXT_WHITE.gamma_multiply(0.9)),
            );
        }

        if fading || self.reveal.running(now, 2.5) {
            ui.ctx().request_repaint();
        } else if count > 1 {
            ui.ctx()
                .request_repaint_after(std::time::Duration::from_secs_f64(
                    self.secs_to_next_slide(now).max(0.05),
                ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero(reduced: bool) -> HeroSection {
        HeroSection {
            reveal: Reveal::default(),
            epoch: Some(0.0),
            reduced_motion: reduced,
        }
    }

    #[test]
    fn slides_hold_then_cross_fade() {
        let hero = hero(false);
        // During the first hold the first backdrop is fully shown
        assert_eq!(hero.slide_state(2.0, 2), (0, 1.0));
        // Just past the period boundary the second backdrop fades in
        let (idx, fade) = hero.slide_state(HERO_HOLD_SECS + HERO_FADE_SECS + 0.5, 2);
        assert_eq!(idx, 1);
        assert!(fade > 0.0 && fade < 1.0);
        // And wraps back around
        let period = HERO_HOLD_SECS + HERO_FADE_SECS;
        assert_eq!(hero.slide_state(2.0 * period + 2.0, 2).0, 0);
    }

    #[test]
    fn reduced_motion_cuts_on_the_interval() {
        let hero = hero(true);
        assert_eq!(hero.slide_state(1.0, 2), (0, 1.0));
        assert_eq!(hero.slide_state(HERO_REDUCED_PERIOD_SECS + 1.0, 2), (1, 1.0));
    }

    #[test]
    fn single_backdrop_never_fades() {
        let hero = hero(false);
        assert_eq!(hero.slide_state(100.0, 1), (0, 1.0));
    }
}
