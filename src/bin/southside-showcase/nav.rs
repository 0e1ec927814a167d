//! Navigation header: scroll-reactive show/hide, a page-scroll progress
//! bar, and hover-underlined links that open in the system browser.

use crate::colors;
use crate::constants::{NAV_ALWAYS_SHOW_OFFSET, NAV_HEIGHT};
use eframe::egui::{self, CursorIcon, Rect, RichText, Sense, Stroke, pos2, vec2};
use southside_showcase::SiteContent;

pub struct NavState {
    last_offset: f32,
    visible: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self {
            last_offset: 0.0,
            visible: true,
        }
    }

    /// Scroll-direction show/hide: visible near the top or whenever the
    /// page scrolls upward.
    pub fn update_scroll(&mut self, offset: f32) {
        if offset < NAV_ALWAYS_SHOW_OFFSET || offset < self.last_offset {
            self.visible = true;
        } else if offset > self.last_offset {
            self.visible = false;
        }
        self.last_offset = offset;
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// `progress` is the page scroll fraction in 0..=1.
    pub fn show(&mut self, ctx: &egui::Context, content: &SiteContent, progress: f32) {
        egui::TopBottomPanel::top("nav")
            .exact_height(NAV_HEIGHT)
            .show_separator_line(false)
            .frame(
                egui::Frame::new()
                    .fill(colors::PAGE_BLACK)
                    .inner_margin(egui::Margin::symmetric(24, 0)),
            )
            .show_animated(ctx, self.visible, |ui| {
                let panel = ui.max_rect();
                ui.painter().rect_filled(
                    Rect::from_min_size(
                        panel.min,
                        vec2(panel.width() * progress.clamp(0.0, 1.0), 3.0),
                    ),
                    0.0,
                    colors::TEXT_WHITE.gamma_multiply(0.8),
                );

                ui.horizontal_centered(|ui| {
                    let home = ui
                        .add(
                            egui::Label::new(
                                RichText::new(&content.studio.name)
                                    .size(20.0)
                                    .color(colors::TEXT_WHITE),
                            )
                            .sense(Sense::click()),
                        )
                        .on_hover_cursor(CursorIcon::PointingHand);
                    if home.clicked() {
                        open_link(&content.studio.home_url);
                    }

                    ui.with_layout(
                        egui::Layout::right_to_left(egui::Align::Center),
                        |ui| {
                            ui.spacing_mut().item_spacing.x = 28.0;
                            for item in content.nav.iter().rev() {
                                if link_label(ui, &item.label).clicked() {
                                    open_link(&item.url);
                                }
                            }
                        },
                    );
                });
            });
    }
}

/// A nav link with the hover underline drawn just below its baseline.
fn link_label(ui: &mut egui::Ui, label: &str) -> egui::Response {
    let response = ui
        .add(
            egui::Label::new(
                RichText::new(label)
                    .size(13.0)
                    .color(colors::TEXT_WHITE.gamma_multiply(0.9)),
            )
            .sense(Sense::click()),
        )
        .on_hover_cursor(CursorIcon::PointingHand);

    if response.hovered() {
        let rect = response.rect;
        ui.painter().line_segment(
            [
                pos2(rect.min.x, rect.max.y + 2.0),
                pos2(rect.max.x, rect.max.y + 2.0),
            ],
            Stroke::new(2.0, colors::TEXT_WHITE),
        );
    }
    response
}

pub fn open_link(url: &str) {
    if let Err(err) = open::that(url) {
        log::warn!("failed to open {url}: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hides_scrolling_down_and_returns_scrolling_up() {
        let mut nav = NavState::new();
        assert!(nav.visible());

        nav.update_scroll(10.0);
        assert!(nav.visible(), "still inside the always-show band");

        nav.update_scroll(300.0);
        assert!(!nav.visible(), "scrolling down hides the header");

        nav.update_scroll(280.0);
        assert!(nav.visible(), "any upward scroll shows it again");

        nav.update_scroll(290.0);
        assert!(!nav.visible());

        nav.update_scroll(5.0);
        assert!(nav.visible(), "near the top it is always shown");
    }

    #[test]
    fn unchanged_offset_keeps_the_current_state() {
        let mut nav = NavState::new();
        nav.update_scroll(300.0);
        assert!(!nav.visible());
        nav.update_scroll(300.0);
        assert!(!nav.visible());
    }
}
