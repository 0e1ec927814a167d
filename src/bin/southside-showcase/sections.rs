//! Static page sections: the spaces showcase with its marquee strip, the
//! location feature, the contact call-to-action and the footer. Markup
//! and paint only; the marquee offset is the single piece of state.

use crate::assets::MediaLibrary;
use crate::colors;
use crate::constants::MARQUEE_SPEED;
use crate::nav::open_link;
use crate::ui::draw_cover_image;
use eframe::egui::{
    self, Align2, Color32, CursorIcon, FontId, Rect, RichText, Sense, Stroke, pos2, vec2,
};
use egui_extras::{Size, StripBuilder};
use southside_showcase::{ContactContent, FooterContent, LocationContent, ShowcaseContent};

/// Bar widths of the decorative barcode strip in the footer.
const BARCODE: [u8; 32] = [
    2, 1, 1, 2, 1, 1, 2, 1, 2, 2, 1, 2, 1, 2, 1, 1, 2, 1, 2, 1, 2, 1, 1, 2, 1, 1, 2, 1, 2, 2, 1, 2,
];

pub struct StaticSections {
    marquee_offset: f32,
}

impl StaticSections {
    pub fn new() -> Self {
        Self {
            marquee_offset: 0.0,
        }
    }

    // ------------------------------------------------------------------
    // Showcase
    // ------------------------------------------------------------------

    pub fn show_showcase(
        &mut self,
        ui: &mut egui::Ui,
        showcase: &ShowcaseContent,
        media: &MediaLibrary,
    ) {
        ui.add_space(96.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(&showcase.heading)
                    .size(72.0)
                    .color(colors::TEXT_WHITE),
            );
        });
        ui.add_space(64.0);

        // Reel still, clickable, with a hover ring
        let width = (ui.available_width() * 0.8).min(1024.0);
        let height = width * 7.0 / 16.0;
        let (alloc, _) =
            ui.allocate_exact_size(vec2(ui.available_width(), height), Sense::hover());
        let reel_rect = Rect::from_center_size(alloc.center(), vec2(width, height));
        let painter = ui.painter_at(alloc);
        draw_cover_image(
            &painter,
            reel_rect,
            media.texture(&showcase.reel.path),
            1.0,
            colors::MEDIA_PLACEHOLDER,
        );

        let response = ui
            .interact(
                reel_rect,
                ui.id().with("showcase-reel"),
                Sense::click(),
            )
            .on_hover_cursor(CursorIcon::PointingHand);
        if response.hovered() {
            painter.rect_filled(reel_rect, 0.0, Color32::from_black_alpha(60));
            painter.circle_stroke(
                reel_rect.center(),
                64.0,
                Stroke::new(1.0, colors::TEXT_WHITE.gamma_multiply(0.5)),
            );
            painter.text(
                reel_rect.center(),
                Align2::CENTER_CENTER,
                "Learn More",
                FontId::proportional(13.0),
                colors::TEXT_WHITE,
            );
        }
        if response.clicked() {
            open_link(&showcase.cta.url);
        }

        ui.add_space(48.0);
        self.show_marquee(ui, &showcase.marquee);
        ui.add_space(48.0);

        ui.vertical_centered(|ui| {
            ui.set_max_width(620.0);
            ui.label(
                RichText::new(&showcase.blurb)
                    .size(17.0)
                    .color(colors::TEXT_LIGHT_GRAY),
            );
            ui.add_space(28.0);
            let button = egui::Button::new(
                RichText::new(&showcase.cta.label)
                    .size(13.0)
                    .color(colors::TEXT_WHITE),
            )
            .fill(Color32::TRANSPARENT)
            .stroke(Stroke::new(1.0, colors::TEXT_WHITE))
            .corner_radius(20.0);
            if ui.add(button).on_hover_cursor(CursorIcon::PointingHand).clicked() {
                open_link(&showcase.cta.url);
            }
        });
        ui.add_space(96.0);
    }

    /// Looping text strip; scrolls left, pauses while hovered.
    fn show_marquee(&mut self, ui: &mut egui::Ui, phrases: &[String]) {
        let (rect, response) =
            ui.allocate_exact_size(vec2(ui.available_width(), 72.0), Sense::hover());
        if phrases.is_empty() {
            return;
        }
        let painter = ui.painter_at(rect);
        let font = FontId::proportional(44.0);
        let gap = 80.0;

        // One full cycle of phrase widths sets the wrap length
        let galleys: Vec<_> = phrases
            .iter()
            .map(|phrase| {
                painter.layout_no_wrap(
                    phrase.to_uppercase(),
                    font.clone(),
                    colors::TEXT_WHITE,
                )
            })
            .collect();
        let cycle: f32 = galleys.iter().map(|g| g.size().x + gap).sum();

        if !response.hovered() {
            self.marquee_offset =
                (self.marquee_offset + MARQUEE_SPEED * ui.input(|i| i.stable_dt)) % cycle;
        }

        let mut x = rect.min.x - self.marquee_offset;
        while x < rect.max.x {
            for galley in &galleys {
                let advance = galley.size().x + gap;
                if x + advance > rect.min.x && x < rect.max.x {
                    painter.galley(
                        pos2(x, rect.center().y - galley.size().y * 0.5),
                        galley.clone(),
                        colors::TEXT_WHITE,
                    );
                }
                x += advance;
            }
        }

        if ui.is_rect_visible(rect) {
            ui.ctx().request_repaint();
        }
    }

    // ------------------------------------------------------------------
    // Location
    // ------------------------------------------------------------------

    pub fn show_location(
        &self,
        ui: &mut egui::Ui,
        location: &LocationContent,
        media: &MediaLibrary,
    ) {
        ui.add_space(96.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(location.kicker.join("  ›  ").to_uppercase())
                    .size(12.0)
                    .color(colors::TEXT_GRAY),
            );
            ui.add_space(12.0);
            ui.label(
                RichText::new(&location.heading)
                    .size(84.0)
                    .color(colors::TEXT_WHITE),
            );
        });
        ui.add_space(56.0);

        // Framed photo with the credit pinned inside the frame
        let width = (ui.available_width() * 0.84).min(1200.0);
        let height = width * 9.0 / 16.0;
        let (alloc, _) =
            ui.allocate_exact_size(vec2(ui.available_width(), height), Sense::hover());
        let frame_rect = Rect::from_center_size(alloc.center(), vec2(width, height));
        let painter = ui.painter_at(alloc);
        painter.rect_stroke(
            frame_rect,
            0.0,
            Stroke::new(1.0, colors::TEXT_LIGHT_GRAY.gamma_multiply(0.3)),
            egui::StrokeKind::Outside,
        );
        draw_cover_image(
            &painter,
            frame_rect.shrink(4.0),
            media.texture(&location.photo.path),
            1.0,
            colors::MEDIA_PLACEHOLDER,
        );
        painter.text(
            pos2(frame_rect.min.x + 16.0, frame_rect.max.y - 12.0),
            Align2::LEFT_BOTTOM,
            location.credit.to_uppercase(),
            FontId::proportional(10.0),
            colors::TEXT_GRAY,
        );
        let photo = ui
            .interact(
                frame_rect,
                ui.id().with("location-photo"),
                Sense::click(),
            )
            .on_hover_cursor(CursorIcon::PointingHand);
        if photo.clicked() {
            open_link(&location.link.url);
        }

        ui.add_space(48.0);
        StripBuilder::new(ui)
            .size(Size::relative(0.55))
            .size(Size::relative(0.45))
            .horizontal(|mut strip| {
                strip.empty();
                strip.cell(|ui| {
                    ui.set_max_width(520.0);
                    ui.label(
                        RichText::new(&location.blurb)
                            .size(17.0)
                            .color(colors::TEXT_LIGHT_GRAY),
                    );
                    ui.add_space(24.0);
                    if link_text(ui, &location.link.label.to_uppercase()).clicked() {
                        open_link(&location.link.url);
                    }
                });
            });
        ui.add_space(96.0);
    }

    // ------------------------------------------------------------------
    // Contact
    // ------------------------------------------------------------------

    pub fn show_contact(&self, ui: &mut egui::Ui, contact: &ContactContent) {
        ui.add_space(140.0);
        ui.vertical_centered(|ui| {
            let size = (ui.available_width() * 0.13).clamp(72.0, 200.0);
            let heading = ui
                .add(
                    egui::Label::new(
                        RichText::new(&contact.heading)
                            .size(size)
                            .strong()
                            .color(colors::TEXT_BEIGE),
                    )
                    .sense(Sense::click()),
                )
                .on_hover_cursor(CursorIcon::PointingHand);
            if heading.clicked() {
                open_link(&contact.url);
            }
        });
        ui.add_space(140.0);
    }

    // ------------------------------------------------------------------
    // Footer
    // ------------------------------------------------------------------

    pub fn show_footer(&self, ui: &mut egui::Ui, footer: &FooterContent) {
        ui.add_space(72.0);
        StripBuilder::new(ui)
            .size(Size::relative(0.4))
            .size(Size::relative(0.2))
            .size(Size::relative(0.4))
            .horizontal(|mut strip| {
                strip.cell(|ui| {
                    ui.label(
                        RichText::new(&footer.prompt)
                            .size(13.0)
                            .color(colors::TEXT_LIGHT_GRAY),
                    );
                    ui.add_space(20.0);
                    ui.horizontal(|ui| {
                        for action in &footer.actions {
                            let button = egui::Button::new(
                                RichText::new(&action.label)
                                    .size(11.0)
                                    .color(colors::PAGE_BLACK),
                            )
                            .fill(colors::TEXT_LIGHT_GRAY)
                            .corner_radius(18.0);
                            if ui
                                .add(button)
                                .on_hover_cursor(CursorIcon::PointingHand)
                                .clicked()
                            {
                                open_link(&action.url);
                            }
                        }
                    });
                });
                strip.cell(|ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(vec2(ui.available_width(), 96.0), Sense::hover());
                    draw_logo_mark(
                        ui.painter(),
                        Rect::from_center_size(rect.center(), vec2(100.0, 88.0)),
                    );
                });
                strip.cell(|ui| {
                    ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                        ui.label(
                            RichText::new(&footer.address)
                                .size(13.0)
                                .color(colors::TEXT_LIGHT_GRAY),
                        );
                        ui.label(
                            RichText::new(&footer.phone)
                                .size(13.0)
                                .color(colors::TEXT_LIGHT_GRAY),
                        );
                        if link_text(ui, &footer.email).clicked() {
                            open_link(&format!("mailto:{}", footer.email));
                        }
                    });
                });
            });
        ui.add_space(56.0);

        // Bottom strip, inverted
        let (strip_rect, _) =
            ui.allocate_exact_size(vec2(ui.available_width(), 40.0), Sense::hover());
        let painter = ui.painter_at(strip_rect);
        painter.rect_filled(strip_rect, 0.0, colors::TEXT_LIGHT_GRAY);
        painter.text(
            pos2(strip_rect.min.x + 24.0, strip_rect.center().y),
            Align2::LEFT_CENTER,
            &footer.copyright,
            FontId::proportional(11.0),
            colors::PAGE_BLACK,
        );
        draw_barcode(
            &painter,
            pos2(strip_rect.center().x, strip_rect.center().y),
        );
        let legal = ui
            .interact(
                Rect::from_min_max(
                    pos2(strip_rect.max.x - 160.0, strip_rect.min.y),
                    strip_rect.max,
                ),
                ui.id().with("footer-legal"),
                Sense::click(),
            )
            .on_hover_cursor(CursorIcon::PointingHand);
        painter.text(
            pos2(strip_rect.max.x - 24.0, strip_rect.center().y),
            Align2::RIGHT_CENTER,
            &footer.legal.label,
            FontId::proportional(11.0),
            colors::PAGE_BLACK,
        );
        if legal.clicked() {
            open_link(&footer.legal.url);
        }
    }
}

/// Small uppercase text link with the underline always on.
fn link_text(ui: &mut egui::Ui, label: &str) -> egui::Response {
    let response = ui
        .add(
            egui::Label::new(
                RichText::new(label)
                    .size(12.0)
                    .underline()
                    .color(colors::TEXT_WHITE),
            )
            .sense(Sense::click()),
        )
        .on_hover_cursor(CursorIcon::PointingHand);
    response
}

/// The studio logo mark: paired uprights flanking the stacked-tooth
/// glyph, painted into a 100×88 design box scaled to `rect`.
fn draw_logo_mark(painter: &egui::Painter, rect: Rect) {
    let unit = |x: f32, y: f32, w: f32, h: f32| -> Rect {
        Rect::from_min_size(
            pos2(
                rect.min.x + x / 100.0 * rect.width(),
                rect.min.y + y / 88.0 * rect.height(),
            ),
            vec2(w / 100.0 * rect.width(), h / 88.0 * rect.height()),
        )
    };

    let color = colors::TEXT_LIGHT_GRAY;
    for bar_x in [14.0, 24.0, 70.0, 80.0] {
        painter.rect_filled(unit(bar_x, 15.0, 8.0, 60.0), 0.0, color);
    }
    // Center glyph: spine plus three teeth
    painter.rect_filled(unit(44.0, 15.0, 5.5, 60.0), 0.0, color);
    painter.rect_filled(unit(44.0, 15.0, 16.5, 11.0), 0.0, color);
    painter.rect_filled(unit(44.0, 40.0, 16.5, 11.0), 0.0, color);
    painter.rect_filled(unit(44.0, 64.0, 16.5, 11.0), 0.0, color);
}

/// Decorative barcode centered at `center`.
fn draw_barcode(painter: &egui::Painter, center: egui::Pos2) {
    let total: f32 = BARCODE.iter().map(|w| *w as f32 + 1.0).sum();
    let mut x = center.x - total * 0.5;
    for width in BARCODE {
        let w = width as f32;
        painter.rect_filled(
            Rect::from_min_size(pos2(x, center.y - 11.0), vec2(w, 22.0)),
            0.0,
            colors::PAGE_BLACK,
        );
        x += w + 1.0;
    }
}
