//! Page composition for the showcase plus the shared media drawing
//! helpers the sections paint with.

use crate::ShowcaseApp;
use crate::colors;
use eframe::egui::{self, Color32, Painter, Rect, TextureHandle, Vec2, pos2};

impl ShowcaseApp {
    /// Renders the scrollable page in fixed section order and records
    /// the scroll position for the navigation header.
    pub fn show_page(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(colors::PAGE_BLACK))
            .show(ctx, |ui| {
                let output = egui::ScrollArea::vertical()
                    .id_salt("page")
                    // While the pointer is over the diagram the wheel
                    // zooms the camera, not the page
                    .enable_scrolling(!self.diagram.wants_wheel())
                    .show(ui, |ui| {
                        ui.spacing_mut().item_spacing.y = 0.0;

                        self.hero.show(ui, &self.content.hero, &self.media);
                        section_frame(ui, colors::PAGE_BLACK, |ui| {
                            self.stats.show(ui, &self.content.stats, &self.media);
                        });
                        section_frame(ui, colors::PAGE_BLACK, |ui| {
                            self.diagram.show(ui);
                        });
                        section_frame(ui, colors::PAGE_BLACK, |ui| {
                            self.statics
                                .show_showcase(ui, &self.content.showcase, &self.media);
                        });
                        self.carousel.show(ui, &self.content.projects, &self.media);
                        section_frame(ui, colors::LOCATION_BROWN, |ui| {
                            self.statics
                                .show_location(ui, &self.content.location, &self.media);
                        });
                        section_frame(ui, colors::PAGE_BLACK, |ui| {
                            self.statics.show_contact(ui, &self.content.contact);
                        });
                        section_frame(ui, colors::PAGE_BLACK, |ui| {
                            self.statics.show_footer(ui, &self.content.footer);
                        });
                    });

                let offset = output.state.offset.y;
                let max_scroll = (output.content_size.y - output.inner_rect.height()).max(1.0);
                self.scroll_offset = offset;
                self.scroll_progress = (offset / max_scroll).clamp(0.0, 1.0);
            });
    }
}

fn section_frame(ui: &mut egui::Ui, fill: Color32, add: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::new().fill(fill).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        add(ui);
    });
}

/// Draws `texture` covering `rect` (center-cropped, aspect preserved) at
/// `opacity`. Missing or failed media paints a flat placeholder instead;
/// nothing upstream treats that as an error.
pub fn draw_cover_image(
    painter: &Painter,
    rect: Rect,
    texture: Option<&TextureHandle>,
    opacity: f32,
    placeholder: Color32,
) {
    if opacity <= 0.0 {
        return;
    }
    match texture {
        Some(texture) => {
            let uv = cover_uv(texture.size_vec2(), rect.size());
            painter.image(texture.id(), rect, uv, Color32::WHITE.gamma_multiply(opacity));
        }
        None => {
            painter.rect_filled(rect, 0.0, placeholder.gamma_multiply(opacity));
        }
    }
}

/// UV crop that makes a texture of `tex_size` cover `target` the way a
/// background image does.
fn cover_uv(tex_size: Vec2, target: Vec2) -> Rect {
    let full = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
    if tex_size.x <= 0.0 || tex_size.y <= 0.0 || target.x <= 0.0 || target.y <= 0.0 {
        return full;
    }
    let tex_aspect = tex_size.x / tex_size.y;
    let target_aspect = target.x / target.y;
    if tex_aspect > target_aspect {
        let w = target_aspect / tex_aspect;
        Rect::from_min_max(pos2(0.5 - w * 0.5, 0.0), pos2(0.5 + w * 0.5, 1.0))
    } else {
        let h = tex_aspect / target_aspect;
        Rect::from_min_max(pos2(0.0, 0.5 - h * 0.5), pos2(1.0, 0.5 + h * 0.5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::vec2;

    #[test]
    fn cover_uv_crops_the_long_axis() {
        // Wide texture into a square target: crop left and right
        let uv = cover_uv(vec2(200.0, 100.0), vec2(100.0, 100.0));
        assert!((uv.min.x - 0.25).abs() < 1e-6);
        assert!((uv.max.x - 0.75).abs() < 1e-6);
        assert_eq!(uv.min.y, 0.0);
        assert_eq!(uv.max.y, 1.0);

        // Tall texture into a square target: crop top and bottom
        let uv = cover_uv(vec2(100.0, 200.0), vec2(100.0, 100.0));
        assert_eq!(uv.min.x, 0.0);
        assert!((uv.min.y - 0.25).abs() < 1e-6);

        // Matching aspect uses the full texture
        let uv = cover_uv(vec2(300.0, 200.0), vec2(150.0, 100.0));
        assert_eq!(uv, Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)));
    }

    #[test]
    fn cover_uv_survives_degenerate_sizes() {
        let full = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
        assert_eq!(cover_uv(vec2(0.0, 100.0), vec2(100.0, 100.0)), full);
        assert_eq!(cover_uv(vec2(100.0, 100.0), vec2(0.0, 0.0)), full);
    }
}
