//! Reusable UI components
//!
//! This module contains standalone UI components that can be used
//! throughout the application. None of them own state; interactions are
//! reported back through return values.

use crate::theme;
use crate::types::Product;
use crate::utils::format_price;
use eframe::egui;
use std::sync::Arc;

/// Format rating and review count, e.g. "★ 4.5 (125)"
pub fn format_rating(rating: f32, reviews: u32) -> String {
    format!("★ {:.1} ({})", rating, reviews)
}

/// UV rect that crops a texture of `tex_size` to fill `target` without
/// stretching, centered (CSS `object-fit: cover`).
pub fn cover_uv(tex_size: egui::Vec2, target: egui::Vec2) -> egui::Rect {
    let full = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
    if tex_size.x <= 0.0 || tex_size.y <= 0.0 || target.x <= 0.0 || target.y <= 0.0 {
        return full;
    }
    let tex_aspect = tex_size.x / tex_size.y;
    let target_aspect = target.x / target.y;
    if tex_aspect > target_aspect {
        // Wider than the slot: crop left and right
        let w = target_aspect / tex_aspect;
        let x0 = (1.0 - w) / 2.0;
        egui::Rect::from_min_max(egui::pos2(x0, 0.0), egui::pos2(x0 + w, 1.0))
    } else {
        let h = tex_aspect / target_aspect;
        let y0 = (1.0 - h) / 2.0;
        egui::Rect::from_min_max(egui::pos2(0.0, y0), egui::pos2(1.0, y0 + h))
    }
}

/// Paint a product image into `rect`, or a placeholder while it loads.
pub fn paint_product_image(
    painter: &egui::Painter,
    rect: egui::Rect,
    texture: Option<&egui::TextureHandle>,
    corner_radius: egui::CornerRadius,
) {
    match texture {
        Some(tex) => {
            let brush = egui::epaint::Brush {
                fill_texture_id: tex.id(),
                uv: cover_uv(tex.size_vec2(), rect.size()),
            };
            let mut shape = egui::epaint::RectShape::filled(rect, corner_radius, egui::Color32::WHITE);
            shape.brush = Some(Arc::new(brush));
            painter.add(shape);
        }
        None => {
            painter.rect_filled(rect, corner_radius, theme::BG_SURFACE);
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                egui_phosphor::regular::IMAGE,
                egui::FontId::proportional(rect.height().min(48.0) * 0.6),
                theme::TEXT_DIM,
            );
        }
    }
}

/// Small filled label, e.g. "25% OFF". Anchored by `align` at `pos`.
pub fn paint_badge(
    painter: &egui::Painter,
    pos: egui::Pos2,
    align: egui::Align2,
    text: &str,
    fill: egui::Color32,
) {
    let galley = painter.layout_no_wrap(
        text.to_string(),
        egui::FontId::proportional(theme::FONT_SMALL),
        theme::TEXT_ON_ACCENT,
    );
    let size = galley.size() + egui::vec2(16.0, 8.0);
    let rect = align.anchor_size(pos, size);
    painter.rect_filled(rect, theme::RADIUS_SMALL, fill);
    painter.galley(rect.center() - galley.size() / 2.0, galley, theme::TEXT_ON_ACCENT);
}

/// Width of the count bubble for a label `text_w` wide. Round for one or
/// two digits, stretched into a pill beyond that.
pub fn count_badge_width(text_w: f32) -> f32 {
    (text_w + theme::SPACING_MD).max(theme::COUNT_BADGE_SIZE)
}

/// Count bubble over the top-right corner of `anchor`, showing the full count
pub fn paint_count_badge(painter: &egui::Painter, anchor: egui::Rect, count: u64) {
    let center = anchor.right_top() + egui::vec2(-2.0, 2.0);
    let galley = painter.layout_no_wrap(
        count.to_string(),
        egui::FontId::proportional(theme::FONT_SMALL - 1.0),
        theme::TEXT_ON_ACCENT,
    );
    let size = egui::vec2(count_badge_width(galley.size().x), theme::COUNT_BADGE_SIZE);
    let rect = egui::Rect::from_center_size(center, size);
    painter.rect_filled(rect, theme::COUNT_BADGE_SIZE / 2.0, theme::ACCENT);
    painter.galley(rect.center() - galley.size() / 2.0, galley, theme::TEXT_ON_ACCENT);
}

/// Rounded category button. Selected pills are filled with the accent.
pub fn category_pill(ui: &mut egui::Ui, label: &str, selected: bool) -> egui::Response {
    let font = egui::FontId::proportional(theme::FONT_BODY);
    let text_w = ui.fonts(|f| {
        f.layout_no_wrap(label.to_string(), font.clone(), theme::TEXT_PRIMARY)
            .rect
            .width()
    });
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(text_w + 48.0, theme::PILL_HEIGHT),
        egui::Sense::click(),
    );

    if ui.is_rect_visible(rect) {
        let base = if selected { theme::ACCENT } else { theme::BG_ELEVATED };
        let (fill, draw_rect) = theme::button_visual(&response, base, rect);
        let painter = ui.painter();
        if selected {
            painter.rect_filled(
                draw_rect.translate(egui::vec2(0.0, 3.0)),
                theme::RADIUS_PILL,
                egui::Color32::from_black_alpha(25),
            );
        }
        painter.rect_filled(draw_rect, theme::RADIUS_PILL, fill);
        if !selected {
            painter.rect_stroke(
                draw_rect,
                theme::RADIUS_PILL,
                egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_DEFAULT),
                egui::StrokeKind::Inside,
            );
        }
        let text_color = if selected { theme::TEXT_ON_ACCENT } else { theme::TEXT_SECONDARY };
        painter.text(draw_rect.center(), egui::Align2::CENTER_CENTER, label, font, text_color);
    }

    response
}

/// "Add to Cart", with the quantity already in the cart when non-zero
pub fn add_button_label(in_cart: u32) -> String {
    if in_cart > 0 {
        format!("Add to Cart ({})", in_cart)
    } else {
        "Add to Cart".to_string()
    }
}

/// Product grid card. Returns true when "Add to Cart" was clicked.
pub fn product_card(
    ui: &mut egui::Ui,
    product: &Product,
    texture: Option<&egui::TextureHandle>,
    in_cart: u32,
    width: f32,
) -> bool {
    let mut add_clicked = false;
    let radius = theme::RADIUS_DEFAULT as u8;

    let frame = egui::Frame::new()
        .fill(theme::BG_ELEVATED)
        .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_SUBTLE))
        .corner_radius(theme::RADIUS_DEFAULT);

    let card = frame.show(ui, |ui| {
        ui.set_width(width);
        ui.spacing_mut().item_spacing.y = 0.0;

        // Image with badges
        let (image_rect, _) = ui.allocate_exact_size(
            egui::vec2(width, theme::CARD_IMAGE_HEIGHT),
            egui::Sense::hover(),
        );
        if ui.is_rect_visible(image_rect) {
            let painter = ui.painter();
            let corners = egui::CornerRadius { nw: radius, ne: radius, sw: 0, se: 0 };
            paint_product_image(painter, image_rect, texture, corners);

            let inset = egui::vec2(12.0, 12.0);
            if product.discount > 0 {
                paint_badge(
                    painter,
                    image_rect.left_top() + inset,
                    egui::Align2::LEFT_TOP,
                    &format!("{}% OFF", product.discount),
                    theme::BADGE_DISCOUNT,
                );
            }
            if product.organic {
                paint_badge(
                    painter,
                    image_rect.right_top() + egui::vec2(-inset.x, inset.y),
                    egui::Align2::RIGHT_TOP,
                    "Organic",
                    theme::BADGE_ORGANIC,
                );
            }
        }

        egui::Frame::new()
            .inner_margin(egui::Margin::same(theme::SPACING_LG as i8))
            .show(ui, |ui| {
                let inner_w = width - theme::SPACING_LG * 2.0;
                ui.set_width(inner_w);

                ui.label(
                    egui::RichText::new(product.name)
                        .size(theme::FONT_HEADING)
                        .strong(),
                );
                ui.add_space(theme::SPACING_SM);
                ui.label(
                    egui::RichText::new(product.category)
                        .size(theme::FONT_LABEL)
                        .color(theme::TEXT_DIM),
                );
                ui.add_space(theme::SPACING_LG);

                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format_price(product.price as u64))
                            .size(theme::FONT_TITLE)
                            .strong()
                            .color(theme::PRICE),
                    );
                    if product.is_discounted() {
                        ui.label(
                            egui::RichText::new(format_price(product.original_price as u64))
                                .size(theme::FONT_LABEL)
                                .strikethrough()
                                .color(theme::TEXT_DIM),
                        );
                    }
                    ui.label(
                        egui::RichText::new(product.price_unit)
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_MUTED),
                    );
                });
                ui.add_space(theme::SPACING_SM);
                ui.label(
                    egui::RichText::new(format!(
                        "{}  ·  {} in stock",
                        format_rating(product.rating, product.reviews),
                        product.stock
                    ))
                    .size(theme::FONT_SMALL)
                    .color(theme::TEXT_MUTED),
                );
                ui.add_space(theme::SPACING_LG);

                let button = theme::button_accent(format!(
                    "{}  {}",
                    egui_phosphor::regular::SHOPPING_CART,
                    add_button_label(in_cart)
                ))
                .min_size(egui::vec2(inner_w, theme::BUTTON_HEIGHT));
                if ui.add(button).clicked() {
                    add_clicked = true;
                }
            });
    });

    if card.response.hovered() {
        ui.painter().rect_stroke(
            card.response.rect,
            theme::RADIUS_DEFAULT,
            egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_STRONG),
            egui::StrokeKind::Outside,
        );
    }

    add_clicked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn add_label_shows_cart_quantity() {
        assert_eq!(add_button_label(0), "Add to Cart");
        assert_eq!(add_button_label(3), "Add to Cart (3)");
    }

    #[test]
    fn count_badge_grows_with_long_counts() {
        assert_eq!(count_badge_width(6.0), theme::COUNT_BADGE_SIZE);
        assert_eq!(count_badge_width(30.0), 30.0 + theme::SPACING_MD);
    }

    #[test]
    fn rating_format() {
        assert_eq!(format_rating(4.5, 125), "★ 4.5 (125)");
        assert_eq!(format_rating(4.0, 0), "★ 4.0 (0)");
    }

    #[test]
    fn cover_crops_tall_texture_vertically() {
        let uv = cover_uv(egui::vec2(400.0, 300.0), egui::vec2(400.0, 200.0));
        assert!(approx(uv.min.x, 0.0) && approx(uv.max.x, 1.0));
        assert!(approx(uv.height(), 200.0 / 300.0));
        assert!(approx(uv.center().y, 0.5));
    }

    #[test]
    fn cover_crops_wide_texture_horizontally() {
        let uv = cover_uv(egui::vec2(200.0, 100.0), egui::vec2(50.0, 50.0));
        assert!(approx(uv.width(), 0.5));
        assert!(approx(uv.min.x, 0.25));
        assert!(approx(uv.height(), 1.0));
    }

    #[test]
    fn cover_with_matching_aspect_is_full() {
        let uv = cover_uv(egui::vec2(400.0, 300.0), egui::vec2(200.0, 150.0));
        assert!(approx(uv.width(), 1.0) && approx(uv.height(), 1.0));
    }

    #[test]
    fn cover_with_degenerate_sizes_is_full() {
        let uv = cover_uv(egui::vec2(0.0, 0.0), egui::vec2(100.0, 100.0));
        assert_eq!(uv, egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)));
    }
}
