//! View rendering (header, category bar, product grid, empty state)

use super::App;
use crate::catalog::CATEGORIES;
use crate::constants::{APP_NAME, APP_SUBTITLE};
use crate::theme;
use crate::types::Product;
use crate::ui::components::{category_pill, paint_count_badge, product_card};
use crate::utils;
use eframe::egui;
use tracing::warn;

/// Number of grid columns that fit `available` width
pub(crate) fn grid_columns(available: f32) -> usize {
    let fit = ((available + theme::SPACING_XL) / (theme::CARD_MIN_WIDTH + theme::SPACING_XL)).floor();
    (fit.max(1.0) as usize).min(theme::GRID_MAX_COLUMNS)
}

impl App {
    pub(crate) fn render_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header")
            .exact_height(theme::HEADER_HEIGHT)
            .show_separator_line(false)
            .frame(theme::header_frame())
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    self.render_logo(ui, ctx);

                    ui.add_space(theme::SPACING_XL);

                    // Room for the cart button and sign-in label
                    let right_w = 180.0;
                    let search_w = (ui.available_width() - right_w - theme::SPACING_XL)
                        .min(theme::SEARCH_MAX_WIDTH)
                        .max(160.0);
                    let gap = ((ui.available_width() - right_w - search_w) / 2.0).max(0.0);
                    ui.add_space(gap);
                    self.render_search_box(ui, search_w);

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add(egui::Label::new(
                            egui::RichText::new("Sign In")
                                .size(theme::FONT_BODY)
                                .color(theme::TEXT_SECONDARY),
                        ));
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(egui_phosphor::regular::USER)
                                    .size(22.0)
                                    .color(theme::TEXT_MUTED),
                            )
                            .sense(egui::Sense::click()),
                        );
                        ui.add_space(theme::SPACING_MD);
                        self.render_cart_button(ui);
                    });
                });
            });
    }

    fn render_logo(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        if self.logo_texture.is_none() {
            match utils::rasterize_logo(theme::LOGO_SIZE as u32 * 2) {
                Some((pixels, w, h)) => {
                    self.logo_texture = Some(ctx.load_texture(
                        "logo",
                        egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &pixels),
                        egui::TextureOptions::LINEAR,
                    ));
                }
                None => warn!("Failed to rasterize logo"),
            }
        }
        if let Some(texture) = &self.logo_texture {
            ui.image(egui::load::SizedTexture::new(
                texture.id(),
                egui::vec2(theme::LOGO_SIZE, theme::LOGO_SIZE),
            ));
        }
        ui.label(
            egui::RichText::new(APP_NAME)
                .size(theme::FONT_TITLE)
                .strong()
                .color(theme::TEXT_PRIMARY),
        );
        ui.label(
            egui::RichText::new(APP_SUBTITLE)
                .size(theme::FONT_SMALL)
                .color(theme::TEXT_DIM),
        );
    }

    fn render_search_box(&mut self, ui: &mut egui::Ui, width: f32) {
        let search_id = ui.make_persistent_id("search_box");
        let focused = ui.ctx().memory(|m| m.has_focus(search_id));

        theme::search_frame(focused).show(ui, |ui| {
            ui.set_width(width - 24.0);
            ui.spacing_mut().item_spacing.x = theme::SPACING_MD;
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(egui_phosphor::regular::MAGNIFYING_GLASS)
                        .size(16.0)
                        .color(theme::TEXT_DIM),
                );
                let clear_w = if self.search_query.is_empty() { 0.0 } else { 20.0 };
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.search_query)
                        .id(search_id)
                        .hint_text("Search for products...")
                        .frame(false)
                        .desired_width(ui.available_width() - clear_w),
                );
                if self.focus_search {
                    self.focus_search = false;
                    response.request_focus();
                    if let Some(mut state) = egui::TextEdit::load_state(ui.ctx(), search_id) {
                        let ccursor = egui::text::CCursor::new(self.search_query.chars().count());
                        state
                            .cursor
                            .set_char_range(Some(egui::text::CCursorRange::one(ccursor)));
                        state.store(ui.ctx(), search_id);
                    }
                }
                if response.changed() {
                    self.apply_filters();
                }

                if !self.search_query.is_empty() {
                    let clear = ui
                        .add(
                            egui::Label::new(
                                egui::RichText::new(egui_phosphor::regular::X)
                                    .size(14.0)
                                    .color(theme::TEXT_DIM),
                            )
                            .sense(egui::Sense::click()),
                        )
                        .on_hover_text("Clear search");
                    if clear.clicked() {
                        self.search_query.clear();
                        self.apply_filters();
                    }
                }
            });
        });
    }

    fn render_cart_button(&mut self, ui: &mut egui::Ui) {
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(40.0, 40.0), egui::Sense::click());
        if ui.is_rect_visible(rect) {
            let color = if response.hovered() { theme::TEXT_PRIMARY } else { theme::TEXT_MUTED };
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                egui_phosphor::regular::SHOPPING_CART,
                egui::FontId::proportional(24.0),
                color,
            );
            let count = self.cart.item_count();
            if count > 0 {
                paint_count_badge(ui.painter(), rect, count);
            }
        }
        if response.on_hover_text("Cart").clicked() {
            self.open_cart();
        }
    }

    pub(crate) fn render_main(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::BG_BASE))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .id_salt("main_scroll")
                    .show(ui, |ui| {
                        let full_w = ui.available_width();
                        let content_w = (full_w - theme::SPACING_XL * 2.0).min(theme::CONTENT_MAX_WIDTH);
                        let side = ((full_w - content_w) / 2.0).max(0.0);

                        ui.horizontal(|ui| {
                            ui.add_space(side);
                            ui.vertical(|ui| {
                                ui.set_width(content_w);
                                ui.add_space(theme::SPACING_XL + theme::SPACING_MD);
                                self.render_hero(ui);
                                self.render_category_bar(ui, content_w);
                                ui.add_space(theme::SPACING_XL + theme::SPACING_MD);
                                if self.filtered.is_empty() {
                                    self.render_empty_state(ui);
                                } else {
                                    self.render_product_grid(ui, ctx, content_w);
                                }
                                ui.add_space(theme::SPACING_XL + theme::SPACING_MD);
                            });
                        });
                    });
            });
    }

    fn render_hero(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("Shop by Category")
                    .size(theme::FONT_DISPLAY)
                    .strong(),
            );
            ui.add_space(theme::SPACING_LG);
            ui.label(
                egui::RichText::new(
                    "Find everything you need from fresh vegetables to daily essentials",
                )
                .size(theme::FONT_HEADING)
                .color(theme::TEXT_MUTED),
            );
        });
        ui.add_space(theme::SPACING_XXL);
    }

    fn render_category_bar(&mut self, ui: &mut egui::Ui, width: f32) {
        let mut clicked: Option<&'static str> = None;

        // Measure the row once so it can be centered
        let font = egui::FontId::proportional(theme::FONT_BODY);
        let row_w: f32 = CATEGORIES
            .iter()
            .map(|c| {
                ui.fonts(|f| {
                    f.layout_no_wrap(c.name.to_string(), font.clone(), theme::TEXT_PRIMARY)
                        .rect
                        .width()
                }) + 48.0
            })
            .sum::<f32>()
            + theme::SPACING_MD * (CATEGORIES.len() as f32 - 1.0);

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(theme::SPACING_MD, theme::SPACING_MD);
            if row_w < width {
                ui.add_space((width - row_w) / 2.0);
            }
            for category in &CATEGORIES {
                let selected = self.selected_category == category.id;
                if category_pill(ui, category.name, selected).clicked() {
                    clicked = Some(category.id);
                }
            }
        });

        if let Some(id) = clicked {
            self.select_category(id);
        }
    }

    fn render_product_grid(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, width: f32) {
        let columns = grid_columns(width);
        let spacing = theme::SPACING_XL;
        let card_w = ((width - spacing * (columns as f32 - 1.0)) / columns as f32).floor();

        let mut to_add: Option<&'static Product> = None;
        let products = self.filtered.clone();

        for row in products.chunks(columns) {
            ui.horizontal_top(|ui| {
                ui.spacing_mut().item_spacing.x = spacing;
                for &product in row {
                    let texture = self.load_image(ctx, product);
                    let in_cart = self.cart.quantity_of(product.id);
                    if product_card(ui, product, texture.as_ref(), in_cart, card_w) {
                        to_add = Some(product);
                    }
                }
            });
            ui.add_space(spacing);
        }

        if let Some(product) = to_add {
            self.add_to_cart(product);
        }
    }

    fn render_empty_state(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(theme::SPACING_XXL);
            ui.label(
                egui::RichText::new(egui_phosphor::regular::PACKAGE)
                    .size(64.0)
                    .color(theme::TEXT_DIM),
            );
            ui.add_space(theme::SPACING_LG);
            ui.label(
                egui::RichText::new("No products found")
                    .size(theme::FONT_TITLE)
                    .strong(),
            );
            ui.add_space(theme::SPACING_MD);
            ui.label(
                egui::RichText::new("Try adjusting your search or category filter")
                    .color(theme::TEXT_MUTED),
            );
            ui.add_space(theme::SPACING_LG);
            if ui
                .add(egui::Button::new(format!(
                    "{}  Clear Filters",
                    egui_phosphor::regular::FUNNEL_X
                )))
                .clicked()
            {
                self.clear_filters();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_is_responsive() {
        assert_eq!(grid_columns(200.0), 1);
        assert_eq!(grid_columns(600.0), 2);
        assert_eq!(grid_columns(900.0), 3);
        assert_eq!(grid_columns(1280.0), 4);
        // Never more than four columns
        assert_eq!(grid_columns(4000.0), 4);
    }
}
