//! Slide-over cart panel

use super::App;
use crate::theme;
use crate::ui::components::paint_product_image;
use crate::utils::{format_price, pluralize_items};
use eframe::egui;
use tracing::debug;

impl App {
    pub(crate) fn render_cart_panel(&mut self, ctx: &egui::Context) {
        let t = ctx.animate_bool_with_time(
            egui::Id::new("cart_slide"),
            self.cart_open,
            theme::CART_SLIDE_SECS,
        );
        if t <= 0.0 {
            return;
        }

        let screen = ctx.screen_rect();

        // Dim overlay; clicking it closes the cart
        egui::Area::new(egui::Id::new("cart_overlay"))
            .order(egui::Order::Middle)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let (rect, response) = ui.allocate_exact_size(screen.size(), egui::Sense::click());
                ui.painter().rect_filled(rect, 0.0, theme::OVERLAY.gamma_multiply(t));
                if response.clicked() {
                    self.close_cart();
                }
            });

        let width = theme::CART_PANEL_WIDTH.min(screen.width());
        let x = screen.right() - width * t;

        egui::Area::new(egui::Id::new("cart_panel"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::pos2(x, screen.top()))
            .show(ctx, |ui| {
                theme::cart_panel_frame().show(ui, |ui| {
                    ui.set_width(width);
                    ui.set_height(screen.height());
                    ui.spacing_mut().item_spacing.y = 0.0;
                    self.render_cart_header(ui, width);
                    egui::ScrollArea::vertical()
                        .id_salt("cart_scroll")
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            egui::Frame::new()
                                .inner_margin(egui::Margin::same(theme::SPACING_XL as i8))
                                .show(ui, |ui| {
                                    ui.set_width(width - theme::SPACING_XL * 2.0);
                                    if self.cart.is_empty() {
                                        self.render_cart_empty(ui);
                                    } else {
                                        self.render_cart_lines(ui, ctx);
                                        self.render_cart_summary(ui);
                                    }
                                });
                        });
                });
            });
    }

    fn render_cart_header(&mut self, ui: &mut egui::Ui, width: f32) {
        egui::Frame::new()
            .fill(theme::ACCENT)
            .inner_margin(egui::Margin::same(theme::SPACING_XL as i8))
            .show(ui, |ui| {
                ui.set_width(width - theme::SPACING_XL * 2.0);
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("Shopping Cart")
                            .size(theme::FONT_TITLE)
                            .strong()
                            .color(theme::TEXT_ON_ACCENT),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let close = ui.add(
                            egui::Button::new(
                                egui::RichText::new(egui_phosphor::regular::X)
                                    .size(18.0)
                                    .color(theme::TEXT_ON_ACCENT),
                            )
                            .fill(theme::ACCENT)
                            .stroke(egui::Stroke::NONE)
                            .corner_radius(theme::RADIUS_PILL),
                        );
                        if close.clicked() {
                            self.close_cart();
                        }
                    });
                });
                ui.add_space(theme::SPACING_SM);
                ui.label(
                    egui::RichText::new(pluralize_items(self.cart.line_count()))
                        .size(theme::FONT_LABEL)
                        .color(theme::ACCENT_LIGHT),
                );
            });
    }

    fn render_cart_empty(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(theme::SPACING_XL + theme::SPACING_MD);
            ui.label(
                egui::RichText::new(egui_phosphor::regular::SHOPPING_CART)
                    .size(48.0)
                    .color(theme::TEXT_DIM),
            );
            ui.add_space(theme::SPACING_LG);
            ui.label(
                egui::RichText::new("Your cart is empty")
                    .size(theme::FONT_HEADING)
                    .strong(),
            );
            ui.add_space(theme::SPACING_MD);
            ui.label(egui::RichText::new("Add some items to get started!").color(theme::TEXT_MUTED));
            ui.add_space(theme::SPACING_XL);
            if ui.add(theme::button_accent("Continue Shopping")).clicked() {
                self.close_cart();
            }
        });
    }

    fn render_cart_lines(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let mut to_remove: Option<&'static str> = None;
        let lines = self.cart.lines().to_vec();

        for line in &lines {
            let product = line.product;
            let texture = self.load_image(ctx, product);

            theme::cart_line_frame().show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = theme::SPACING_LG;
                    let (thumb, _) = ui.allocate_exact_size(
                        egui::vec2(theme::CART_THUMB_SIZE, theme::CART_THUMB_SIZE),
                        egui::Sense::hover(),
                    );
                    paint_product_image(
                        ui.painter(),
                        thumb,
                        texture.as_ref(),
                        egui::CornerRadius::same(theme::RADIUS_DEFAULT as u8),
                    );

                    ui.vertical(|ui| {
                        ui.spacing_mut().item_spacing.y = 2.0;
                        ui.label(egui::RichText::new(product.name).size(theme::FONT_BODY).strong());
                        ui.label(
                            egui::RichText::new(product.category)
                                .size(theme::FONT_SMALL)
                                .color(theme::TEXT_MUTED),
                        );
                        ui.label(
                            egui::RichText::new(format!(
                                "{} {}",
                                format_price(product.price as u64),
                                product.price_unit
                            ))
                            .size(theme::FONT_LABEL)
                            .strong()
                            .color(theme::ACCENT),
                        );
                    });

                    ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                        ui.spacing_mut().item_spacing.y = 2.0;
                        ui.label(egui::RichText::new(format!("Qty: {}", line.quantity)).size(theme::FONT_LABEL));
                        ui.label(
                            egui::RichText::new(format_price(line.subtotal()))
                                .size(theme::FONT_BODY)
                                .strong()
                                .color(theme::ACCENT),
                        );
                        let remove = ui.add(
                            egui::Label::new(
                                egui::RichText::new("Remove")
                                    .size(theme::FONT_SMALL)
                                    .color(theme::DANGER_TEXT),
                            )
                            .sense(egui::Sense::click()),
                        );
                        if remove.clicked() {
                            to_remove = Some(product.id);
                        }
                    });
                });
            });
            ui.add_space(theme::SPACING_LG);
        }

        if let Some(id) = to_remove {
            self.remove_from_cart(id);
        }
    }

    fn render_cart_summary(&mut self, ui: &mut egui::Ui) {
        ui.add_space(theme::SPACING_MD);
        ui.separator();
        ui.add_space(theme::SPACING_LG);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Total:").size(theme::FONT_TITLE).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(format_price(self.cart.total()))
                        .size(theme::FONT_TITLE)
                        .strong()
                        .color(theme::ACCENT),
                );
            });
        });
        ui.add_space(theme::SPACING_LG);

        let checkout = theme::button_accent("Proceed to Checkout")
            .min_size(egui::vec2(ui.available_width(), theme::BUTTON_HEIGHT + 8.0));
        if ui.add(checkout).clicked() {
            // No checkout backend exists
            debug!(
                items = self.cart.item_count(),
                total = self.cart.total(),
                "Checkout clicked"
            );
        }
    }
}
