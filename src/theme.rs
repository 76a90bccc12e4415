//! Centralized theme constants for Varsha Stores
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0xf9, 0xfa, 0xfb); // gray-50
pub const BG_ELEVATED: Color32 = Color32::WHITE;
pub const BG_INPUT: Color32 = Color32::WHITE;
pub const BG_SURFACE: Color32 = Color32::from_rgb(0xf3, 0xf4, 0xf6); // gray-100
pub const BG_HOVER: Color32 = Color32::from_rgb(0xf0, 0xfd, 0xf4); // green-50
pub const OVERLAY: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 128); // black 50%

// =============================================================================
// COLORS - Accent (Green)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x16, 0xa3, 0x4a); // green-600
pub const ACCENT_LIGHT: Color32 = Color32::from_rgb(0xdc, 0xfc, 0xe7); // green-100
pub const PRICE: Color32 = Color32::from_rgb(0x15, 0x80, 0x3d); // green-700

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x11, 0x18, 0x27); // gray-900
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x37, 0x41, 0x51); // gray-700
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x4b, 0x55, 0x63); // gray-600
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x9c, 0xa3, 0xaf); // gray-400
pub const TEXT_ON_ACCENT: Color32 = Color32::WHITE;

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0xf3, 0xf4, 0xf6); // gray-100
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0xe5, 0xe7, 0xeb); // gray-200
pub const BORDER_STRONG: Color32 = Color32::from_rgb(0xd1, 0xd5, 0xdb); // gray-300

// =============================================================================
// COLORS - Badges
// =============================================================================
pub const BADGE_DISCOUNT: Color32 = Color32::from_rgb(0xef, 0x44, 0x44); // red-500
pub const BADGE_ORGANIC: Color32 = ACCENT;
pub const DANGER_TEXT: Color32 = Color32::from_rgb(0xef, 0x44, 0x44); // red-500

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_DISPLAY: f32 = 30.0;
pub const FONT_TITLE: f32 = 20.0;
pub const FONT_HEADING: f32 = 18.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 12.0;

// =============================================================================
// DIMENSIONS - Layout
// =============================================================================
pub const HEADER_HEIGHT: f32 = 64.0;
pub const CONTENT_MAX_WIDTH: f32 = 1280.0;
pub const SEARCH_MAX_WIDTH: f32 = 512.0;
pub const CART_PANEL_WIDTH: f32 = 448.0;

// =============================================================================
// DIMENSIONS - Components
// =============================================================================
pub const LOGO_SIZE: f32 = 32.0;
pub const PILL_HEIGHT: f32 = 36.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const COUNT_BADGE_SIZE: f32 = 20.0;
pub const CART_THUMB_SIZE: f32 = 64.0;

// =============================================================================
// DIMENSIONS - Grid Cards
// =============================================================================
pub const CARD_MIN_WIDTH: f32 = 260.0;
pub const CARD_IMAGE_HEIGHT: f32 = 192.0;
pub const GRID_MAX_COLUMNS: usize = 4;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_SMALL: f32 = 4.0;
pub const RADIUS_DEFAULT: f32 = 8.0;
pub const RADIUS_PILL: f32 = 18.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_FOCUS: f32 = 2.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 16.0;
pub const SPACING_XL: f32 = 24.0;
pub const SPACING_XXL: f32 = 48.0;

// =============================================================================
// ANIMATION
// =============================================================================
pub const CART_SLIDE_SECS: f32 = 0.25;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: false,
        override_text_color: Some(TEXT_PRIMARY),
        panel_fill: BG_BASE,
        window_fill: BG_ELEVATED,
        extreme_bg_color: BG_INPUT,
        faint_bg_color: BG_SURFACE,
        hyperlink_color: ACCENT,
        selection: egui::style::Selection {
            bg_fill: ACCENT_LIGHT,
            stroke: egui::Stroke::new(STROKE_DEFAULT, ACCENT),
        },
        widgets: egui::style::Widgets {
            noninteractive: egui::style::WidgetVisuals {
                bg_fill: BG_ELEVATED,
                weak_bg_fill: BG_SURFACE,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            inactive: egui::style::WidgetVisuals {
                bg_fill: Color32::TRANSPARENT,
                weak_bg_fill: BG_ELEVATED,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_SECONDARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            hovered: egui::style::WidgetVisuals {
                bg_fill: BG_HOVER,
                weak_bg_fill: BG_SURFACE,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_STRONG),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            active: egui::style::WidgetVisuals {
                bg_fill: ACCENT_LIGHT,
                weak_bg_fill: BORDER_DEFAULT,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: -1.0,
            },
            open: egui::style::WidgetVisuals {
                bg_fill: BG_SURFACE,
                weak_bg_fill: BG_ELEVATED,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        popup_shadow: egui::epaint::Shadow {
            offset: [0, 4],
            blur: 12,
            spread: 0,
            color: Color32::from_black_alpha(30),
        },
        window_corner_radius: egui::CornerRadius::same(RADIUS_DEFAULT as u8),
        ..egui::Visuals::light()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(16.0, 8.0);
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.floating = false;
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================

/// White header bar with bottom border
pub fn header_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_ELEVATED)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT))
        .inner_margin(egui::Margin::symmetric(SPACING_XL as i8, 0))
}

/// Slide-over cart body
pub fn cart_panel_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_ELEVATED)
        .shadow(egui::epaint::Shadow {
            offset: [-4, 0],
            blur: 32,
            spread: 0,
            color: Color32::from_black_alpha(60),
        })
}

/// Gray rounded row used for each cart line
pub fn cart_line_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_BASE)
        .corner_radius(RADIUS_DEFAULT)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

/// Search input with border
pub fn search_frame(focused: bool) -> egui::Frame {
    let stroke = if focused {
        egui::Stroke::new(STROKE_FOCUS, ACCENT)
    } else {
        egui::Stroke::new(STROKE_DEFAULT, BORDER_STRONG)
    };
    egui::Frame::new()
        .fill(BG_INPUT)
        .stroke(stroke)
        .corner_radius(RADIUS_DEFAULT)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Accent green button (for primary actions like Add to Cart)
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(text.into())
            .color(TEXT_ON_ACCENT)
            .size(FONT_BODY),
    )
    .fill(ACCENT)
    .stroke(egui::Stroke::NONE)
    .corner_radius(RADIUS_DEFAULT)
}

/// Returns (fill, draw_rect) for a custom-painted button with hover/press effects.
/// Darkens on hover, shrinks slightly on press.
pub fn button_visual(
    response: &egui::Response,
    base_fill: Color32,
    rect: egui::Rect,
) -> (Color32, egui::Rect) {
    if response.is_pointer_button_down_on() {
        (darken(base_fill, 0.12), rect.shrink(1.0))
    } else if response.hovered() {
        (darken(base_fill, 0.06), rect)
    } else {
        (base_fill, rect)
    }
}

fn darken(c: Color32, amount: f32) -> Color32 {
    let scale = 1.0 - amount;
    Color32::from_rgba_unmultiplied(
        (c.r() as f32 * scale) as u8,
        (c.g() as f32 * scale) as u8,
        (c.b() as f32 * scale) as u8,
        c.a(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn darken_keeps_alpha_and_reduces_channels() {
        let c = darken(Color32::from_rgb(200, 100, 50), 0.5);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (100, 50, 25, 255));
    }
}
