use egui::{Align2, Color32, FontId, Id, LayerId, Order, Rect, Rounding, Vec2};

use crate::theme::SplitTheme;

const FONT_SIZE: f32 = 14.0;
const PADDING: Vec2 = Vec2::new(12.0, 6.0);
const ROUNDING: f32 = 6.0;

fn font() -> FontId {
    FontId::proportional(FONT_SIZE)
}

/// Rendered size of the tooltip for `text`, padding included. Never wraps.
pub fn measure(ctx: &egui::Context, text: &str) -> Vec2 {
    let galley = ctx.fonts(|fonts| fonts.layout_no_wrap(text.to_owned(), font(), Color32::WHITE));
    galley.size() + PADDING * 2.0
}

/// Paints the tooltip on the tooltip layer, inverted over each half: dark box
/// over the light half, light box over the dark half.
pub fn paint(
    ctx: &egui::Context,
    rect: Rect,
    text: &str,
    light: Rect,
    dark: Rect,
    theme: &SplitTheme,
) {
    let painter = ctx.layer_painter(LayerId::new(Order::Tooltip, Id::new("switcher_tooltip")));

    for (clip, half) in [(light, &theme.light), (dark, &theme.dark)] {
        let clip = clip.intersect(rect);
        if clip.width() <= 0.0 || clip.height() <= 0.0 {
            continue;
        }
        let painter = painter.with_clip_rect(clip);
        painter.rect_filled(rect, Rounding::same(ROUNDING), half.ink);
        painter.text(rect.center(), Align2::CENTER_CENTER, text, font(), half.fill);
    }
}
