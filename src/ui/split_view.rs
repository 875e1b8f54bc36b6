use eframe::egui::{self, pos2, Align2, CursorIcon, FontId, Painter, Rect, Sense, Ui, Vec2};

use crate::switcher::tooltip::TooltipLayout;
use crate::switcher::{Side, SwitcherEvent};
use crate::theme::{Pattern, SplitTheme, Theme};
use crate::ui::app::SwitcherApp;
use crate::ui::tooltip_ui;

/// Hover flags of each half on the previous frame, to turn egui's per-frame
/// `hovered()` into enter/leave events.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HalfHover {
    pub light: bool,
    pub dark: bool,
}

impl HalfHover {
    /// Enter/leave events between `self` and `now`. Leaves come first so that
    /// crossing the divider ends on the newly entered side.
    pub fn diff(self, now: HalfHover) -> Vec<SwitcherEvent> {
        let mut events = Vec::new();
        for (side, was, is) in [
            (Side::Light, self.light, now.light),
            (Side::Dark, self.dark, now.dark),
        ] {
            if was && !is {
                events.push(SwitcherEvent::PointerLeft(side));
            }
        }
        for (side, was, is) in [
            (Side::Light, self.light, now.light),
            (Side::Dark, self.dark, now.dark),
        ] {
            if !was && is {
                events.push(SwitcherEvent::PointerEntered(side));
            }
        }
        events
    }
}

/// Light half anchored left, dark half anchored right.
pub fn half_rects(root: Rect, light_fraction: f32) -> (Rect, Rect) {
    let split_x = root.left() + root.width() * light_fraction.clamp(0.0, 1.0);
    let light = Rect::from_min_max(root.min, pos2(split_x, root.bottom()));
    let dark = Rect::from_min_max(pos2(split_x, root.top()), root.max);
    (light, dark)
}

/// Positions of pattern lines along one axis, starting one tile before
/// `start` so the clipped pattern has no gap at the edge.
pub fn pattern_stops(start: f32, end: f32, offset: f32, spacing: f32) -> Vec<f32> {
    if spacing <= 0.0 || end <= start {
        return Vec::new();
    }
    let mut stops = Vec::new();
    let mut at = start + offset.rem_euclid(spacing) - spacing;
    while at <= end {
        stops.push(at);
        at += spacing;
    }
    stops
}

pub fn draw_split_view(app: &mut SwitcherApp, ui: &mut Ui) {
    let ctx = ui.ctx().clone();
    let root = ui.max_rect();
    let now = ctx.input(|i| i.time);

    let (light_rect, dark_rect) = half_rects(root, app.transition.value(now));

    let light_response = ui
        .interact(light_rect, ui.id().with("light_half"), Sense::click())
        .on_hover_cursor(CursorIcon::PointingHand);
    let dark_response = ui
        .interact(dark_rect, ui.id().with("dark_half"), Sense::click())
        .on_hover_cursor(CursorIcon::PointingHand);

    // Collecter les événements d'abord, puis les appliquer dans l'ordre
    let mut events = Vec::new();
    if let Some(pos) = ctx.input(|i| i.pointer.latest_pos()) {
        events.push(SwitcherEvent::PointerMoved(pos));
    }

    let hover_now = HalfHover {
        light: light_response.hovered(),
        dark: dark_response.hovered(),
    };
    events.extend(app.half_hover.diff(hover_now));
    app.half_hover = hover_now;

    let in_region = ctx
        .input(|i| i.pointer.hover_pos())
        .map_or(false, |pos| root.contains(pos));
    events.push(if in_region {
        SwitcherEvent::RegionEntered
    } else {
        SwitcherEvent::RegionLeft
    });

    if light_response.clicked() {
        events.push(SwitcherEvent::Clicked(Side::Light));
    }
    if dark_response.clicked() {
        events.push(SwitcherEvent::Clicked(Side::Dark));
    }

    for event in events {
        if app.state.apply(event) {
            if let SwitcherEvent::Clicked(_) = event {
                app.transition.retarget(app.state.expansion(), now);
                tracing::info!("Affichage: {}", app.displayed_theme_name());
            }
        }
    }

    // Retargeting keeps the displayed value, so the rects above still hold.
    paint_half(&ui.painter_at(light_rect), light_rect, &app.theme.light);
    paint_half(&ui.painter_at(dark_rect), dark_rect, &app.theme.dark);
    paint_heading(ui.painter(), root, light_rect, dark_rect, &app.theme);

    let text = app.state.tooltip_text();
    let tooltip_size = tooltip_ui::measure(&ctx, text);
    let bounds = (root.width() > 0.0 && root.height() > 0.0).then_some(root);
    let layout = TooltipLayout::from_measurements(Some(tooltip_size), bounds);

    if let Some(placement) = app.state.recompute(layout) {
        if app.state.tooltip_visible() {
            let rect = Rect::from_min_size(placement.screen, tooltip_size);
            tooltip_ui::paint(&ctx, rect, text, light_rect, dark_rect, &app.theme);
        }
    }

    if app.transition.is_running(now) {
        ctx.request_repaint();
    }
}

fn paint_half(painter: &Painter, rect: Rect, theme: &Theme) {
    if rect.width() <= 0.0 {
        return;
    }
    painter.rect_filled(rect, 0.0, theme.fill);

    let spacing = theme.pattern_spacing;
    match theme.pattern {
        Pattern::Dots { radius } => {
            // Dots sit at the centre of each tile
            let offset = theme.pattern_offset + Vec2::splat(spacing / 2.0);
            for y in pattern_stops(rect.top(), rect.bottom(), offset.y, spacing) {
                for x in pattern_stops(rect.left(), rect.right(), offset.x, spacing) {
                    painter.circle_filled(pos2(x, y), radius, theme.pattern_color);
                }
            }
        }
        Pattern::Grid { width } => {
            let stroke = egui::Stroke::new(width, theme.pattern_color);
            for x in pattern_stops(rect.left(), rect.right(), theme.pattern_offset.x, spacing) {
                painter.line_segment([pos2(x, rect.top()), pos2(x, rect.bottom())], stroke);
            }
            for y in pattern_stops(rect.top(), rect.bottom(), theme.pattern_offset.y, spacing) {
                painter.line_segment([pos2(rect.left(), y), pos2(rect.right(), y)], stroke);
            }
        }
    }
}

/// "Switch | Theme" across the centre line, inverted over each half.
fn paint_heading(painter: &Painter, root: Rect, light: Rect, dark: Rect, theme: &SplitTheme) {
    let size = if root.width() >= 768.0 { 96.0 } else { 60.0 };
    let font = FontId::proportional(size);
    let centre = root.center();
    let gap = 12.0;

    for (clip, half) in [(light, &theme.light), (dark, &theme.dark)] {
        if clip.width() <= 0.0 {
            continue;
        }
        let painter = painter.with_clip_rect(clip);
        // Deux passes décalées pour simuler une graisse extra-bold
        for nudge in [0.0, 1.5] {
            painter.text(
                pos2(centre.x - gap + nudge, centre.y),
                Align2::RIGHT_CENTER,
                "Switch",
                font.clone(),
                half.ink,
            );
            painter.text(
                pos2(centre.x + gap + nudge, centre.y),
                Align2::LEFT_CENTER,
                "Theme",
                font.clone(),
                half.ink,
            );
        }
    }
}
