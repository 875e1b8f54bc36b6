//! Tooltip text and clamped placement.

use eframe::egui::{pos2, Pos2, Rect, Vec2};

use super::{ExpansionState, HoverSide};

/// Measurements needed to place the tooltip for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipLayout {
    /// Rendered size of the tooltip for its current text.
    pub tooltip_size: Vec2,
    /// The widget's bounding rectangle, in viewport space.
    pub bounds: Rect,
}

impl TooltipLayout {
    /// Builds a layout only when both measurements exist.
    pub fn from_measurements(tooltip_size: Option<Vec2>, bounds: Option<Rect>) -> Option<Self> {
        Some(Self {
            tooltip_size: tooltip_size?,
            bounds: bounds?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipPlacement {
    /// Offset inside the widget (`left`, `top`).
    pub local: Pos2,
    /// Same point in viewport space, ready to paint.
    pub screen: Pos2,
}

/// Centres the tooltip above the pointer, then clamps it inside `layout.bounds`.
///
/// Left/top clamps run before right/bottom ones, so a tooltip larger than the
/// widget ends up flush with the right or bottom edge.
pub fn place_tooltip(pointer: Pos2, layout: TooltipLayout) -> TooltipPlacement {
    let TooltipLayout {
        tooltip_size: size,
        bounds,
    } = layout;
    let pointer = pointer - bounds.min.to_vec2();

    let mut left = pointer.x - size.x / 2.0;
    let mut top = pointer.y - size.y;

    if left < 0.0 {
        left = 0.0;
    }
    if left + size.x > bounds.width() {
        left = bounds.width() - size.x;
    }
    if top < 0.0 {
        top = 0.0;
    }
    if top + size.y > bounds.height() {
        top = bounds.height() - size.y;
    }

    let local = pos2(left, top);
    TooltipPlacement {
        local,
        screen: bounds.min + local.to_vec2(),
    }
}

/// Label for the current state. Hovering nothing while collapsed offers the
/// dark theme.
pub fn tooltip_text(expansion: ExpansionState, hover: HoverSide) -> &'static str {
    match (expansion, hover) {
        (ExpansionState::None, HoverSide::Light) => "Switch to light theme",
        (ExpansionState::None, _) => "Switch to dark theme",
        (ExpansionState::Light | ExpansionState::Dark, _) => "Switch to split view",
    }
}
