//! Selection state for the split switcher.
//!
//! All mutations go through [`SwitcherState::apply`]; the derived tooltip
//! placement is refreshed by [`SwitcherState::recompute`] once the frame's
//! layout is known.

pub mod tooltip;
pub mod transition;

use eframe::egui::Pos2;

use self::tooltip::{place_tooltip, tooltip_text, TooltipLayout, TooltipPlacement};

/// One of the two clickable halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Light,
    Dark,
}

/// Which half, if any, fills the whole widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpansionState {
    #[default]
    None,
    Light,
    Dark,
}

impl ExpansionState {
    /// State after a click on `side`.
    pub fn toggle(self, side: Side) -> ExpansionState {
        match (self, side) {
            (ExpansionState::None, Side::Light) => ExpansionState::Light,
            (ExpansionState::None, Side::Dark) => ExpansionState::Dark,
            (ExpansionState::Light, Side::Light) => ExpansionState::None,
            (ExpansionState::Dark, Side::Dark) => ExpansionState::None,
            (ExpansionState::Light, Side::Dark) => ExpansionState::Dark,
            (ExpansionState::Dark, Side::Light) => ExpansionState::Light,
        }
    }

    /// Share of the widget width given to `side`: 1, 0 or 1/2.
    pub fn width_fraction(self, side: Side) -> f32 {
        match (self, side) {
            (ExpansionState::None, _) => 0.5,
            (ExpansionState::Light, Side::Light) | (ExpansionState::Dark, Side::Dark) => 1.0,
            (ExpansionState::Light, Side::Dark) | (ExpansionState::Dark, Side::Light) => 0.0,
        }
    }
}

/// Which half the pointer currently hovers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverSide {
    #[default]
    None,
    Light,
    Dark,
}

impl From<Side> for HoverSide {
    fn from(side: Side) -> Self {
        match side {
            Side::Light => HoverSide::Light,
            Side::Dark => HoverSide::Dark,
        }
    }
}

/// Input delivered to the switcher by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwitcherEvent {
    Clicked(Side),
    PointerEntered(Side),
    PointerLeft(Side),
    PointerMoved(Pos2),
    /// The pointer entered the interactive region (both halves together).
    RegionEntered,
    RegionLeft,
}

/// Transient state owned by one switcher instance.
#[derive(Debug, Default)]
pub struct SwitcherState {
    expansion: ExpansionState,
    hover: HoverSide,
    pointer: Pos2,
    tooltip_visible: bool,
    placement: Option<TooltipPlacement>,
    tracking_pointer: bool,
    dirty: bool,
    last_layout: Option<TooltipLayout>,
}

impl SwitcherState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expansion(&self) -> ExpansionState {
        self.expansion
    }

    pub fn hover(&self) -> HoverSide {
        self.hover
    }

    pub fn pointer(&self) -> Pos2 {
        self.pointer
    }

    pub fn tooltip_visible(&self) -> bool {
        self.tooltip_visible
    }

    pub fn tooltip_text(&self) -> &'static str {
        tooltip_text(self.expansion, self.hover)
    }

    /// Starts listening to pointer moves. Called once when the widget mounts.
    pub fn mount(&mut self) {
        if !self.tracking_pointer {
            tracing::debug!("Pointer tracking attached");
        }
        self.tracking_pointer = true;
    }

    /// Stops listening to pointer moves. Called when the widget goes away.
    pub fn unmount(&mut self) {
        if self.tracking_pointer {
            tracing::debug!("Pointer tracking detached");
        }
        self.tracking_pointer = false;
        self.tooltip_visible = false;
    }

    /// Applies one input. Returns whether any observed state changed.
    pub fn apply(&mut self, event: SwitcherEvent) -> bool {
        let changed = match event {
            SwitcherEvent::Clicked(side) => {
                let next = self.expansion.toggle(side);
                tracing::debug!(?side, from = ?self.expansion, to = ?next, "Expansion toggled");
                self.expansion = next;
                true
            }
            SwitcherEvent::PointerEntered(side) => {
                replace_if_changed(&mut self.hover, HoverSide::from(side))
            }
            SwitcherEvent::PointerLeft(_) => replace_if_changed(&mut self.hover, HoverSide::None),
            SwitcherEvent::PointerMoved(pos) => {
                if !self.tracking_pointer {
                    return false;
                }
                replace_if_changed(&mut self.pointer, pos)
            }
            SwitcherEvent::RegionEntered => replace_if_changed(&mut self.tooltip_visible, true),
            SwitcherEvent::RegionLeft => replace_if_changed(&mut self.tooltip_visible, false),
        };
        self.dirty |= changed;
        changed
    }

    /// Refreshes the tooltip placement from the current state.
    ///
    /// `layout` is `None` while the tooltip or the root rectangle has not been
    /// measured yet; the previous placement is then kept as is.
    pub fn recompute(&mut self, layout: Option<TooltipLayout>) -> Option<TooltipPlacement> {
        let Some(layout) = layout else {
            return self.placement;
        };
        if !self.dirty && self.last_layout == Some(layout) && self.placement.is_some() {
            return self.placement;
        }

        let placement = place_tooltip(self.pointer, layout);
        tracing::trace!(
            left = placement.local.x,
            top = placement.local.y,
            "Tooltip placed"
        );
        self.placement = Some(placement);
        self.last_layout = Some(layout);
        self.dirty = false;
        self.placement
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{pos2, vec2, Rect};

    fn layout() -> TooltipLayout {
        TooltipLayout {
            tooltip_size: vec2(120.0, 40.0),
            bounds: Rect::from_min_size(Pos2::ZERO, vec2(800.0, 600.0)),
        }
    }

    #[test]
    fn transition_table() {
        let cases = [
            (ExpansionState::None, Side::Light, ExpansionState::Light),
            (ExpansionState::None, Side::Dark, ExpansionState::Dark),
            (ExpansionState::Light, Side::Light, ExpansionState::None),
            (ExpansionState::Light, Side::Dark, ExpansionState::Dark),
            (ExpansionState::Dark, Side::Light, ExpansionState::Light),
            (ExpansionState::Dark, Side::Dark, ExpansionState::None),
        ];
        for (from, side, expected) in cases {
            assert_eq!(from.toggle(side), expected, "{from:?} clicked {side:?}");
        }
    }

    #[test]
    fn double_click_collapses() {
        for side in [Side::Light, Side::Dark] {
            let mut state = SwitcherState::new();
            state.apply(SwitcherEvent::Clicked(side));
            state.apply(SwitcherEvent::Clicked(side));
            assert_eq!(state.expansion(), ExpansionState::None);
        }
    }

    #[test]
    fn click_sequence_follows_rule() {
        let mut state = SwitcherState::new();
        let clicks = [Side::Dark, Side::Light, Side::Light, Side::Dark, Side::Dark];
        let mut expected = ExpansionState::None;
        for side in clicks {
            expected = expected.toggle(side);
            state.apply(SwitcherEvent::Clicked(side));
            assert_eq!(state.expansion(), expected);
        }
        assert_eq!(state.expansion(), ExpansionState::None);
    }

    #[test]
    fn widths_follow_expansion() {
        assert_eq!(ExpansionState::None.width_fraction(Side::Light), 0.5);
        assert_eq!(ExpansionState::None.width_fraction(Side::Dark), 0.5);
        assert_eq!(ExpansionState::Light.width_fraction(Side::Light), 1.0);
        assert_eq!(ExpansionState::Light.width_fraction(Side::Dark), 0.0);
        assert_eq!(ExpansionState::Dark.width_fraction(Side::Dark), 1.0);
        assert_eq!(ExpansionState::Dark.width_fraction(Side::Light), 0.0);
    }

    #[test]
    fn hover_is_last_writer_wins() {
        let mut state = SwitcherState::new();
        state.apply(SwitcherEvent::PointerEntered(Side::Light));
        assert_eq!(state.hover(), HoverSide::Light);
        state.apply(SwitcherEvent::PointerEntered(Side::Dark));
        state.apply(SwitcherEvent::PointerLeft(Side::Light));
        assert_eq!(state.hover(), HoverSide::None);
        state.apply(SwitcherEvent::PointerEntered(Side::Dark));
        assert_eq!(state.hover(), HoverSide::Dark);
    }

    #[test]
    fn hover_does_not_touch_expansion() {
        let mut state = SwitcherState::new();
        state.apply(SwitcherEvent::Clicked(Side::Light));
        state.apply(SwitcherEvent::PointerEntered(Side::Dark));
        state.apply(SwitcherEvent::PointerLeft(Side::Dark));
        assert_eq!(state.expansion(), ExpansionState::Light);
        assert_eq!(state.tooltip_text(), "Switch to split view");
    }

    #[test]
    fn pointer_ignored_until_mounted() {
        let mut state = SwitcherState::new();
        assert!(!state.apply(SwitcherEvent::PointerMoved(pos2(5.0, 5.0))));
        assert_eq!(state.pointer(), Pos2::ZERO);

        state.mount();
        assert!(state.apply(SwitcherEvent::PointerMoved(pos2(5.0, 5.0))));
        assert_eq!(state.pointer(), pos2(5.0, 5.0));

        state.unmount();
        assert!(!state.apply(SwitcherEvent::PointerMoved(pos2(9.0, 9.0))));
        assert_eq!(state.pointer(), pos2(5.0, 5.0));
        assert!(!state.tooltip_visible());
    }

    #[test]
    fn recompute_skips_without_layout() {
        let mut state = SwitcherState::new();
        state.mount();
        state.apply(SwitcherEvent::PointerMoved(pos2(400.0, 300.0)));
        assert_eq!(state.recompute(None), None);

        let placed = state.recompute(Some(layout())).unwrap();
        assert_eq!(placed.local, pos2(340.0, 260.0));

        // A missing measurement later keeps the last placement.
        state.apply(SwitcherEvent::PointerMoved(pos2(10.0, 10.0)));
        assert_eq!(state.recompute(None).unwrap().local, pos2(340.0, 260.0));
    }

    #[test]
    fn recompute_follows_every_change() {
        let mut state = SwitcherState::new();
        state.mount();
        state.apply(SwitcherEvent::PointerMoved(pos2(400.0, 300.0)));
        state.recompute(Some(layout()));

        state.apply(SwitcherEvent::PointerMoved(pos2(10.0, 10.0)));
        assert_eq!(state.recompute(Some(layout())).unwrap().local, pos2(0.0, 0.0));

        // Wider text after a click changes the measured size.
        state.apply(SwitcherEvent::PointerMoved(pos2(795.0, 300.0)));
        state.apply(SwitcherEvent::Clicked(Side::Dark));
        let wider = TooltipLayout {
            tooltip_size: vec2(160.0, 40.0),
            ..layout()
        };
        assert_eq!(state.recompute(Some(wider)).unwrap().local, pos2(640.0, 260.0));
    }

    #[test]
    fn region_toggles_visibility() {
        let mut state = SwitcherState::new();
        assert!(state.apply(SwitcherEvent::RegionEntered));
        assert!(state.tooltip_visible());
        assert!(!state.apply(SwitcherEvent::RegionEntered));
        assert!(state.apply(SwitcherEvent::RegionLeft));
        assert!(!state.tooltip_visible());
    }
}
