use eframe::egui;

use crate::config::AppConfig;
use crate::switcher::transition::WidthTransition;
use crate::switcher::{ExpansionState, Side, SwitcherState};
use crate::theme::{self, SplitTheme};
use crate::ui::split_view::{self, HalfHover};

pub struct SwitcherApp {
    pub state: SwitcherState,
    pub transition: WidthTransition,
    pub theme: SplitTheme,
    pub half_hover: HalfHover,
    pub is_first_frame: bool,
}

impl SwitcherApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        let state = SwitcherState::new();
        let transition = WidthTransition::new(state.expansion(), config.transition_secs());

        Self {
            state,
            transition,
            theme: SplitTheme::new(Some(config.pattern_spacing)),
            half_hover: HalfHover::default(),
            is_first_frame: true,
        }
    }

    pub fn displayed_theme_name(&self) -> &'static str {
        match self.state.expansion() {
            ExpansionState::None => "Split",
            ExpansionState::Light => self.theme.get(Side::Light).name,
            ExpansionState::Dark => self.theme.get(Side::Dark).name,
        }
    }

    /// Visuals of the half currently filling the window, dark while split.
    fn visuals(&self) -> egui::Visuals {
        match self.state.expansion() {
            ExpansionState::None => theme::initial_theme().visuals,
            ExpansionState::Light => self.theme.get(Side::Light).visuals.clone(),
            ExpansionState::Dark => self.theme.get(Side::Dark).visuals.clone(),
        }
    }
}

impl eframe::App for SwitcherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.is_first_frame {
            self.is_first_frame = false;
            self.state.mount();
            tracing::info!("Switcher monté");
        }

        ctx.set_visuals(self.visuals());

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| split_view::draw_split_view(self, ui));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.state.unmount();
        tracing::info!("Switcher démonté");
    }
}
