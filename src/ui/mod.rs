pub mod app;
pub mod icons;
pub mod split_view;
pub mod tooltip_ui;
