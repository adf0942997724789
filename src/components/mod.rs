pub mod achievement_panel;
pub mod app;
pub mod controls_panel;
pub mod deed_panel;
pub mod history_panel;
pub mod home_view;
pub mod intro_overlay;
pub mod settings_modal;
pub mod stats_panel;
pub mod summary_view;
