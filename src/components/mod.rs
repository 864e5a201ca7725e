pub mod app;
pub mod canvas_view;
pub mod controls_panel;
