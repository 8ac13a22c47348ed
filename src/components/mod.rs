pub mod app;
pub mod fractal_view;
