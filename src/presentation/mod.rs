// Presentation layer - views, screen, chart drawing, application shell
pub mod app;
pub mod chart;
pub mod screen;
pub mod views;
