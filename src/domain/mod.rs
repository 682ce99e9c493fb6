// Domain models - data the application fetches, routes over, and displays
pub mod profile;
pub mod route;
pub mod series;
pub mod view;
