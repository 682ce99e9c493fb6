// Infrastructure layer - configuration and the HTTP edge
pub mod config;
pub mod http_gateway;
