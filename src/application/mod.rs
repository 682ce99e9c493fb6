// Application layer - fetch orchestration and the data-access seam
pub mod bootstrap;
pub mod gateway;
