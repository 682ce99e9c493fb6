// Library target shared by the pulseboard and array-report binaries.
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod report;
