pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod openapi;
pub mod report;
pub mod routes;
pub mod validation;
