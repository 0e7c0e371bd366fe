// src/lib.rs — Grapho: Top 10 rails and full lists for a small film/TV catalogue.
pub mod app;
pub mod card;
pub mod catalogue;
pub mod config;
pub mod pages;
pub mod routes;
pub mod section_header;
pub mod sections;
