//! HTTP handlers for the JSON API and the server-rendered pages.

pub mod api;
pub mod web;
