//! Keaz Dashboard - Rust Implementation
//!
//! A client-rendered business dashboard: a navigation shell plus dashboard,
//! inbox, WhatsApp, contacts and reviews pages.
//!
//! This library provides:
//! - Toggle/link button selection and interaction state derivation
//! - Viewport size observation with redundant-update suppression
//! - Navigation routes, breakpoints and hover-driven menu selection
//! - Dashboard dataset loading and chart geometry
//! - The Dioxus web UI (router, shell layout, pages)
//! - A static bundle server for single-binary distribution

pub mod app;
pub mod config;
pub mod dashboard;
pub mod interaction;
pub mod nav;
pub mod selection;
#[cfg(feature = "server")]
pub mod server;
pub mod viewport;
