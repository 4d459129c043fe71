//! Shared Dioxus components and chart-widget bridge for board report pages.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers driving the page's charting widget via `js_sys::eval()`
//! - `loader`: fetch transport plus the render/reload driver
//! - `state`: reactive AppState with Dioxus Signals
//! - `components`: reusable RSX components (workflow picker, filters, containers)

pub mod components;
pub mod js_bridge;
pub mod loader;
pub mod state;
