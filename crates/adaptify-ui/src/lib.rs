//! Adaptify UI - Leptos front end for the Adaptify marketing site.
//!
//! This crate binds the state machines from `adaptify-core` to the browser:
//! local storage, the performance clock, timers and the DOM.

// Component files tend to be large by nature - they contain view logic
#![allow(clippy::too_many_lines)]
// expect_context is the documented way to reach provided contexts
#![allow(clippy::expect_used)]
// Pass by value suggestions for small types like bool - not always clearer
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod app;
pub mod browser;
pub mod components;
pub mod context;
pub mod logging;
pub mod pages;
pub mod theme;

pub use app::App;
pub use context::{ThemeContext, ThemeProvider, use_theme};
