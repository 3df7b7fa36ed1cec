//! Terminal UI rendering using ratatui.
//!
//! The dashboard is a single page. [`dashboard::draw`] splits the terminal
//! and hands each region to its renderer:
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ Header (common::render_header)           │
//! │  title, compliance        heartbeat time │
//! ├──────────────────────────────────────────┤
//! │ ┌────────────────┐  ┌────────────────┐   │
//! │ │ cards::render  │  │                │   │
//! │ └────────────────┘  └────────────────┘   │
//! │ ┌──────────────────────────────────────┐ │
//! │ │ security_log::render                 │ │
//! │ └──────────────────────────────────────┘ │
//! ├──────────────────────────────────────────┤
//! │ Status Bar (common::render_status_bar)   │
//! └──────────────────────────────────────────┘
//!         ↑
//!    Overlay rendered on top: common::render_help
//! ```
//!
//! All colors come from [`Theme`].

pub mod cards;
pub mod common;
pub mod dashboard;
pub mod security_log;
pub mod theme;

pub use dashboard::{draw, render_to_string, MIN_HEIGHT, MIN_WIDTH};
pub use theme::{Theme, ThemeChoice, ThemeKind};
