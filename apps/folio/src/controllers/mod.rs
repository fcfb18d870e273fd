#![allow(dead_code)]

//! Interaction controllers. Each one is a small state machine over the page
//! `Document`, driven by events the browser reports.

pub mod menu;
pub mod navbar;
pub mod reveal;
pub mod scroll_spy;
pub mod shortcuts;
pub mod smooth_scroll;
pub mod theme;
