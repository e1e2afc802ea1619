//! User interface: reusable components, themes, and the page views.

pub mod components;
pub mod theme;
pub mod views;
