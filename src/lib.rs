//! # xui
//!
//! An immediate-mode GUI core: CSS-like style sheets, a stack-based widget
//! context, and a sorted list of draw commands for an external renderer.
//!
//! Every frame the application calls [`Context::begin`](context::Context::begin),
//! runs its widget code, and hands the commands returned by
//! [`Context::end`](context::Context::end) to its renderer. Widgets keep no
//! state of their own; the context keeps only the per-window active and hot
//! controls, and the platform owns windows, fonts, textures and input.
//!
//! ## Core Systems
//!
//! - **[`style`]** — Style sheet tokenizer, parser, value functions and cascading lookup
//! - **[`draw`]** — Draw elements, path mini-language and the sorted command list
//! - **[`platform`]** — The `Platform` trait consumed by the context, ids and events
//! - **[`context`]** — Scoped state stacks, style resolution and the interaction state machine
//! - **[`widgets`]** — Window chrome, label, image, button, radio, check, slider, progress,
//!   scrollbar, menu and menubar
//! - **[`testing`]** — Headless platform and command-list snapshots
//! - **[`geometry`]** — Vec2, Vec4, Rect and Color primitives

// Foundation
pub mod geometry;

// Styling
pub mod style;

// Output
pub mod draw;

// Host interface
pub mod platform;

// Immediate-mode core
pub mod context;
pub mod widgets;

// Test support
pub mod testing;
