//! Task-to-calendar scheduling engine.
//!
//! Turns the flat task list served by the project API into the
//! `week → day → ordered-task` structure the calendar widget renders. Data
//! flows one way: raw tasks → date normalization → week bucketing →
//! per-day priority sort → density annotation → view structure. Each build
//! is a fresh snapshot; nothing is patched incrementally.

pub mod cache;
pub mod density;
pub mod normalize;
pub mod ports;
pub mod priority;
pub mod service;
pub mod view;
pub mod week;
