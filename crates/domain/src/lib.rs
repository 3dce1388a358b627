//! # nightlamp-domain
//!
//! Pure domain model for the nightlamp relay light timer.
//!
//! ## Responsibilities
//! - Define [`TimeOfDay`](time::TimeOfDay) — minute-granular wall-clock time
//! - Define the [`Schedule`](schedule::Schedule) — the persisted on/off pair
//! - Contain the window evaluator: [`Schedule::evaluate`](schedule::Schedule::evaluate)
//! - Define [`LightState`](light::LightState) — the relay pin level
//! - Define [`User`](user::User) and [`Role`](user::Role) — the capability
//!   consumed by the admin write path
//! - Define the error conventions shared across the workspace
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod light;
pub mod schedule;
pub mod time;
pub mod user;
