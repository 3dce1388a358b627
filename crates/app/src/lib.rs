//! # nightlamp-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ScheduleRepository` — durable single-record schedule store
//!   - `LightDriver` — the relay output device
//!   - `Authenticator` — the external credential collaborator
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ScheduleService` — read the schedule, admin-only write
//!   - `LightService` — read-only view of the pin level
//! - Host the [`Poller`](poller::Poller) — the background task that reloads
//!   the schedule once per minute and actuates the light
//! - Provide **in-process infrastructure** that doesn't need IO
//!   (the configured credential table)
//!
//! ## Dependency rule
//! Depends on `nightlamp-domain` only (plus `tokio::sync`/`tokio::time` for
//! the poller). Never imports adapter crates. Adapters depend on *this*
//! crate, not the reverse.

pub mod auth_table;
pub mod poller;
pub mod ports;
pub mod services;
