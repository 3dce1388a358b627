//! # nightlamp-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **server-side-rendered HTML views** — login, schedule editor
//!   (admin only), read-only schedule view — with **zero JavaScript**:
//!   plain forms POSTing back to the server (PRG pattern) and
//!   `<meta http-equiv="refresh">` for the live light-state display
//! - Serve `GET /get_light_state` as structured JSON for programmatic access
//! - Keep an in-process map of opaque session tokens (cookie → [`User`])
//! - Map HTTP requests into application service calls (driving adapter)
//!
//! ## Access rules
//! - unauthenticated requests to protected views redirect to `/login`
//! - authenticated non-admins asking for the editor are silently redirected
//!   to the read-only view (not an error page)
//! - the schedule write path itself re-checks the capability in the
//!   application service; this adapter only decides where to send people
//!
//! ## Dependency rule
//! Depends on `nightlamp-app` (port traits and services) and
//! `nightlamp-domain` (types used in request/response mapping). Never leaks
//! axum types into the domain.
//!
//! [`User`]: nightlamp_domain::user::User

pub mod api;
pub mod error;
pub mod pages;
pub mod router;
pub mod session;
pub mod state;
