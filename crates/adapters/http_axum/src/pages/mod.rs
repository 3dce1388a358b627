//! Server-side-rendered HTML views.
//!
//! Every page is complete HTML built by plain string rendering — no
//! JavaScript, no template engine. Interactive controls are `<form>`
//! elements POSTing back to the server, and the live view auto-reloads
//! through `<meta http-equiv="refresh">`.

mod login;
mod set_times;
mod show_times;

pub use login::{index, login_form, login_submit, logout};
pub use set_times::{set_times_form, set_times_submit};
pub use show_times::show_times;

use nightlamp_domain::schedule::Schedule;
use nightlamp_domain::time::TimeOfDay;

/// Wrap `body` in the shared page chrome.
///
/// `refresh_seconds` adds a meta-refresh for live pages.
fn layout(title: &str, refresh_seconds: Option<u32>, body: &str) -> String {
    let refresh = refresh_seconds
        .map(|secs| format!("<meta http-equiv=\"refresh\" content=\"{secs}\">\n  "))
        .unwrap_or_default();
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n  \
           <meta charset=\"utf-8\">\n  \
           {refresh}<title>{title} — nightlamp</title>\n\
         </head>\n\
         <body>\n\
           <h1>{title}</h1>\n\
           {body}\n\
         </body>\n\
         </html>\n"
    )
}

/// Minimal HTML escaping for user-influenced text.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// `HH:MM`, or a placeholder when the endpoint is unset.
fn format_time(time: Option<TimeOfDay>) -> String {
    time.map_or_else(|| "not set".to_string(), |t| t.to_string())
}

/// The schedule as a definition list shared by several pages.
fn schedule_fragment(schedule: &Schedule) -> String {
    format!(
        "<dl>\n  \
           <dt>Light on</dt><dd>{}</dd>\n  \
           <dt>Light off</dt><dd>{}</dd>\n\
         </dl>",
        format_time(schedule.time_on),
        format_time(schedule.time_off),
    )
}
