//! Schedule editor — admin only.

use axum::extract::{Form, State};
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use nightlamp_app::ports::{Authenticator, LightDriver, ScheduleRepository};
use nightlamp_domain::error::NightlampError;
use nightlamp_domain::schedule::Schedule;
use nightlamp_domain::time::TimeOfDay;
use nightlamp_domain::user::User;

use super::{escape, layout};
use crate::state::AppState;

/// Times posted by the editor form. Empty fields unset the endpoint.
#[derive(Deserialize)]
pub struct SetTimesForm {
    #[serde(default)]
    pub time_on: String,
    #[serde(default)]
    pub time_off: String,
}

/// Outcome banner above the editor form.
enum Notice {
    None,
    Success,
    Failure(String),
}

fn render_editor(schedule: &Schedule, notice: &Notice) -> Html<String> {
    let banner = match notice {
        Notice::None => String::new(),
        Notice::Success => "<p class=\"success\">Times updated successfully</p>\n".to_string(),
        Notice::Failure(reason) => {
            format!("<p class=\"error\">{}</p>\n", escape(reason))
        }
    };
    let value = |time: Option<TimeOfDay>| time.map(|t| t.to_string()).unwrap_or_default();
    let body = format!(
        "{banner}\
         <form method=\"post\" action=\"/set_times\">\n  \
           <label>Light on <input type=\"time\" name=\"time_on\" value=\"{on}\"></label>\n  \
           <label>Light off <input type=\"time\" name=\"time_off\" value=\"{off}\"></label>\n  \
           <button type=\"submit\">Save</button>\n\
         </form>\n\
         <p><a href=\"/show_times\">Current times</a> · <a href=\"/logout\">Log out</a></p>",
        on = value(schedule.time_on),
        off = value(schedule.time_off),
    );
    Html(layout("Set times", None, &body))
}

/// Gate shared by both editor handlers: admins pass, authenticated
/// non-admins are silently sent to the read-only view, everyone else to
/// the login view.
fn gate(user: Option<User>) -> Result<User, Redirect> {
    match user {
        Some(user) if user.is_admin() => Ok(user),
        Some(_) => Err(Redirect::to("/show_times")),
        None => Err(Redirect::to("/login")),
    }
}

fn parse_field(field: &'static str, value: &str) -> Result<Option<TimeOfDay>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| format!("{field} must be a valid HH:MM time"))
}

/// `GET /set_times` — render the editor.
pub async fn set_times_form<SR, LD, AU>(
    State(state): State<AppState<SR, LD, AU>>,
    headers: HeaderMap,
) -> Response
where
    SR: ScheduleRepository + Send + Sync + 'static,
    LD: LightDriver + Send + Sync + 'static,
    AU: Authenticator + Send + Sync + 'static,
{
    if let Err(redirect) = gate(state.sessions.user_from_headers(&headers)) {
        return redirect.into_response();
    }
    let schedule = state
        .schedule_service
        .current()
        .await
        .unwrap_or_default();
    render_editor(&schedule, &Notice::None).into_response()
}

/// `POST /set_times` — write the new schedule through the service.
///
/// The schedule is only committed once the store write succeeds; on failure
/// the previous times remain in force and the editor shows a failure
/// notice.
pub async fn set_times_submit<SR, LD, AU>(
    State(state): State<AppState<SR, LD, AU>>,
    headers: HeaderMap,
    Form(form): Form<SetTimesForm>,
) -> Response
where
    SR: ScheduleRepository + Send + Sync + 'static,
    LD: LightDriver + Send + Sync + 'static,
    AU: Authenticator + Send + Sync + 'static,
{
    let user = match gate(state.sessions.user_from_headers(&headers)) {
        Ok(user) => user,
        Err(redirect) => return redirect.into_response(),
    };

    let parsed = parse_field("time_on", &form.time_on)
        .and_then(|on| parse_field("time_off", &form.time_off).map(|off| (on, off)));
    let (time_on, time_off) = match parsed {
        Ok(times) => times,
        Err(reason) => {
            let current = state
                .schedule_service
                .current()
                .await
                .unwrap_or_default();
            return render_editor(&current, &Notice::Failure(reason)).into_response();
        }
    };

    let schedule = Schedule::new(time_on, time_off);
    match state.schedule_service.set_times(&user, schedule).await {
        Ok(()) => render_editor(&schedule, &Notice::Success).into_response(),
        Err(NightlampError::Forbidden(_)) => Redirect::to("/show_times").into_response(),
        Err(err) => {
            tracing::error!(error = %err, "saving the schedule failed");
            let current = state
                .schedule_service
                .current()
                .await
                .unwrap_or_default();
            render_editor(
                &current,
                &Notice::Failure("Saving the times failed; the previous schedule is still active.".to_string()),
            )
            .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nightlamp_domain::user::Role;

    #[test]
    fn should_pass_admin_through_gate() {
        let user = User::new("admin", Role::Admin);
        assert!(gate(Some(user)).is_ok());
    }

    #[test]
    fn should_redirect_non_admin_to_read_only_view() {
        let user = User::new("viewer", Role::User);
        assert!(gate(Some(user)).is_err());
    }

    #[test]
    fn should_redirect_anonymous_to_login() {
        assert!(gate(None).is_err());
    }

    #[test]
    fn should_parse_empty_field_as_unset() {
        assert_eq!(parse_field("time_on", "  ").unwrap(), None);
    }

    #[test]
    fn should_reject_malformed_field() {
        assert!(parse_field("time_on", "8 o'clock").is_err());
    }
}
