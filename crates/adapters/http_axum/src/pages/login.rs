//! Login/status view and session endpoints.

use axum::extract::{Form, State};
use axum::http::HeaderMap;
use axum::http::header::SET_COOKIE;
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use nightlamp_app::ports::{Authenticator, LightDriver, ScheduleRepository};
use nightlamp_domain::schedule::Schedule;
use nightlamp_domain::user::User;

use super::{escape, layout, schedule_fragment};
use crate::session;
use crate::state::AppState;

/// Credentials posted by the login form.
#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

fn render_login(schedule: &Schedule, message: &str) -> Html<String> {
    let notice = if message.is_empty() {
        String::new()
    } else {
        format!("<p class=\"error\">{}</p>\n", escape(message))
    };
    let body = format!(
        "{notice}\
         {schedule}\n\
         <form method=\"post\" action=\"/login\">\n  \
           <label>Username <input type=\"text\" name=\"username\" required></label>\n  \
           <label>Password <input type=\"password\" name=\"password\" required></label>\n  \
           <button type=\"submit\">Log in</button>\n\
         </form>",
        schedule = schedule_fragment(schedule),
    );
    Html(layout("Light timer", None, &body))
}

/// Where an authenticated user belongs: admins edit, everyone else views.
fn home_for(user: &User) -> Redirect {
    if user.is_admin() {
        Redirect::to("/set_times")
    } else {
        Redirect::to("/show_times")
    }
}

/// `GET /` — login/status view showing the current schedule.
pub async fn index<SR, LD, AU>(State(state): State<AppState<SR, LD, AU>>) -> Response
where
    SR: ScheduleRepository + Send + Sync + 'static,
    LD: LightDriver + Send + Sync + 'static,
    AU: Authenticator + Send + Sync + 'static,
{
    let schedule = state
        .schedule_service
        .current()
        .await
        .unwrap_or_default();
    render_login(&schedule, "").into_response()
}

/// `GET /login` — already-authenticated visitors go straight home.
pub async fn login_form<SR, LD, AU>(
    State(state): State<AppState<SR, LD, AU>>,
    headers: HeaderMap,
) -> Response
where
    SR: ScheduleRepository + Send + Sync + 'static,
    LD: LightDriver + Send + Sync + 'static,
    AU: Authenticator + Send + Sync + 'static,
{
    if let Some(user) = state.sessions.user_from_headers(&headers) {
        return home_for(&user).into_response();
    }
    let schedule = state
        .schedule_service
        .current()
        .await
        .unwrap_or_default();
    render_login(&schedule, "").into_response()
}

/// `POST /login` — authenticate and start a session.
pub async fn login_submit<SR, LD, AU>(
    State(state): State<AppState<SR, LD, AU>>,
    Form(form): Form<LoginForm>,
) -> Response
where
    SR: ScheduleRepository + Send + Sync + 'static,
    LD: LightDriver + Send + Sync + 'static,
    AU: Authenticator + Send + Sync + 'static,
{
    match state
        .authenticator
        .authenticate(&form.username, &form.password)
        .await
    {
        Some(user) => {
            tracing::info!(username = %user.username, "login succeeded");
            let redirect = home_for(&user);
            let token = state.sessions.insert(user);
            ([(SET_COOKIE, session::session_cookie(token))], redirect).into_response()
        }
        None => {
            tracing::debug!(username = %form.username, "login rejected");
            let schedule = state
                .schedule_service
                .current()
                .await
                .unwrap_or_default();
            render_login(
                &schedule,
                "Incorrect username or password. Please try again.",
            )
            .into_response()
        }
    }
}

/// `GET /logout` — end the session and return to the login view.
pub async fn logout<SR, LD, AU>(
    State(state): State<AppState<SR, LD, AU>>,
    headers: HeaderMap,
) -> Response
where
    SR: ScheduleRepository + Send + Sync + 'static,
    LD: LightDriver + Send + Sync + 'static,
    AU: Authenticator + Send + Sync + 'static,
{
    if let Some(token) = session::token_from_headers(&headers) {
        state.sessions.remove(token);
    }
    (
        [(SET_COOKIE, session::clear_session_cookie())],
        Redirect::to("/"),
    )
        .into_response()
}
