//! Request routing
//!
//! Maps `(method, path)` to API handlers under `/api` and to HTML pages
//! everywhere else.

use chrono::Utc;
use serde::de::DeserializeOwned;
use tiny_http::Method;

use crate::api::{self, ApiError, AnalyzeTextRequest, CreatePostRequest, LoginRequest};
use crate::app::App;

use super::cookies::{clear_cookie, parse_cookie, session_cookie};
use super::http::{Reply, RequestParts};
use super::pages;

/// Route a request to its handler
pub fn route(app: &App, req: &RequestParts) -> Reply {
    let path = req.path().to_string();
    let token = req
        .cookie
        .as_deref()
        .and_then(|header| parse_cookie(header, &app.site.cookie_name));
    let token = token.as_deref();

    match path.strip_prefix("/api") {
        Some(api_path) if api_path.is_empty() || api_path.starts_with('/') => {
            route_api(app, req, api_path, token)
        },
        _ => route_page(app, req, &path, token),
    }
}

// =============================================================================
// API
// =============================================================================

fn route_api(app: &App, req: &RequestParts, api_path: &str, token: Option<&str>) -> Reply {
    let method = &req.method;

    match api_path {
        "/posts" => match method {
            Method::Get => Reply::from_result(api::list_posts(app)),
            Method::Post => match read_json_body::<CreatePostRequest>(req) {
                Ok(body) => match api::create_post(app, token, &body) {
                    Ok(post) => Reply::success(post, 201),
                    Err(e) => Reply::error(&e),
                },
                Err(e) => Reply::error(&e),
            },
            _ => Reply::method_not_allowed(method, "GET, POST"),
        },

        "/analyze-posts" => match method {
            Method::Get => Reply::from_result(api::analyze_posts(app, token)),
            _ => Reply::method_not_allowed(method, "GET"),
        },

        "/analyze" => match method {
            Method::Post => match read_json_body::<AnalyzeTextRequest>(req) {
                Ok(body) => Reply::from_result(api::analyze_text(app, &body)),
                Err(e) => Reply::error(&e),
            },
            _ => Reply::method_not_allowed(method, "POST"),
        },

        "/check-session" => match method {
            Method::Get => Reply::from_result(api::check_session(app, token)),
            _ => Reply::method_not_allowed(method, "GET"),
        },

        "/login" => match method {
            Method::Post => login(app, req),
            _ => Reply::method_not_allowed(method, "POST"),
        },

        "/logout" => match method {
            Method::Post => match api::logout(app, token) {
                Ok(data) => Reply::success(data, 200).with_header(
                    "Set-Cookie",
                    clear_cookie(&app.site.cookie_name, app.site.secure_cookies),
                ),
                Err(e) => Reply::error(&e),
            },
            _ => Reply::method_not_allowed(method, "POST"),
        },

        // Post detail: GET /posts/{id}
        _ if api_path.starts_with("/posts/") => {
            let id = api_path.strip_prefix("/posts/").unwrap_or("");
            if id.is_empty() || id.contains('/') {
                return Reply::error(&ApiError::not_found(format!(
                    "API endpoint not found: {method} /api{api_path}"
                )));
            }
            match method {
                Method::Get => Reply::from_result(api::get_post(app, id)),
                _ => Reply::method_not_allowed(method, "GET"),
            }
        },

        // 404 for unknown API routes
        _ => Reply::error(&ApiError::not_found(format!(
            "API endpoint not found: {method} /api{api_path}"
        ))),
    }
}

fn login(app: &App, req: &RequestParts) -> Reply {
    let body = match read_json_body::<LoginRequest>(req) {
        Ok(body) => body,
        Err(e) => return Reply::error(&e),
    };

    match api::login(app, &body) {
        Ok((data, session)) => {
            let cookie = session_cookie(
                &app.site.cookie_name,
                &session.token,
                session.remaining_secs(session.created_at),
                app.site.secure_cookies,
            );
            Reply::success(data, 200).with_header("Set-Cookie", cookie)
        },
        Err(e) => Reply::error(&e),
    }
}

/// Parse a JSON request body
fn read_json_body<T: DeserializeOwned>(req: &RequestParts) -> Result<T, ApiError> {
    serde_json::from_str(&req.body).map_err(|e| ApiError::bad_request(format!("Invalid JSON: {e}")))
}

// =============================================================================
// PAGES
// =============================================================================

fn route_page(app: &App, req: &RequestParts, path: &str, token: Option<&str>) -> Reply {
    if req.method != Method::Get && req.method != Method::Head {
        return Reply::text(405, &format!("Method {} Not Allowed", req.method)).with_header("Allow", "GET");
    }

    match path {
        "/" => match api::list_posts(app) {
            Ok(data) => {
                let is_admin = app.auth.is_admin(token, Utc::now());
                Reply::html(200, pages::index(&app.site, &data.posts, is_admin))
            },
            Err(e) => page_error(app, &e),
        },

        "/style.css" => Reply::css(pages::STYLE_CSS),

        "/create" => {
            if app.auth.is_admin(token, Utc::now()) {
                Reply::html(200, pages::create_form(&app.site))
            } else {
                Reply::redirect("/")
            }
        },

        "/analysis" => match api::analyze_posts(app, token) {
            Ok(data) => Reply::html(200, pages::analysis(&app.site, &data.posts)),
            Err(e) if e.status_code() == 401 => Reply::redirect("/"),
            Err(e) => page_error(app, &e),
        },

        _ if path.starts_with("/posts/") => {
            let id = path.strip_prefix("/posts/").unwrap_or("").trim_end_matches('/');
            match api::get_post(app, id) {
                Ok(post) => Reply::html(200, pages::post_detail(&app.site, &post)),
                Err(e) => page_error(app, &e),
            }
        },

        _ => Reply::html(404, pages::not_found(&app.site, &format!("No page at {path}"))),
    }
}

fn page_error(app: &App, err: &ApiError) -> Reply {
    let status = match err.status_code() {
        400 | 404 => 404,
        other => other,
    };
    Reply::html(status, pages::not_found(&app.site, &err.message))
}
