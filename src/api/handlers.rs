//! Pure API handlers
//!
//! These handlers contain business logic and are HTTP-agnostic.
//! They take the app state plus typed input and return `Result<T, ApiError>`.
//! Session tokens arrive as plain `Option<&str>`; cookies are the server's job.

use chrono::Utc;

use crate::app::App;
use crate::core::models::{Analysis, NewPost, Post, Session};
use crate::core::services::AuthError;

use super::error::ApiError;
use super::types::{
    AnalysisData, AnalyzeTextRequest, ChartData, CreatePostRequest, LoginData, LoginRequest,
    MessageData, PostsData, SessionData,
};

// =============================================================================
// POSTS
// =============================================================================

/// List all posts
pub fn list_posts(app: &App) -> Result<PostsData, ApiError> {
    let posts = app.posts.list().map_err(|e| internal("Failed to fetch posts", &e))?;
    Ok(PostsData { posts })
}

/// Get a single post by id
///
/// Looks the post up by its id, so gaps in the id sequence are fine.
pub fn get_post(app: &App, id: &str) -> Result<Post, ApiError> {
    let id: u64 = id
        .trim()
        .parse()
        .map_err(|_| ApiError::bad_request(format!("Invalid post id '{id}'")))?;

    app.posts
        .get(id)
        .map_err(|e| internal("Failed to fetch post", &e))?
        .ok_or_else(|| ApiError::not_found(format!("Post {id} not found")))
}

/// Create a new post (admin only)
pub fn create_post(
    app: &App,
    token: Option<&str>,
    req: &CreatePostRequest,
) -> Result<Post, ApiError> {
    require_admin(app, token)?;

    let new = NewPost::new(req.title.as_str(), req.content.as_str());
    new.validate().map_err(|e| ApiError::bad_request(e.to_string()))?;

    let post = app.posts.create(new).map_err(|e| internal("Failed to create post", &e))?;
    log::info!("created post {} ({})", post.id, post.title);
    Ok(post)
}

// =============================================================================
// ANALYSIS
// =============================================================================

/// Analyze every post (admin only)
pub fn analyze_posts(app: &App, token: Option<&str>) -> Result<AnalysisData, ApiError> {
    require_admin(app, token)?;

    let posts = app
        .posts
        .list()
        .map_err(|e| internal("Failed to fetch and analyze posts", &e))?;
    let rows = app.analyzer.analyze_posts(posts);
    let chart = ChartData::from_rows(&rows);
    Ok(AnalysisData { posts: rows, chart })
}

/// Analyze arbitrary text
pub fn analyze_text(app: &App, req: &AnalyzeTextRequest) -> Result<Analysis, ApiError> {
    Ok(app.analyzer.analyze(&req.text))
}

// =============================================================================
// SESSIONS
// =============================================================================

/// Report whether the token belongs to a live admin session
pub fn check_session(app: &App, token: Option<&str>) -> Result<SessionData, ApiError> {
    let now = Utc::now();
    match app.auth.validate(token, now) {
        Ok(session) => Ok(SessionData {
            is_admin: true,
            expires_in: Some(session.remaining_secs(now)),
        }),
        Err(AuthError::Store(e)) => {
            Err(internal("Failed to check session", &e))
        },
        Err(_) => Ok(SessionData {
            is_admin: false,
            expires_in: None,
        }),
    }
}

/// Log in and issue a session
///
/// Returns the response body and the session whose token goes in the cookie.
pub fn login(app: &App, req: &LoginRequest) -> Result<(LoginData, Session), ApiError> {
    let session = app.auth.login(&req.email, &req.password, Utc::now())?;
    let data = LoginData {
        message: "Login successful".to_string(),
        expires_at: session.expires_at.to_rfc3339(),
    };
    Ok((data, session))
}

/// Revoke the caller's session
pub fn logout(app: &App, token: Option<&str>) -> Result<MessageData, ApiError> {
    if app.auth.logout(token)? {
        log::info!("admin logged out");
    }
    Ok(MessageData {
        message: "Logged out successfully".to_string(),
    })
}

// =============================================================================
// HELPERS
// =============================================================================

/// Fail with 401 unless the token is a live admin session
pub fn require_admin(app: &App, token: Option<&str>) -> Result<Session, ApiError> {
    Ok(app.auth.validate(token, Utc::now())?)
}

fn internal(message: &str, err: &anyhow::Error) -> ApiError {
    log::error!("{message}: {err:#}");
    ApiError::internal(message)
}
