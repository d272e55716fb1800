//! Server-rendered HTML pages
//!
//! Pages are plain strings built from escaped data. The small scripts only
//! call the JSON API (login, logout, create) and reload.

use std::fmt::Write as _;

use crate::app::SiteSettings;
use crate::core::models::{MAX_SCORE, Post, PostAnalysis};

use super::chart::bar_chart_svg;

/// Stylesheet served at `/style.css`
pub const STYLE_CSS: &str = r"
* { box-sizing: border-box; }
body { margin: 0; min-height: 100vh; font-family: system-ui, sans-serif; color: #fff;
  background: linear-gradient(#4e3621, #8b4513); }
nav { display: flex; justify-content: space-between; align-items: center; padding: 1rem;
  background: #3c2f2f; box-shadow: 0 2px 8px rgba(0,0,0,.4); }
nav a.brand { color: #fff; font-size: 1.5rem; font-weight: bold; text-decoration: none; }
nav .actions { display: flex; gap: 1rem; }
.button, button { background: #6a4e42; color: #fff; border: 0; border-radius: 4px; padding: .5rem 1rem;
  font: inherit; cursor: pointer; text-decoration: none; }
.button:hover, button:hover { background: #8b5e4b; }
button.danger { background: #a0522d; }
main { max-width: 64rem; margin: 0 auto; padding: 1.5rem; }
h1 { text-align: center; }
.grid { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); }
.card, form.panel { background: #3c2f2f; border-radius: 8px; padding: 1rem; box-shadow: 0 2px 8px rgba(0,0,0,.4); }
.card a { color: #d2b48c; }
form.panel { max-width: 32rem; margin: 0 auto 2rem; }
form.panel label { display: block; margin: .75rem 0 .25rem; font-weight: 600; }
form.panel input, form.panel textarea { width: 100%; padding: .6rem; border-radius: 4px;
  border: 1px solid #8b5e4b; background: #5c4033; color: #fff; font: inherit; }
form.panel button { width: 100%; margin-top: 1rem; }
.hidden { display: none; }
.notice { text-align: center; color: #fde047; }
.error { color: #fca5a5; text-align: center; }
table { width: 100%; border-collapse: collapse; }
th, td { border: 1px solid #d1d5db; padding: .5rem 1rem; text-align: left; }
.chart-box { overflow-x: auto; margin-bottom: 2rem; }
svg.chart .bar { fill: rgba(75,192,192,.2); stroke: rgba(75,192,192,1); }
svg.chart .grid { stroke: rgba(255,255,255,.2); }
svg.chart text { fill: #fff; font-size: 11px; }
.meta { color: #d2b48c; font-size: .9rem; text-align: center; }
";

const INDEX_SCRIPT: &str = r"
const toggle = document.getElementById('login-toggle');
if (toggle) {
  toggle.addEventListener('click', () => document.getElementById('login-form').classList.toggle('hidden'));
}
const form = document.getElementById('login-form');
if (form) {
  form.addEventListener('submit', async (e) => {
    e.preventDefault();
    const res = await fetch('/api/login', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ email: form.email.value, password: form.password.value }),
    });
    if (res.ok) { location.reload(); } else { alert('Invalid credentials'); }
  });
}
const logout = document.getElementById('logout');
if (logout) {
  logout.addEventListener('click', async () => {
    await fetch('/api/logout', { method: 'POST' });
    location.reload();
  });
}
";

const CREATE_SCRIPT: &str = r"
const form = document.getElementById('create-form');
form.addEventListener('submit', async (e) => {
  e.preventDefault();
  const res = await fetch('/api/posts', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({ title: form.title.value, content: form.content.value }),
  });
  if (res.ok) {
    location.href = '/';
  } else {
    const body = await res.json().catch(() => null);
    document.getElementById('create-error').textContent =
      body && body.error ? body.error.message : 'Failed to create post';
  }
});
";

/// Escape text for use in HTML content and attribute values
///
/// # Examples
///
/// ```
/// use blogo::server::pages::escape_html;
///
/// assert_eq!(escape_html(r#"<a href="x">&</a>"#), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
/// ```
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Home page: post cards, plus admin actions or the login form
#[must_use]
pub fn index(site: &SiteSettings, posts: &[Post], is_admin: bool) -> String {
    let nav = if is_admin {
        r#"<a class="button" href="/create">Create Post</a><a class="button" href="/analysis">Post Analysis</a><button id="logout" class="danger">Logout</button>"#
    } else {
        r#"<button id="login-toggle">Admin Login</button>"#
    };

    let mut main = format!("<h1>Welcome to the {}</h1>", escape_html(&site.title));
    if is_admin {
        main.push_str(r#"<p class="notice">You are in Admin Mode.</p>"#);
    } else {
        main.push_str(
            r#"<form id="login-form" class="panel hidden"><h2>Admin Login</h2><label for="email">Email</label><input id="email" name="email" type="email" required><label for="password">Password</label><input id="password" name="password" type="password" required><button type="submit">Login</button></form>"#,
        );
    }

    if posts.is_empty() {
        main.push_str(r#"<p class="notice">No posts yet.</p>"#);
    } else {
        main.push_str(r#"<div class="grid">"#);
        for post in posts {
            let ellipsis = if post.excerpt().len() < post.content.len() { "..." } else { "" };
            let _ = write!(
                main,
                r#"<article class="card"><h2>{}</h2><p>{}{ellipsis}</p><a href="/posts/{}">Read More</a></article>"#,
                escape_html(&post.title),
                escape_html(post.excerpt()),
                post.id
            );
        }
        main.push_str("</div>");
    }

    layout(site, &site.title, nav, &main, INDEX_SCRIPT)
}

/// Single post page
#[must_use]
pub fn post_detail(site: &SiteSettings, post: &Post) -> String {
    let mut main = format!("<h1>{}</h1>", escape_html(&post.title));
    if let Ok(created) = chrono::DateTime::parse_from_rfc3339(&post.created_at) {
        let _ = write!(main, r#"<p class="meta">{}</p>"#, created.format("%B %-d, %Y"));
    }
    for paragraph in post.content.split("\n\n").filter(|p| !p.trim().is_empty()) {
        let _ = write!(main, "<p>{}</p>", escape_html(paragraph.trim()).replace('\n', "<br>"));
    }
    layout(site, &post.title, back_home(), &main, "")
}

/// Post creation form (admin only; the router redirects everyone else)
#[must_use]
pub fn create_form(site: &SiteSettings) -> String {
    let main = r#"<h1>Create New Post</h1><form id="create-form" class="panel"><label for="title">Title</label><input id="title" name="title" type="text" placeholder="Enter post title" required><label for="content">Content</label><textarea id="content" name="content" rows="6" placeholder="Enter post content" required></textarea><button type="submit">Create Post</button><p id="create-error" class="error"></p></form>"#;
    layout(site, "Create New Post", back_home(), main, CREATE_SCRIPT)
}

/// Analysis page: score chart and per-post table
#[must_use]
pub fn analysis(site: &SiteSettings, rows: &[PostAnalysis]) -> String {
    let labels: Vec<String> = rows.iter().map(|r| r.post.title.clone()).collect();
    let scores: Vec<u32> = rows.iter().map(|r| r.analysis.score).collect();

    let mut main = String::from("<h1>Post Analysis</h1>");
    if rows.is_empty() {
        main.push_str(r#"<p class="notice">No posts to analyze yet.</p>"#);
        return layout(site, "Post Analysis", back_home(), &main, "");
    }

    let _ = write!(
        main,
        r#"<div class="chart-box">{}</div>"#,
        bar_chart_svg(&labels, &scores, MAX_SCORE)
    );
    main.push_str(
        "<table><thead><tr><th>Title</th><th>Word Count</th><th>Repetitions</th><th>Score</th></tr></thead><tbody>",
    );
    for row in rows {
        let _ = write!(
            main,
            r#"<tr><td><a href="/posts/{}">{}</a></td><td>{}</td><td>{}</td><td>{}</td></tr>"#,
            row.post.id,
            escape_html(&row.post.title),
            row.analysis.total_words,
            row.analysis.repetitions,
            row.analysis.score
        );
    }
    main.push_str("</tbody></table>");

    layout(site, "Post Analysis", back_home(), &main, "")
}

/// 404 page
#[must_use]
pub fn not_found(site: &SiteSettings, message: &str) -> String {
    let main = format!(r#"<h1>Not Found</h1><p class="notice">{}</p>"#, escape_html(message));
    layout(site, "Not Found", back_home(), &main, "")
}

const fn back_home() -> &'static str {
    r#"<a class="button" href="/">Back to Home</a>"#
}

fn layout(site: &SiteSettings, title: &str, nav: &str, main: &str, script: &str) -> String {
    let mut page = format!(
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>{}</title><link rel="stylesheet" href="/style.css"></head><body><nav><a class="brand" href="/">{}</a><div class="actions">{nav}</div></nav><main>{main}</main>"#,
        escape_html(title),
        escape_html(&site.title),
    );
    if !script.is_empty() {
        page.push_str("<script>");
        page.push_str(script);
        page.push_str("</script>");
    }
    page.push_str("</body></html>");
    page
}
