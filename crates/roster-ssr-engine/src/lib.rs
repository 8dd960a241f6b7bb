//! # Roster SSR Engine
//!
//! Server-side HTML rendering for the user directory: the user list, the
//! add-user form and error pages. Every interpolated value is escaped.

use roster_config::SsrConfig;
use roster_service::{UserListResponse, UserResponse};
use std::fmt::Write;
use tracing::debug;

/// Renders the directory's HTML pages.
pub struct SsrEngine {
    config: SsrConfig,
}

impl SsrEngine {
    /// Creates a new SSR engine.
    pub fn new(config: SsrConfig) -> Self {
        Self { config }
    }

    /// Page title used on every rendered page.
    pub fn title(&self) -> &str {
        &self.config.title
    }

    /// Renders the user list with a delete form per row.
    pub fn render_index(&self, users: &UserListResponse) -> String {
        debug!("Rendering index with {} users", users.len());

        let mut body = String::new();
        body.push_str("<h1>Users</h1>\n");
        body.push_str("<p><a href=\"/add_user\">Add user</a></p>\n");

        if users.is_empty() {
            body.push_str("<p class=\"empty\">No users yet.</p>\n");
        } else {
            body.push_str("<table>\n");
            body.push_str(
                "<thead><tr><th>ID</th><th>Username</th><th>Email</th><th></th></tr></thead>\n",
            );
            body.push_str("<tbody>\n");
            for user in &users.users {
                render_user_row(&mut body, user);
            }
            body.push_str("</tbody>\n</table>\n");
        }

        self.layout(&body)
    }

    /// Renders the add-user form.
    pub fn render_add_user_form(&self) -> String {
        let body = "<h1>Add user</h1>\n\
            <form method=\"post\" action=\"/add_user\">\n\
            <label>Username <input type=\"text\" name=\"username\" required></label>\n\
            <label>Email <input type=\"email\" name=\"email\" required></label>\n\
            <button type=\"submit\">Add</button>\n\
            </form>\n\
            <p><a href=\"/\">Back to list</a></p>\n";

        self.layout(body)
    }

    /// Renders an error page for a status code and message.
    pub fn render_error(&self, status: u16, message: &str) -> String {
        let body = format!(
            "<h1>{status}</h1>\n<p class=\"error\">{}</p>\n<p><a href=\"/\">Back to list</a></p>\n",
            escape_html(message)
        );

        self.layout(&body)
    }

    fn layout(&self, body: &str) -> String {
        let title = escape_html(&self.config.title);
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>{title}</title>\n</head>\n<body>\n{body}</body>\n</html>\n"
        )
    }
}

fn render_user_row(out: &mut String, user: &UserResponse) {
    // Writing to a String cannot fail.
    let _ = write!(
        out,
        "<tr><td>{id}</td><td>{username}</td><td>{email}</td>\
         <td><form method=\"post\" action=\"/delete_user/{id}\">\
         <button type=\"submit\">Delete</button></form></td></tr>\n",
        id = user.id,
        username = escape_html(&user.username),
        email = escape_html(&user.email),
    );
}

/// Escapes text for safe inclusion in HTML content and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl std::fmt::Debug for SsrEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SsrEngine")
            .field("title", &self.config.title)
            .finish()
    }
}
