//! HTML rendering for every page. Every user-supplied string goes through
//! [`escape`] before it reaches the markup.

use std::fmt::Write;

use crate::{
    auth::{dto::RegisterForm, extractors::SessionUser},
    posts::{dto::PostForm, repo_types::Post},
    validation::{messages_for, FieldError},
};

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, viewer: Option<&SessionUser>, body: &str) -> String {
    let nav_right = match viewer {
        Some(user) => format!(
            r#"<span class="nav-user">{}</span> <a href="/logout">Logout</a>"#,
            escape(&user.email)
        ),
        None => r#"<a href="/login">Login</a> <a href="/register">Register</a>"#.to_string(),
    };
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<nav>
<a href="/home">Home</a> <a href="/about">About</a> <a href="/post">Post</a> {nav_right}
</nav>
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    )
}

fn field_errors(errors: &[FieldError], field: &str) -> String {
    let messages = messages_for(errors, field);
    if messages.is_empty() {
        return String::new();
    }
    let mut out = String::from(r#"<ul class="errors">"#);
    for m in messages {
        let _ = write!(out, "<li>{}</li>", escape(m));
    }
    out.push_str("</ul>");
    out
}

fn text_input(name: &str, label: &str, kind: &str, value: &str, errors: &[FieldError]) -> String {
    format!(
        r#"<p><label for="{name}">{label}</label> <input type="{kind}" id="{name}" name="{name}" value="{value}">{errs}</p>
"#,
        value = escape(value),
        errs = field_errors(errors, name),
    )
}

pub fn home(viewer: Option<&SessionUser>, posts: &[Post]) -> String {
    let mut body = String::from("<h1>Home</h1>\n");
    if posts.is_empty() {
        body.push_str(r#"<p class="empty">No posts yet.</p>"#);
    } else {
        body.push_str(r#"<ul class="posts">"#);
        for post in posts {
            let _ = write!(
                body,
                r#"<li class="post"><h2>{}</h2><p class="author">{} {}</p><p>{}</p></li>"#,
                escape(&post.title),
                escape(&post.first_name),
                escape(&post.last_name),
                escape(&post.content),
            );
        }
        body.push_str("</ul>");
    }
    layout("Home", viewer, &body)
}

pub fn about(viewer: Option<&SessionUser>) -> String {
    layout(
        "About",
        viewer,
        "<h1>About</h1>\n<p>A small blog: read what others wrote, sign in and share a post.</p>",
    )
}

pub fn login(viewer: Option<&SessionUser>, email: &str, errors: &[FieldError]) -> String {
    let mut body = String::from("<h1>Login</h1>\n");
    body.push_str(&field_errors(errors, "form"));
    body.push_str(r#"<form method="post" action="/login">"#);
    body.push('\n');
    body.push_str(&text_input("email", "Email", "email", email, errors));
    body.push_str(&text_input("password", "Password", "password", "", errors));
    body.push_str(r#"<p><button type="submit">Login</button></p></form>"#);
    layout("Login", viewer, &body)
}

pub fn register(viewer: Option<&SessionUser>, form: &RegisterForm, errors: &[FieldError]) -> String {
    let mut body = String::from("<h1>Register</h1>\n");
    body.push_str(&field_errors(errors, "form"));
    body.push_str(r#"<form method="post" action="/register">"#);
    body.push('\n');
    body.push_str(&text_input("first_name", "First name", "text", &form.first_name, errors));
    body.push_str(&text_input("last_name", "Last name", "text", &form.last_name, errors));
    body.push_str(&text_input("email", "Email", "email", &form.email, errors));
    body.push_str(&text_input("password", "Password", "password", "", errors));
    body.push_str(&text_input(
        "confirm_password",
        "Confirm password",
        "password",
        "",
        errors,
    ));
    body.push_str(r#"<p><button type="submit">Register</button></p></form>"#);
    layout("Register", viewer, &body)
}

pub fn post_form(viewer: Option<&SessionUser>, form: &PostForm, errors: &[FieldError]) -> String {
    let mut body = String::from("<h1>Post</h1>\n");
    body.push_str(r#"<form method="post" action="/post">"#);
    body.push('\n');
    body.push_str(&text_input("first_name", "First name", "text", &form.first_name, errors));
    body.push_str(&text_input("last_name", "Last name", "text", &form.last_name, errors));
    body.push_str(&text_input("title", "Title", "text", &form.title, errors));
    let _ = write!(
        body,
        r#"<p><label for="content">Content</label> <textarea id="content" name="content">{}</textarea>{}</p>
"#,
        escape(&form.content),
        field_errors(errors, "content"),
    );
    body.push_str(r#"<p><button type="submit">Post</button></p></form>"#);
    layout("Post", viewer, &body)
}
