//! Static demo pages.

use axum::{
    http::header,
    response::{Html, IntoResponse},
};

const STYLES: &str = "\
body {
    background-color: red;
}
p {
    font-size: 2em;
}
p.myclass {
    color: blue;
}
";

/// Plain-text landing page
pub async fn index() -> &'static str {
    "HELLO WORLD!"
}

/// Small generated HTML page: a heading and a list of ten items
pub async fn html_dsl() -> Html<String> {
    Html(render_list_page(1..=10))
}

/// Stylesheet for the demo pages
pub async fn styles_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLES)
}

fn render_list_page(items: impl IntoIterator<Item = u32>) -> String {
    let list: String = items
        .into_iter()
        .map(|n| format!("<li>{n}</li>"))
        .collect();
    format!("<!DOCTYPE html>\n<html><body><h1>HTML</h1><ul>{list}</ul></body></html>\n")
}
