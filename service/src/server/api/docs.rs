//! Documentation page generated from the routing table.

use std::fmt::Write;

use axum::extract::State;
use axum::response::Html;

use crate::app::AppState;
use crate::render::FormatSpec;

/// GET /
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(state.formats()))
}

fn render_index(formats: &[FormatSpec]) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>1D/2D code generator</title></head><body>\n\
         <h1>1D/2D code generator service</h1>\n<p>Available endpoints:</p>\n<ul>\n",
    );

    for spec in formats {
        // Writing to a String cannot fail.
        let _ = writeln!(
            html,
            "<li><b>{path}</b> &mdash; {desc}<br>Example: <a href=\"{ex}\">{ex}</a></li>",
            path = spec.path,
            desc = spec.description,
            ex = spec.example,
        );
    }

    html.push_str(
        "</ul>\n<p>Parameters:</p>\n<ul>\n\
         <li><b>text</b> &mdash; code content (required)</li>\n\
         <li><b>level</b> &mdash; QR error correction level from 1 to 4 (optional, default 2)</li>\n\
         <li><b>width</b> &mdash; image width in pixels (optional, default 256)</li>\n\
         <li><b>height</b> &mdash; image height in pixels (optional, default width / 2). Ignored for QR and DataMatrix</li>\n\
         </ul>\n</body></html>\n",
    );
    html
}
