//! Landing page

use axum::response::Html;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>DailyCast</title>
</head>
<body>
  <h1>DailyCast</h1>
  <p>Daily air temperature forecast at a chosen hour, from MET Norway data.</p>
  <ul>
    <li><a href="/forecast">/forecast</a> &ndash; query parameters <code>days</code>, <code>altitude</code>, <code>latitude</code>, <code>longitude</code>, <code>time_of_day</code></li>
    <li><a href="/ping">/ping</a> &ndash; liveness</li>
    <li><a href="/ready">/ready</a> &ndash; weather provider reachability</li>
    <li><a href="/openapi.json">/openapi.json</a> &ndash; API description</li>
  </ul>
  <p>Weather data from <a href="https://api.met.no/">MET Norway</a>, licensed under CC BY 4.0.</p>
</body>
</html>
"#;

/// Static informational page
#[utoipa::path(
    get,
    path = "/",
    tag = "info",
    responses(
        (status = 200, description = "Informational HTML page", body = String, content_type = "text/html")
    )
)]
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
