//! Public landing and documentation pages
//!
//! The documentation page is rendered inline; there is no static file
//! serving in this service.

use axum::response::Html;

/// GET / - greeting for the main page
pub async fn root() -> &'static str {
    "Welcome to the Movie Catalog API!"
}

/// GET /documentation - endpoint reference
pub async fn documentation() -> Html<&'static str> {
    Html(DOCUMENTATION_HTML)
}

const DOCUMENTATION_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Movie Catalog API</title>
  <style>
    body { font-family: sans-serif; margin: 2rem; max-width: 60rem; }
    table { border-collapse: collapse; width: 100%; }
    th, td { border: 1px solid #ccc; padding: 0.4rem 0.6rem; text-align: left; }
    code { background: #f4f4f4; padding: 0 0.2rem; }
  </style>
</head>
<body>
  <h1>Movie Catalog API</h1>
  <p>
    A REST API for movies and user accounts. Obtain a token via
    <code>POST /login</code> and send it as
    <code>Authorization: Bearer &lt;token&gt;</code> on every protected
    request. Tokens expire after 3 days.
  </p>
  <table>
    <tr><th>Method</th><th>Path</th><th>Auth</th><th>Description</th></tr>
    <tr><td>POST</td><td>/login</td><td>-</td><td>Log in with <code>{"Username", "Password"}</code>; returns the user and a token</td></tr>
    <tr><td>POST</td><td>/users</td><td>-</td><td>Register with <code>{"Username", "Password", "Email", "DOB"}</code></td></tr>
    <tr><td>GET</td><td>/movies</td><td>Bearer</td><td>List all movies</td></tr>
    <tr><td>GET</td><td>/movies/:title</td><td>Bearer</td><td>Get a movie by title</td></tr>
    <tr><td>GET</td><td>/movies/genre/:name</td><td>Bearer</td><td>Get genre info by name</td></tr>
    <tr><td>GET</td><td>/movies/director/:name</td><td>Bearer</td><td>Get director info by name</td></tr>
    <tr><td>GET</td><td>/users</td><td>Bearer</td><td>List all users</td></tr>
    <tr><td>GET</td><td>/users/:username</td><td>Bearer</td><td>Get a user by username</td></tr>
    <tr><td>PUT</td><td>/users/:username</td><td>Bearer</td><td>Update username, email, birth date or password</td></tr>
    <tr><td>DELETE</td><td>/users/:username</td><td>Bearer</td><td>Delete an account</td></tr>
    <tr><td>PATCH</td><td>/users/:username/movies/:movie_id</td><td>Bearer</td><td>Add a movie to favorites</td></tr>
    <tr><td>DELETE</td><td>/users/:username/movies/:movie_id</td><td>Bearer</td><td>Remove a movie from favorites</td></tr>
  </table>
</body>
</html>
"#;
