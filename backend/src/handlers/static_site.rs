use std::path::Path;

use tower_http::services::{ServeDir, ServeFile};

/// Serves the built site from `dist`. Paths that match no file get
/// `index.html` with a 200 so client-side routes like `/tips` load the app.
pub fn service(dist: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(dist).fallback(ServeFile::new(dist.join("index.html")))
}
