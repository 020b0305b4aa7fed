//! The Trunk bundle, embedded into the binary at build time.
//!
//! Known files are served with a MIME type guessed from the extension. Any other
//! path falls back to `index.html` so the client router can resolve it, except
//! under `/api/`, where an unknown path is a plain 404.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use log::debug;
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    serve_from(&STATIC_DIR, req.path())
}

pub(crate) fn serve_from(dir: &Dir<'_>, request_path: &str) -> HttpResponse {
    let path = request_path.trim_start_matches('/');
    if path == "api" || path.starts_with("api/") {
        debug!("No API route for /{}", path);
        return HttpResponse::NotFound().body("Not Found");
    }
    let file_path = if path.is_empty() { INDEX } else { path };

    match dir.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match dir.get_file(INDEX) {
            Some(index) => {
                debug!("/{} is not a bundled asset, serving {}", path, INDEX);
                HttpResponse::Ok()
                    .content_type("text/html; charset=utf-8")
                    .body(index.contents().to_vec())
            }
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use include_dir::{DirEntry, File};

    static FILES: [DirEntry<'static>; 2] = [
        DirEntry::File(File::new("index.html", b"<html>app</html>")),
        DirEntry::File(File::new("frontend.js", b"console.log(1)")),
    ];
    static BUNDLE: Dir<'static> = Dir::new("", &FILES);

    async fn body_of(response: HttpResponse) -> String {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[actix_web::test]
    async fn root_serves_index() {
        let response = serve_from(&BUNDLE, "/");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_of(response).await, "<html>app</html>");
    }

    #[actix_web::test]
    async fn known_asset_gets_its_mime_type() {
        let response = serve_from(&BUNDLE, "/frontend.js");
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap().to_str().unwrap();
        assert!(content_type.contains("javascript"));
    }

    #[actix_web::test]
    async fn client_routes_fall_back_to_index() {
        let response = serve_from(&BUNDLE, "/tools/whatsapp-link");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_of(response).await, "<html>app</html>");
    }

    #[actix_web::test]
    async fn unknown_api_paths_are_not_rewritten() {
        let response = serve_from(&BUNDLE, "/api/nothing");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
