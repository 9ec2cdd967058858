use actix_web::{web, HttpRequest, HttpResponse};
use include_dir::Dir;
use log::debug;
use mime_guess::from_path;

const INDEX: &str = "index.html";

/// Files of the compiled front-end, shared with every worker.
#[derive(Clone, Copy)]
pub struct Assets(pub &'static Dir<'static>);

/// Serves an embedded file by path. Paths that match no file are client-side
/// routes and get `index.html`.
pub async fn serve_embedded(req: HttpRequest, assets: web::Data<Assets>) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { INDEX } else { path };

    match assets.0.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match assets.0.get_file(INDEX) {
            Some(index) => {
                debug!("{} is not an asset, serving {}", req.path(), INDEX);
                HttpResponse::Ok()
                    .content_type("text/html; charset=utf-8")
                    .body(index.contents().to_vec())
            }
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}
