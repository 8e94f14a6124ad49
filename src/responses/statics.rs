use std::fs;
use std::path::Path;

use astra::{Body, ResponseBuilder};

use crate::errors::ServerError;
use crate::responses::ResultResp;

/// Serve a bundled asset from the `static/` directory. The request path
/// arrives as everything after "/static/".
pub fn static_response(asset_path: &str) -> ResultResp {
    // Reject traversal before touching the filesystem.
    if asset_path.split('/').any(|seg| seg == "..") || asset_path.starts_with('/') {
        return Err(ServerError::NotFound);
    }

    let full = Path::new("static").join(asset_path);
    let bytes = fs::read(&full).map_err(|_| ServerError::NotFound)?;

    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type(asset_path).as_ref())
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(bytes))
        .expect("static response parts are valid");
    Ok(resp)
}

fn content_type(path: &str) -> mime::Mime {
    match Path::new(path).extension().and_then(|e| e.to_str()) {
        Some("css") => mime::TEXT_CSS,
        Some("js") => mime::APPLICATION_JAVASCRIPT,
        Some("jpg") | Some("jpeg") => mime::IMAGE_JPEG,
        Some("png") => mime::IMAGE_PNG,
        Some("svg") => mime::IMAGE_SVG,
        Some("ico") => "image/x-icon".parse().expect("valid mime literal"),
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}
