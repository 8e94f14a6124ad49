use astra::{Body, ResponseBuilder};

use crate::responses::ResultResp;

pub fn redirect(location: &str) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(303)
        .header("Location", location)
        .body(Body::empty())
        .expect("static response parts are valid");
    Ok(resp)
}

/// Redirect while setting (or clearing) the session cookie.
pub fn redirect_with_cookie(location: &str, cookie: &str) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(303)
        .header("Location", location)
        .header("Set-Cookie", cookie)
        .body(Body::empty())
        .expect("static response parts are valid");
    Ok(resp)
}
