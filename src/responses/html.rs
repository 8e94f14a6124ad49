use astra::{Body, Response, ResponseBuilder};
use maud::Markup;

use crate::responses::ResultResp;

pub fn html_response(markup: Markup) -> ResultResp {
    html_with_status(200, markup)
}

pub fn html_with_status(status: u16, markup: Markup) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(markup.into_string()))
        .expect("static response parts are valid");

    Ok(resp)
}
