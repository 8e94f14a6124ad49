use astra::{Body, Response, ResponseBuilder};

use crate::errors::ServerError;

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into a proper HTML response. This is the outer
/// boundary: anything a handler did not convert to page state ends here.
pub fn error_to_response(err: ServerError) -> Response {
    match err {
        ServerError::NotFound => html_error_response(404, "Página não encontrada"),
        ServerError::BadRequest(msg) => html_error_response(400, &msg),
        ServerError::Unauthorized(msg) => html_error_response(401, &msg),
        ServerError::DbError(msg) => {
            tracing::error!(error = %msg, "request failed on the store");
            html_error_response(500, "Erro interno. Por favor, tente novamente.")
        }
        ServerError::InternalError => html_error_response(500, "Erro interno. Por favor, tente novamente."),
    }
}

/// Build a bare HTML error page.
pub fn html_error_response(status: u16, message: &str) -> Response {
    let html = format!(
        "<!DOCTYPE html>
        <html lang=\"pt-BR\">
        <head><meta charset=\"utf-8\"><title>Erro {status}</title></head>
        <body>
            <h1>Erro {status}</h1>
            <p>{message}</p>
            <p><a href=\"/\">Voltar ao início</a></p>
        </body>
        </html>"
    );

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(html))
        .expect("static response parts are valid")
}
