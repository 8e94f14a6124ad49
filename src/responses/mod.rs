pub mod errors;
pub mod html;
pub mod redirect;
pub mod statics;

pub use errors::{error_to_response, ResultResp};
pub use html::{html_response, html_with_status};
pub use redirect::{redirect, redirect_with_cookie};
pub use statics::static_response;
