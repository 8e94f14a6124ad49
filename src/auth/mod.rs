pub mod sessions;
pub mod token;

pub use sessions::{
    create_session, revoke_session, session_is_live, set_admin_password, verify_admin_password,
};
