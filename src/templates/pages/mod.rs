pub mod admin_about;
pub mod admin_properties;
pub mod admin_property_form;
pub mod home;
pub mod login;
pub mod property_details;

pub use admin_about::{admin_about_page, AboutFormVm};
pub use admin_properties::{admin_properties_page, AdminPropertiesVm};
pub use admin_property_form::{admin_property_form_page, PropertyFormValues, PropertyFormVm};
pub use home::{home_page, ContactNotice, HomeVm};
pub use login::login_page;
pub use property_details::property_details_page;
