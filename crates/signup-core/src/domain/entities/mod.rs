pub mod form;
pub mod registration;

pub use form::SignUpForm;
pub use registration::Registration;
