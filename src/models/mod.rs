pub mod activity;
pub mod signup;

pub use activity::{Activity, ActivityMap};
pub use signup::SignupConfirmation;
