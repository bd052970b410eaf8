mod login;

pub use login::admin_login_handler;
