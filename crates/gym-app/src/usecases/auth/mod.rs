mod login;
mod logout;

pub use login::{LoginError, LoginUser};
pub use logout::LogoutUser;
