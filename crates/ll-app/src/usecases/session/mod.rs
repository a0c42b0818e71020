mod logout;

pub use logout::Logout;
