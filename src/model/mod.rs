pub mod range;
pub mod session;
