pub mod endpoint;
pub mod render;
pub mod service;
pub mod session;
pub mod surface;
