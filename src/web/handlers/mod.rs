pub mod auth;
pub mod predict;
pub mod status;
