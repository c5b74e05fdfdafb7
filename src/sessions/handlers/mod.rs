pub mod http;
pub mod requests;
pub mod responses;
pub mod session;
pub mod view_actions;
