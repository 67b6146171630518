pub mod remote;
pub mod sanitize;
