//! Request and response shapes shared with the auth server.

pub mod system;
