pub mod client;
pub mod context;
pub mod cookies;
pub mod error;
pub mod guard;
pub mod navigation;
pub mod storage;
pub mod transport;
