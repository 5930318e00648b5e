pub mod backend;
pub mod demo_backend;
pub mod http_backend;
pub mod registry;
pub mod router;
pub mod runner;
