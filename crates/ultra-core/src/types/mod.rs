mod name_server;

pub use name_server::*;
