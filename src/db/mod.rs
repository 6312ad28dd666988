mod pool;

pub use pool::{check_connection, create_pool};
