pub mod pool;
pub mod send;
pub mod swap;
