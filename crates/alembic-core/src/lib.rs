pub mod experiment;
pub mod lab;

// Re-export from alembic-chemistry so hosts need only one dependency
pub mod chemistry {
    pub use alembic_chemistry::*;
}
