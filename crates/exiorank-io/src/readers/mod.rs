pub mod export;

pub use export::load_export;
