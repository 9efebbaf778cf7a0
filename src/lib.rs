pub mod basis;
pub mod canvas;
pub mod export;
pub mod resize;

pub use export::generate;
