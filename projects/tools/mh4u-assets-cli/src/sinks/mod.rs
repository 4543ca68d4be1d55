mod export;
mod obj;

pub use export::*;
