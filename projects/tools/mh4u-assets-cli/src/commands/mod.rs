pub mod info;
pub mod model;
pub mod texture;
