pub mod config;
pub mod id_encoders;
pub mod normalize;
pub mod utils;
