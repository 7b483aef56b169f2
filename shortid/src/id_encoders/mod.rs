mod id_encoder;
pub use self::id_encoder::*;
mod alphabet;
pub use self::alphabet::*;
mod short_id_encoder;
pub use self::short_id_encoder::*;
