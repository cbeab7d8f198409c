pub mod compositor;
pub mod constants;
pub mod error;
pub mod modulator;
pub mod monitor;
pub mod noise;
pub mod overlay;
pub mod pattern;
pub mod pixel;
pub mod schedule;
pub mod tear;
pub mod text;

pub use compositor::*;
pub use constants::*;
pub use error::CrtError;
pub use modulator::*;
pub use monitor::*;
pub use noise::NoiseGenerator;
pub use overlay::*;
pub use pixel::*;
pub use schedule::*;
pub use tear::*;
pub use text::*;
