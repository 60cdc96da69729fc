pub mod analysis;
pub mod bands;
pub mod constants;
pub mod engine;
pub mod error;
pub mod page;
pub mod params;
pub mod playback;
pub mod ripple;
pub mod sounds;

pub use analysis::*;
pub use bands::*;
pub use engine::*;
pub use error::*;
pub use params::*;
pub use playback::*;
pub use ripple::*;
pub use sounds::*;
