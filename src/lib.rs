pub mod theme;

mod utils;
pub use utils::{InvalidColor, Px, Rgba, px, rgb, rgb_a};
