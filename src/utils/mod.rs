mod colors;
pub use colors::{InvalidColor, Rgba, rgb, rgb_a};

mod pixels;
pub use pixels::{Px, px};
