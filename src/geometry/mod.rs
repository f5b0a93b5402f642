mod gradient;
mod point;

pub use gradient::Gradient;
pub use point::Point;
