mod fix;
mod point;
mod turnpoint;

pub use fix::*;
pub use point::*;
pub use turnpoint::*;
