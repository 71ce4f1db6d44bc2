pub mod clock;
pub mod fixed_step;

pub use clock::{Clock, FrameInfo};
pub use fixed_step::FixedStep;
