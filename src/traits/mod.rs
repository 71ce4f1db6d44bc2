pub mod camera;
pub mod movable;
pub mod placeable;
pub mod rotatable;
pub mod updateable;

pub use camera::*;
pub use movable::*;
pub use placeable::*;
pub use rotatable::*;
pub use updateable::*;
