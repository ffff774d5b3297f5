pub mod floors;

pub use floors::Floor;
pub use floors::FloorRegistry;
