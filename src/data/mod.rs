pub mod objects;

pub use objects::load_objects;
