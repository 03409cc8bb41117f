pub mod repositories;
pub mod transform;
