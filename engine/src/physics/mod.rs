pub mod collision_system;
pub mod movement_system;
pub mod physics_resource;
