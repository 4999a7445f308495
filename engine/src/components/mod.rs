pub mod collider_component;
pub mod transform_component;
pub mod velocity_component;
