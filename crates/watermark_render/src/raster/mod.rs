pub mod composite;
pub mod pixel;
