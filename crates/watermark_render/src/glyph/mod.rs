pub mod bitmap;
pub mod catalog;
pub mod font;
pub mod upscale;
