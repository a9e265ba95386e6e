pub mod color;
pub mod layout;
