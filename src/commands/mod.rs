pub mod describe;
pub mod validate;
