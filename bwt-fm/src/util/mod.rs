pub mod matrix;
pub mod text;
