pub mod bwt;
pub mod fm;
pub mod order;
pub mod sa;
pub mod symbol;
