pub mod describe;
pub mod join;
