pub mod count;
pub mod errors;
pub mod generate;
