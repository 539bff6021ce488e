pub mod cancellation;
pub mod linear_congruential;
pub mod newtype_index;
pub mod time;
