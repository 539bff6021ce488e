pub mod two_opt;
pub mod two_opt_search;
