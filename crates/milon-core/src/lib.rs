pub mod debounce;
pub mod preprocess;
pub mod results;
pub mod suggest;
