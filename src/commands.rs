pub mod detect;
pub mod parse;
pub mod validate;
