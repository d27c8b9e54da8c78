pub mod canonical;
pub mod parser;


pub use canonical::{CanonicalKey, ParamShape};
pub use parser::ParsedUrl;
