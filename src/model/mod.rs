pub mod nested;
pub mod path;
pub mod value;

pub use nested::*;
pub use path::*;
pub use value::*;
