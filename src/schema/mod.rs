pub mod conversion;
pub mod definition;
pub mod node;

pub use conversion::*;
pub use definition::*;
pub use node::*;
