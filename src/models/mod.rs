pub mod language;
pub mod record;
pub mod script;

pub use language::*;
pub use record::*;
pub use script::*;
