mod safe;
pub use safe::*;
