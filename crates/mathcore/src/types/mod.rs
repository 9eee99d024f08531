pub mod complex;
pub mod long_int;
pub mod r#type;

pub use complex::Complex;
pub use long_int::LongInt;
pub use r#type::Type;
