mod certificates;

pub use certificates::*;
