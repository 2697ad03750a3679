mod reviews;

pub use reviews::*;
