pub mod domain;
pub mod ports;
pub mod services;
pub mod tutor_use_cases;
