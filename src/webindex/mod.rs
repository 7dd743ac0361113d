/// Core index-generation logic: domain values and pure services.
pub mod domain;
pub mod services;
