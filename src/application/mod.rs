pub mod builders;
pub mod services;
pub mod translator;
