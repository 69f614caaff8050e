pub mod error;
pub mod input;
pub mod inspect;
pub mod logger;
pub mod scan;
pub mod translate;
