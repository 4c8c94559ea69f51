pub mod new;
pub mod validate;
