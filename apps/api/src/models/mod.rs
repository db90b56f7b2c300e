pub mod engineer;
