pub mod drawing;
pub mod modification;
