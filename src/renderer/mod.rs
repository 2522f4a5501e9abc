pub mod drawing;
pub mod terminal;
