pub mod authors;
pub mod books;
pub mod borrows;
pub mod catalog;
pub mod core;
pub mod utils;
