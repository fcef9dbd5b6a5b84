pub mod borrow_book_cmd;
pub mod get_borrow_cmd;
pub mod list_borrows_cmd;
pub mod return_borrow_cmd;
