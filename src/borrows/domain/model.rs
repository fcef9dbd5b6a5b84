use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::borrows::domain::Borrow;
use crate::core::domain::Identifiable;

// BorrowEntity is a lending record; it is open while date_of_return is null.
#[derive(Debug, PartialEq, Clone, sqlx::FromRow)]
pub(crate) struct BorrowEntity {
    pub id: i64,
    pub book_id: i64,
    pub reader_name: String,
    pub date_of_issue: NaiveDate,
    pub date_of_return: Option<NaiveDate>,
}

impl BorrowEntity {
    pub fn new(book_id: i64, reader_name: &str, date_of_issue: NaiveDate) -> Self {
        Self {
            id: 0,
            book_id,
            reader_name: reader_name.to_string(),
            date_of_issue,
            date_of_return: None,
        }
    }
}

impl Identifiable for BorrowEntity {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Borrow for BorrowEntity {
    fn book_id(&self) -> i64 {
        self.book_id
    }

    fn date_of_return(&self) -> Option<NaiveDate> {
        self.date_of_return
    }
}

// BorrowPatch carries no return date; a borrow is closed only through BorrowRepository::close.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct BorrowPatch {
    #[serde(default)]
    pub reader_name: Option<String>,
}

impl BorrowPatch {
    pub fn is_empty(&self) -> bool {
        self.reader_name.is_none()
    }
}
