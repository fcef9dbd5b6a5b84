use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::borrows::domain::Borrow;
use crate::borrows::domain::model::BorrowEntity;
use crate::core::domain::Identifiable;
use crate::utils::date::{opt_serializer, serializer};

// BorrowDto is a data transfer object for the borrow service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BorrowDto {
    pub id: i64,
    pub book_id: i64,
    pub reader_name: String,
    #[serde(with = "serializer")]
    pub date_of_issue: NaiveDate,
    #[serde(default, with = "opt_serializer", skip_serializing_if = "Option::is_none")]
    pub date_of_return: Option<NaiveDate>,
}

impl BorrowDto {
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

impl Identifiable for BorrowDto {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Borrow for BorrowDto {
    fn book_id(&self) -> i64 {
        self.book_id
    }

    fn date_of_return(&self) -> Option<NaiveDate> {
        self.date_of_return
    }
}

impl From<&BorrowEntity> for BorrowDto {
    fn from(other: &BorrowEntity) -> BorrowDto {
        BorrowDto {
            id: other.id,
            book_id: other.book_id,
            reader_name: other.reader_name.to_string(),
            date_of_issue: other.date_of_issue,
            date_of_return: other.date_of_return,
        }
    }
}

impl From<&BorrowDto> for BorrowEntity {
    fn from(other: &BorrowDto) -> BorrowEntity {
        BorrowEntity {
            id: other.id,
            book_id: other.book_id,
            reader_name: other.reader_name.to_string(),
            date_of_issue: other.date_of_issue,
            date_of_return: other.date_of_return,
        }
    }
}
