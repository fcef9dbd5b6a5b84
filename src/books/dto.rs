use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub author_id: i64,
    pub remaining_amount: i64,
}

impl BookDto {
    pub fn new(title: &str, description: &str, author_id: i64, remaining_amount: i64) -> BookDto {
        BookDto {
            id: 0,
            title: title.to_string(),
            description: description.to_string(),
            author_id,
            remaining_amount,
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Book for BookDto {
    fn author_id(&self) -> i64 {
        self.author_id
    }

    fn remaining_amount(&self) -> i64 {
        self.remaining_amount
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> BookDto {
        BookDto {
            id: other.id,
            title: other.title.to_string(),
            description: other.description.to_string(),
            author_id: other.author_id,
            remaining_amount: other.remaining_amount,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> BookEntity {
        BookEntity {
            id: other.id,
            title: other.title.to_string(),
            description: other.description.to_string(),
            author_id: other.author_id,
            remaining_amount: other.remaining_amount,
        }
    }
}
