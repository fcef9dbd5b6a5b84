use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookEntity abstracts a title in the library together with the number of copies
// that are currently on the shelf.
#[derive(Debug, PartialEq, Clone, sqlx::FromRow)]
pub(crate) struct BookEntity {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub author_id: i64,
    pub remaining_amount: i64,
}

impl BookEntity {
    pub fn new(title: &str, description: &str, author_id: i64, remaining_amount: i64) -> Self {
        Self {
            id: 0,
            title: title.to_string(),
            description: description.to_string(),
            author_id,
            remaining_amount,
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Book for BookEntity {
    fn author_id(&self) -> i64 {
        self.author_id
    }

    fn remaining_amount(&self) -> i64 {
        self.remaining_amount
    }
}

// BookPatch carries a partial update, absent fields are left untouched.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct BookPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub author_id: Option<i64>,
    #[serde(default)]
    pub remaining_amount: Option<i64>,
}

impl BookPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
            && self.author_id.is_none() && self.remaining_amount.is_none()
    }
}
