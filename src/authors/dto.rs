use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// AuthorDto is the author as seen by callers of the author service.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct AuthorDto {
    pub id: i64,
    pub name: String,
    pub surname: String,
    #[serde(with = "serializer")]
    pub birth_date: NaiveDate,
}

impl AuthorDto {
    pub fn new(name: &str, surname: &str, birth_date: NaiveDate) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            surname: surname.to_string(),
            birth_date,
        }
    }
}

impl Identifiable for AuthorDto {
    fn id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::authors::dto::AuthorDto;

    #[tokio::test]
    async fn test_should_serialize_author() {
        let author = AuthorDto::new("Ursula", "Le Guin", NaiveDate::from_ymd_opt(1929, 10, 21).unwrap());
        let json = serde_json::to_value(&author).unwrap();
        assert_eq!("Ursula", json["name"]);
        assert_eq!("1929-10-21", json["birth_date"]);
    }
}
