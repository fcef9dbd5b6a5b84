use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// AuthorEntity is the persisted author row; id is assigned by the store on insert.
#[derive(Debug, PartialEq, Clone, sqlx::FromRow)]
pub(crate) struct AuthorEntity {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub birth_date: NaiveDate,
}

impl AuthorEntity {
    pub fn new(name: &str, surname: &str, birth_date: NaiveDate) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            surname: surname.to_string(),
            birth_date,
        }
    }
}

impl Identifiable for AuthorEntity {
    fn id(&self) -> i64 {
        self.id
    }
}

// AuthorPatch carries a partial update, absent fields are left untouched.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct AuthorPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default, with = "crate::utils::date::opt_serializer")]
    pub birth_date: Option<NaiveDate>,
}

impl AuthorPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.surname.is_none() && self.birth_date.is_none()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::authors::domain::model::{AuthorEntity, AuthorPatch};

    #[tokio::test]
    async fn test_should_build_author() {
        let author = AuthorEntity::new("Terry", "Pratchett", NaiveDate::from_ymd_opt(1948, 4, 28).unwrap());
        assert_eq!(0, author.id);
        assert_eq!("Terry", author.name.as_str());
        assert_eq!("Pratchett", author.surname.as_str());
    }

    #[tokio::test]
    async fn test_should_parse_patch() {
        let patch: AuthorPatch = serde_json::from_str(r#"{"name":"Neil","birth_date":null}"#).unwrap();
        assert_eq!(Some("Neil".to_string()), patch.name);
        assert!(patch.birth_date.is_none());
        assert!(!patch.is_empty());
        assert!(AuthorPatch::default().is_empty());
        assert!(serde_json::from_str::<AuthorPatch>(r#"{"nickname":"x"}"#).is_err());
    }
}
