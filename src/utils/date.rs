use chrono::{NaiveDate, Utc};

pub const DATE_FMT: &str = "%Y-%m-%d";

// the calendar date borrows are issued and returned on
pub(crate) fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub mod serializer {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        date.format(DATE_FMT).to_string().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let str_date: String = Deserialize::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&str_date, DATE_FMT).map_err(D::Error::custom)
    }
}

pub mod opt_serializer {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serializer.serialize_some(&date.format(DATE_FMT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
        let str_date: Option<String> = Deserialize::deserialize(deserializer)?;
        str_date.map(|s| NaiveDate::parse_from_str(&s, DATE_FMT).map_err(D::Error::custom)).transpose()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Dated {
        #[serde(with = "crate::utils::date::serializer")]
        issued: NaiveDate,
        #[serde(default, with = "crate::utils::date::opt_serializer")]
        returned: Option<NaiveDate>,
    }

    #[tokio::test]
    async fn test_should_format_dates() {
        let dated = Dated { issued: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(), returned: None };
        let json = serde_json::to_value(&dated).unwrap();
        assert_eq!("2024-02-29", json["issued"]);
        assert!(json["returned"].is_null());
    }

    #[tokio::test]
    async fn test_should_parse_dates() {
        let dated: Dated = serde_json::from_str(r#"{"issued":"2023-04-11","returned":"2023-04-25"}"#).unwrap();
        assert_eq!(Some(NaiveDate::from_ymd_opt(2023, 4, 25).unwrap()), dated.returned);
        let missing: Dated = serde_json::from_str(r#"{"issued":"2023-04-11"}"#).unwrap();
        assert_eq!(None, missing.returned);
        assert!(serde_json::from_str::<Dated>(r#"{"issued":"11/04/2023"}"#).is_err());
    }
}
