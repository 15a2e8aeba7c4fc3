use std::io::Read;
use std::path::Path;

use serde::de::{DeserializeOwned, IntoDeserializer};
use serde::{Deserialize, Deserializer};

use super::CatalogError;
use crate::eligibility::domain::{Gender, Occupation, User, UserId};

/// Reads citizen profiles from a CSV export for batch eligibility runs.
///
/// Expected headers: `id,name,phone,age,gender,occupation,annual_income,state`.
/// Gender and occupation are matched case-insensitively; `phone` may be blank.
pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<User>, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<User>, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut users = Vec::new();

        for record in csv_reader.deserialize::<RosterRow>() {
            users.push(record?.into_user());
        }

        Ok(users)
    }
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(deserialize_with = "non_blank")]
    id: String,
    #[serde(deserialize_with = "non_blank")]
    name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    phone: Option<String>,
    age: u32,
    #[serde(deserialize_with = "normalized_enum")]
    gender: Gender,
    #[serde(deserialize_with = "normalized_enum")]
    occupation: Occupation,
    annual_income: u64,
    #[serde(deserialize_with = "non_blank")]
    state: String,
}

impl RosterRow {
    fn into_user(self) -> User {
        User {
            id: UserId(self.id),
            name: self.name,
            phone: self.phone.unwrap_or_default(),
            age: self.age,
            gender: self.gender,
            occupation: self.occupation,
            annual_income: self.annual_income,
            state: self.state,
        }
    }
}

fn non_blank<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(serde::de::Error::custom("value must not be blank"));
    }
    Ok(trimmed.to_string())
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

// Accepts "Self Employed", "SELF-EMPLOYED" and "self-employed" alike.
fn normalized_enum<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = String::deserialize(deserializer)?;
    let normalized = raw.trim().to_ascii_lowercase().replace([' ', '_'], "-");
    T::deserialize(IntoDeserializer::<D::Error>::into_deserializer(normalized))
}
