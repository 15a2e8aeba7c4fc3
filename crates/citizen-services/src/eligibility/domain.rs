use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier wrapper for registered citizens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

/// Identifier wrapper for welfare schemes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemeId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for SchemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Citizen profile evaluated against scheme criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub phone: String,
    pub age: u32,
    pub gender: Gender,
    pub occupation: Occupation,
    pub annual_income: u64,
    pub state: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const fn label(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Occupation {
    Student,
    Farmer,
    Unemployed,
    SelfEmployed,
    Salaried,
    Business,
    Retired,
    Other,
}

impl Occupation {
    pub const fn label(self) -> &'static str {
        match self {
            Occupation::Student => "student",
            Occupation::Farmer => "farmer",
            Occupation::Unemployed => "unemployed",
            Occupation::SelfEmployed => "self-employed",
            Occupation::Salaried => "salaried",
            Occupation::Business => "business",
            Occupation::Retired => "retired",
            Occupation::Other => "other",
        }
    }
}

/// Welfare scheme as published in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scheme {
    pub id: SchemeId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub ministry: String,
    #[serde(default)]
    pub benefits: String,
    pub status: SchemeStatus,
    #[serde(default)]
    pub eligibility_criteria: EligibilityCriteria,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeStatus {
    Active,
    Inactive,
    Suspended,
}

impl SchemeStatus {
    pub const fn label(self) -> &'static str {
        match self {
            SchemeStatus::Active => "active",
            SchemeStatus::Inactive => "inactive",
            SchemeStatus::Suspended => "suspended",
        }
    }
}

/// Sparse set of constraints; an unset field places no restriction of that kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<GenderRequirement>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub occupation: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_income: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_income: Option<u64>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub state: Vec<String>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub custom_criteria: Vec<String>,
}

// A `null` list places no restriction, same as an absent one.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderRequirement {
    Male,
    Female,
    All,
}

impl GenderRequirement {
    pub const fn label(self) -> &'static str {
        match self {
            GenderRequirement::Male => "male",
            GenderRequirement::Female => "female",
            GenderRequirement::All => "all",
        }
    }

    /// `None` when the requirement admits everyone.
    pub const fn restricted_to(self) -> Option<Gender> {
        match self {
            GenderRequirement::Male => Some(Gender::Male),
            GenderRequirement::Female => Some(Gender::Female),
            GenderRequirement::All => None,
        }
    }
}

/// Identity or entitlement paper held on file for a citizen. Mock data only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitizenDocument {
    pub id: String,
    pub owner: UserId,
    pub kind: DocumentKind,
    pub masked_number: String,
    pub issued_on: NaiveDate,
    pub verification: VerificationStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Aadhaar,
    Pan,
    IncomeCertificate,
    DomicileCertificate,
    BankPassbook,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Verified,
    Pending,
    Rejected,
}
