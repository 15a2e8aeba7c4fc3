use chrono::NaiveDate;

use crate::eligibility::domain::{
    CitizenDocument, DocumentKind, EligibilityCriteria, Gender, GenderRequirement, Occupation,
    Scheme, SchemeId, SchemeStatus, User, UserId, VerificationStatus,
};

pub(super) fn users() -> Vec<User> {
    vec![
        citizen(
            "user-001",
            "Rahul Sharma",
            "9876543210",
            28,
            Gender::Male,
            Occupation::Student,
            180_000,
            "Delhi",
        ),
        citizen(
            "user-002",
            "Gurpreet Kaur",
            "9876501234",
            31,
            Gender::Female,
            Occupation::Farmer,
            150_000,
            "Punjab",
        ),
        citizen(
            "user-003",
            "Ramesh Yadav",
            "9812345678",
            65,
            Gender::Male,
            Occupation::Retired,
            100_000,
            "Uttar Pradesh",
        ),
        citizen(
            "user-004",
            "Anjali Verma",
            "9823456789",
            24,
            Gender::Female,
            Occupation::Unemployed,
            0,
            "Maharashtra",
        ),
        citizen(
            "user-005",
            "Suresh Patel",
            "9834567890",
            42,
            Gender::Male,
            Occupation::SelfEmployed,
            420_000,
            "Gujarat",
        ),
    ]
}

pub(super) fn schemes() -> Vec<Scheme> {
    vec![
        Scheme {
            id: SchemeId("pm-kisan".to_string()),
            name: "PM-KISAN Samman Nidhi".to_string(),
            description: "Income support for landholding farmer families.".to_string(),
            category: "agriculture".to_string(),
            ministry: "Ministry of Agriculture & Farmers Welfare".to_string(),
            benefits: "₹6,000 per year paid in three instalments".to_string(),
            status: SchemeStatus::Active,
            eligibility_criteria: EligibilityCriteria {
                occupation: vec!["farmer".to_string()],
                max_income: Some(500_000),
                custom_criteria: vec![
                    "Must own cultivable agricultural land".to_string(),
                    "Land records must be linked with Aadhaar".to_string(),
                ],
                ..EligibilityCriteria::default()
            },
        },
        Scheme {
            id: SchemeId("post-matric-scholarship".to_string()),
            name: "Post-Matric Scholarship".to_string(),
            description: "Tuition and maintenance support for students after class 10."
                .to_string(),
            category: "education".to_string(),
            ministry: "Ministry of Social Justice & Empowerment".to_string(),
            benefits: "Full tuition fee reimbursement and a monthly maintenance allowance"
                .to_string(),
            status: SchemeStatus::Active,
            eligibility_criteria: EligibilityCriteria {
                min_age: Some(16),
                max_age: Some(30),
                occupation: vec!["student".to_string()],
                max_income: Some(250_000),
                ..EligibilityCriteria::default()
            },
        },
        Scheme {
            id: SchemeId("old-age-pension".to_string()),
            name: "Indira Gandhi National Old Age Pension".to_string(),
            description: "Monthly pension for senior citizens from low-income households."
                .to_string(),
            category: "social-security".to_string(),
            ministry: "Ministry of Rural Development".to_string(),
            benefits: "₹200-₹500 per month depending on age".to_string(),
            status: SchemeStatus::Active,
            eligibility_criteria: EligibilityCriteria {
                min_age: Some(60),
                max_income: Some(100_000),
                ..EligibilityCriteria::default()
            },
        },
        Scheme {
            id: SchemeId("mahila-samman".to_string()),
            name: "Mahila Samman Savings Certificate".to_string(),
            description: "Small savings instrument with a preferential rate for women."
                .to_string(),
            category: "women-empowerment".to_string(),
            ministry: "Ministry of Finance".to_string(),
            benefits: "7.5% interest on deposits up to ₹2,00,000".to_string(),
            status: SchemeStatus::Active,
            eligibility_criteria: EligibilityCriteria {
                min_age: Some(18),
                gender: Some(GenderRequirement::Female),
                ..EligibilityCriteria::default()
            },
        },
        Scheme {
            id: SchemeId("pmegp".to_string()),
            name: "Prime Minister's Employment Generation Programme".to_string(),
            description: "Credit-linked subsidy for setting up micro enterprises.".to_string(),
            category: "employment".to_string(),
            ministry: "Ministry of Micro, Small & Medium Enterprises".to_string(),
            benefits: "15-35% margin money subsidy on project cost".to_string(),
            status: SchemeStatus::Active,
            eligibility_criteria: EligibilityCriteria {
                min_age: Some(18),
                gender: Some(GenderRequirement::All),
                occupation: vec!["unemployed".to_string(), "self-employed".to_string()],
                custom_criteria: vec![
                    "Project cost up to ₹50 lakh for manufacturing units".to_string(),
                ],
                ..EligibilityCriteria::default()
            },
        },
        Scheme {
            id: SchemeId("punjab-crop-residue".to_string()),
            name: "Punjab Crop Residue Management Incentive".to_string(),
            description: "Per-acre incentive for farmers who avoid stubble burning.".to_string(),
            category: "agriculture".to_string(),
            ministry: "Department of Agriculture, Government of Punjab".to_string(),
            benefits: "₹2,500 per acre".to_string(),
            status: SchemeStatus::Active,
            eligibility_criteria: EligibilityCriteria {
                occupation: vec!["farmer".to_string()],
                state: vec!["Punjab".to_string()],
                ..EligibilityCriteria::default()
            },
        },
        Scheme {
            id: SchemeId("ayushman-bharat".to_string()),
            name: "Ayushman Bharat PM-JAY".to_string(),
            description: "Hospitalisation cover for vulnerable families.".to_string(),
            category: "health".to_string(),
            ministry: "Ministry of Health & Family Welfare".to_string(),
            benefits: "Health cover of ₹5,00,000 per family per year".to_string(),
            status: SchemeStatus::Active,
            eligibility_criteria: EligibilityCriteria {
                custom_criteria: vec!["Family listed in the SECC 2011 database".to_string()],
                ..EligibilityCriteria::default()
            },
        },
        Scheme {
            id: SchemeId("indira-awaas".to_string()),
            name: "Indira Awaas Yojana".to_string(),
            description: "Rural housing grant, superseded by PMAY-G.".to_string(),
            category: "housing".to_string(),
            ministry: "Ministry of Rural Development".to_string(),
            benefits: "₹70,000 construction grant".to_string(),
            status: SchemeStatus::Inactive,
            eligibility_criteria: EligibilityCriteria {
                max_income: Some(300_000),
                ..EligibilityCriteria::default()
            },
        },
        Scheme {
            id: SchemeId("stand-up-india".to_string()),
            name: "Stand-Up India".to_string(),
            description: "Bank loans for greenfield enterprises.".to_string(),
            category: "employment".to_string(),
            ministry: "Department of Financial Services".to_string(),
            benefits: "Loans between ₹10 lakh and ₹1 crore".to_string(),
            status: SchemeStatus::Suspended,
            eligibility_criteria: EligibilityCriteria {
                min_age: Some(18),
                occupation: vec!["business".to_string(), "self-employed".to_string()],
                ..EligibilityCriteria::default()
            },
        },
    ]
}

pub(super) fn documents() -> Vec<CitizenDocument> {
    vec![
        document(
            "doc-001",
            "user-001",
            DocumentKind::Aadhaar,
            "XXXX-XXXX-4821",
            date(2015, 6, 12),
            VerificationStatus::Verified,
        ),
        document(
            "doc-002",
            "user-001",
            DocumentKind::IncomeCertificate,
            "DL/INC/2024/XXXX91",
            date(2024, 4, 2),
            VerificationStatus::Pending,
        ),
        document(
            "doc-003",
            "user-002",
            DocumentKind::Aadhaar,
            "XXXX-XXXX-1177",
            date(2013, 11, 20),
            VerificationStatus::Verified,
        ),
        document(
            "doc-004",
            "user-002",
            DocumentKind::BankPassbook,
            "XXXXXXXX6630",
            date(2019, 2, 8),
            VerificationStatus::Verified,
        ),
        document(
            "doc-005",
            "user-003",
            DocumentKind::DomicileCertificate,
            "UP/DOM/XXXX38",
            date(2008, 9, 30),
            VerificationStatus::Rejected,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn citizen(
    id: &str,
    name: &str,
    phone: &str,
    age: u32,
    gender: Gender,
    occupation: Occupation,
    annual_income: u64,
    state: &str,
) -> User {
    User {
        id: UserId(id.to_string()),
        name: name.to_string(),
        phone: phone.to_string(),
        age,
        gender,
        occupation,
        annual_income,
        state: state.to_string(),
    }
}

fn document(
    id: &str,
    owner: &str,
    kind: DocumentKind,
    masked_number: &str,
    issued_on: NaiveDate,
    verification: VerificationStatus,
) -> CitizenDocument {
    CitizenDocument {
        id: id.to_string(),
        owner: UserId(owner.to_string()),
        kind,
        masked_number: masked_number.to_string(),
        issued_on,
        verification,
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}
