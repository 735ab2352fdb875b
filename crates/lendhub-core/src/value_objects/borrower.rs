//! Borrower demographics and lending status

use std::fmt;

use crate::error::DomainError;

/// Borrower gender, stored as a boolean column (`false` = male)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn from_flag(flag: bool) -> Self {
        if flag {
            Self::Female
        } else {
            Self::Male
        }
    }

    pub fn as_flag(self) -> bool {
        matches!(self, Self::Female)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Laki-Laki",
            Self::Female => "Perempuan",
        }
    }
}

/// Highest completed education level, stored as a small integer (0..=4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Education {
    HighSchool,
    Diploma,
    Bachelor,
    Master,
    Doctorate,
}

impl Education {
    pub fn code(self) -> i16 {
        match self {
            Self::HighSchool => 0,
            Self::Diploma => 1,
            Self::Bachelor => 2,
            Self::Master => 3,
            Self::Doctorate => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::HighSchool => "SMA",
            Self::Diploma => "D3",
            Self::Bachelor => "S1",
            Self::Master => "S2",
            Self::Doctorate => "S3",
        }
    }
}

impl TryFrom<i16> for Education {
    type Error = DomainError;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::HighSchool),
            1 => Ok(Self::Diploma),
            2 => Ok(Self::Bachelor),
            3 => Ok(Self::Master),
            4 => Ok(Self::Doctorate),
            other => Err(DomainError::ValidationError(format!(
                "unknown education level: {other}"
            ))),
        }
    }
}

/// Marital status, stored as a boolean column (`true` = married)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaritalStatus {
    Single,
    Married,
}

impl MaritalStatus {
    pub fn from_flag(flag: bool) -> Self {
        if flag {
            Self::Married
        } else {
            Self::Single
        }
    }

    pub fn as_flag(self) -> bool {
        matches!(self, Self::Married)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Single => "Lajang",
            Self::Married => "Menikah",
        }
    }
}

/// Home ownership, stored as a boolean column (`true` = owns a house)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeOwnership {
    Renting,
    Owning,
}

impl HomeOwnership {
    pub fn from_flag(flag: bool) -> Self {
        if flag {
            Self::Owning
        } else {
            Self::Renting
        }
    }

    pub fn as_flag(self) -> bool {
        matches!(self, Self::Owning)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Renting => "Menyewa",
            Self::Owning => "Memiliki",
        }
    }
}

/// Demographic part of a lending proposal, fed to the credit predictor
#[derive(Debug, Clone, PartialEq)]
pub struct BorrowerProfile {
    pub age: i32,
    pub gender: Gender,
    pub income: f64,
    pub last_education: Education,
    pub marital_status: MaritalStatus,
    pub number_of_children: i32,
    pub home_ownership: HomeOwnership,
}

impl BorrowerProfile {
    /// Numeric feature vector understood by the prediction model.
    /// Income is floored to whole currency units.
    pub fn features(&self) -> CreditFeatures {
        CreditFeatures {
            age: i64::from(self.age),
            gender: i64::from(self.gender.as_flag()),
            income: self.income.floor() as i64,
            education: i64::from(self.last_education.code()),
            marital_status: i64::from(self.marital_status.as_flag()),
            number_of_children: i64::from(self.number_of_children),
            home_ownership: i64::from(self.home_ownership.as_flag()),
        }
    }
}

/// Input row for the credit prediction model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreditFeatures {
    pub age: i64,
    pub gender: i64,
    pub income: i64,
    pub education: i64,
    pub marital_status: i64,
    pub number_of_children: i64,
    pub home_ownership: i64,
}

/// Lending workflow status
///
/// The workflow itself only writes `pending`, `approved` and `rejected`. After a
/// payment intent is created the payment provider reports its own transaction
/// statuses (`settlement`, `expire`, ...) which are stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LendingStatus {
    Pending,
    Approved,
    Rejected,
    Provider(String),
}

impl LendingStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Provider(status) => status,
        }
    }
}

impl From<String> for LendingStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => Self::Pending,
            "approved" => Self::Approved,
            "rejected" => Self::Rejected,
            _ => Self::Provider(value),
        }
    }
}

impl fmt::Display for LendingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
