use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::LazyLock;
use turnstile_shared::Masked;

use crate::fare::FareCategory;

pub const PHONE_LENGTH: usize = 10;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern compiles")
});

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl FromStr for Gender {
    type Err = Violation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(Violation::Gender),
        }
    }
}

/// A single failed guest-field rule
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("Name must not be empty")]
    EmptyName,

    #[error("Age must be a whole number")]
    Age,

    #[error("Gender must be one of male, female, other")]
    Gender,

    #[error("Phone number must be 10 digits long")]
    Phone,

    #[error("Invalid email format")]
    Email,
}

/// Every rule a guest failed, in field order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", join_messages(.violations))]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn contains(&self, violation: &Violation) -> bool {
        self.violations.contains(violation)
    }
}

fn join_messages(violations: &[Violation]) -> String {
    violations.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
}

/// Raw guest fields as typed at the intake prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuestInput {
    pub name: String,
    pub age: String,
    pub phone: String,
    pub email: String,
    pub gender: String,
}

impl GuestInput {
    /// Split an intake line in `name,age,phone,email,gender` order.
    ///
    /// Returns `None` unless the line has exactly five fields, all non-empty after trimming.
    pub fn from_line(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.trim().split(',').map(str::trim).collect();
        match fields.as_slice() {
            [name, age, phone, email, gender] if fields.iter().all(|f| !f.is_empty()) => {
                Some(Self {
                    name: name.to_string(),
                    age: age.to_string(),
                    phone: phone.to_string(),
                    email: email.to_string(),
                    gender: gender.to_string(),
                })
            }
            _ => None,
        }
    }
}

/// A guest whose fields passed every rule. Only `GuestRecord::validate` builds one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestRecord {
    name: String,
    age: i64,
    gender: Gender,
    phone: Masked<String>,
    email: Masked<String>,
}

impl GuestRecord {
    /// Check every field and collect all violations rather than stopping at the first.
    pub fn validate(input: GuestInput) -> Result<Self, ValidationError> {
        let mut violations = Vec::new();

        let name = input.name.trim().to_string();
        if name.is_empty() {
            violations.push(Violation::EmptyName);
        }

        let age = input.age.trim().parse::<i64>().map_err(|_| Violation::Age);
        let gender = input.gender.trim().parse::<Gender>();

        if let Err(v) = &age {
            violations.push(v.clone());
        }
        if let Err(v) = &gender {
            violations.push(v.clone());
        }

        let phone = input.phone.trim().to_string();
        if phone.chars().count() != PHONE_LENGTH {
            violations.push(Violation::Phone);
        }

        let email = input.email.trim().to_string();
        if !EMAIL_PATTERN.is_match(&email) {
            violations.push(Violation::Email);
        }

        match (age, gender) {
            (Ok(age), Ok(gender)) if violations.is_empty() => Ok(Self {
                name,
                age,
                gender,
                phone: Masked(phone),
                email: Masked(email),
            }),
            _ => {
                tracing::debug!(count = violations.len(), "Guest details rejected");
                Err(ValidationError { violations })
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn phone(&self) -> &str {
        self.phone.expose()
    }

    pub fn email(&self) -> &str {
        self.email.expose()
    }

    /// Summary line shown on receipts and stored with the ticket: name, age, phone, email.
    pub fn details(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name,
            self.age,
            self.phone.expose(),
            self.email.expose()
        )
    }

    pub fn fare_category(&self) -> FareCategory {
        FareCategory::for_age(self.age)
    }
}
