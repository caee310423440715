//! Employee record scaffolding.
//!
//! Salary and gender are the only validated fields. A rejected write keeps the
//! previous value, logs the rejection and hands the error back to the caller.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SecurityPrivileges {
    Guest,
    Developer,
    Secretary,
    #[serde(rename = "DBA")]
    Dba,
}

impl SecurityPrivileges {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Guest => "Guest",
            Self::Developer => "Developer",
            Self::Secretary => "Secretary",
            Self::Dba => "DBA",
        }
    }
}

impl fmt::Display for SecurityPrivileges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SecurityPrivileges {
    type Err = StaffError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "guest" => Ok(Self::Guest),
            "developer" => Ok(Self::Developer),
            "secretary" => Ok(Self::Secretary),
            "dba" => Ok(Self::Dba),
            _ => Err(StaffError::UnknownSecurityLevel(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "char")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn as_char(self) -> char {
        match self {
            Self::Male => 'M',
            Self::Female => 'F',
        }
    }
}

impl TryFrom<char> for Gender {
    type Error = StaffError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_ascii_uppercase() {
            'M' => Ok(Self::Male),
            'F' => Ok(Self::Female),
            _ => Err(StaffError::InvalidGender(value)),
        }
    }
}

impl From<Gender> for char {
    fn from(value: Gender) -> Self {
        value.as_char()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Day, month and year of hire. No calendar validation is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HireDate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl HireDate {
    pub const fn new(day: u32, month: u32, year: i32) -> Self {
        Self { day, month, year }
    }

    /// Returns `None` when the stored parts do not form a real calendar date.
    pub fn to_naive_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for HireDate {
    fn from(value: NaiveDate) -> Self {
        Self::new(value.day(), value.month(), value.year())
    }
}

impl fmt::Display for HireDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}-{}", self.day, self.month, self.year)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StaffError {
    #[error("salary must be a finite, non-negative amount (got {0})")]
    InvalidSalary(f64),
    #[error("gender must be 'M' or 'F' (got {0:?})")]
    InvalidGender(char),
    #[error("unknown security level '{0}' (expected guest, developer, secretary or dba)")]
    UnknownSecurityLevel(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    id: u32,
    name: String,
    security_level: SecurityPrivileges,
    salary: f64,
    hire_date: HireDate,
    gender: Gender,
}

impl Employee {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        security_level: SecurityPrivileges,
        salary: f64,
        hire_date: HireDate,
        gender: char,
    ) -> Result<Self, StaffError> {
        check_salary(salary)?;
        let gender = Gender::try_from(gender)?;
        Ok(Self {
            id,
            name: name.into(),
            security_level,
            salary,
            hire_date,
            gender,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn security_level(&self) -> SecurityPrivileges {
        self.security_level
    }

    pub fn set_security_level(&mut self, level: SecurityPrivileges) {
        self.security_level = level;
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn set_salary(&mut self, salary: f64) -> Result<(), StaffError> {
        if let Err(err) = check_salary(salary) {
            error!(employee_id = self.id, %err, "rejected salary update");
            return Err(err);
        }
        self.salary = salary;
        Ok(())
    }

    pub fn hire_date(&self) -> HireDate {
        self.hire_date
    }

    pub fn set_hire_date(&mut self, hire_date: HireDate) {
        self.hire_date = hire_date;
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn set_gender(&mut self, gender: char) -> Result<(), StaffError> {
        match Gender::try_from(gender) {
            Ok(value) => {
                self.gender = value;
                Ok(())
            }
            Err(err) => {
                error!(employee_id = self.id, %err, "rejected gender update");
                Err(err)
            }
        }
    }

    pub fn view(&self) -> EmployeeView {
        EmployeeView {
            id: self.id,
            name: self.name.clone(),
            gender: self.gender,
            security_level: self.security_level,
            salary: self.salary,
            hire_date: self.hire_date.to_string(),
        }
    }
}

fn check_salary(salary: f64) -> Result<(), StaffError> {
    // Rejects NaN and infinities along with negatives.
    if salary.is_finite() && salary >= 0.0 {
        Ok(())
    } else {
        Err(StaffError::InvalidSalary(salary))
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Employee Details:")?;
        writeln!(f, "  ID: {}", self.id)?;
        writeln!(f, "  Name: {}", self.name)?;
        writeln!(f, "  Gender: {}", self.gender)?;
        writeln!(f, "  Security Level: {}", self.security_level)?;
        writeln!(f, "  Salary: {}", format_currency(self.salary))?;
        write!(f, "  Hire Date: {}", self.hire_date)
    }
}

/// Public, serializable shape of an employee record.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeView {
    pub id: u32,
    pub name: String,
    pub gender: Gender,
    pub security_level: SecurityPrivileges,
    pub salary: f64,
    pub hire_date: String,
}

/// Formats an amount as US dollars with thousands separators, e.g. `$12,500.00`.
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, digit) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{fraction}")
}
