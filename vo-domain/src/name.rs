//! 姓名（Name）值对象
//!
use std::fmt;

use vo_macros::value_object;

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// 名与姓组成的不可变值，以两者整体判等
#[value_object]
#[cfg_attr(feature = "serde", serde(try_from = "NameRecord"))]
pub struct Name {
    first_name: String,
    surname: String,
}

impl Name {
    /// 创建姓名，名与姓均不能为空白
    ///
    /// # 示例
    ///
    /// ```
    /// use vo_domain::name::Name;
    ///
    /// let harry = Name::new("Harry", "Percival").unwrap();
    /// assert_eq!(harry, Name::new("Harry", "Percival").unwrap());
    /// assert_ne!(harry, Name::new("Bob", "Gregory").unwrap());
    /// ```
    pub fn new(first_name: impl Into<String>, surname: impl Into<String>) -> DomainResult<Self> {
        Self {
            first_name: first_name.into(),
            surname: surname.into(),
        }
        .validated()
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }
}

impl ValueObject for Name {
    type Error = DomainError;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.first_name.trim().is_empty() {
            return Err(DomainError::invalid_value("first name must not be blank"));
        }
        if self.surname.trim().is_empty() {
            return Err(DomainError::invalid_value("surname must not be blank"));
        }
        Ok(())
    }
}

// 反序列化的中间形态，经 `Name::new` 校验后才成为 `Name`
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct NameRecord {
    first_name: String,
    surname: String,
}

#[cfg(feature = "serde")]
impl TryFrom<NameRecord> for Name {
    type Error = DomainError;

    fn try_from(record: NameRecord) -> Result<Self, Self::Error> {
        Self::new(record.first_name, record.surname)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.surname)
    }
}
