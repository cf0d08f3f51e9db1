//! 订单行（Line）值对象
//!
use std::fmt;

use vo_macros::value_object;

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// 商品编码与数量组成的不可变值
///
/// 数量使用无符号整数，负数量在类型上即不可表示。
#[value_object]
#[cfg_attr(feature = "serde", serde(try_from = "LineRecord"))]
pub struct Line {
    sku: String,
    qty: u32,
}

impl Line {
    pub fn new(sku: impl Into<String>, qty: u32) -> DomainResult<Self> {
        Self {
            sku: sku.into(),
            qty,
        }
        .validated()
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn qty(&self) -> u32 {
        self.qty
    }
}

impl ValueObject for Line {
    type Error = DomainError;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.sku.trim().is_empty() {
            return Err(DomainError::invalid_value("sku must not be blank"));
        }
        Ok(())
    }
}

// 反序列化的中间形态，经 `Line::new` 校验后才成为 `Line`
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct LineRecord {
    sku: String,
    qty: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<LineRecord> for Line {
    type Error = DomainError;

    fn try_from(record: LineRecord) -> Result<Self, Self::Error> {
        Self::new(record.sku, record.qty)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x{}", self.sku, self.qty)
    }
}
