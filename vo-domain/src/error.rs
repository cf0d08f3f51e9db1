//! 领域层统一错误定义
//!
//! 值对象的运算与构造只会因调用方误用而失败，不存在可重试的瞬时错误。
//!
use thiserror::Error;

/// 统一错误类型
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    // --- 值对象运算 ---
    #[error("currency mismatch: left={left}, right={right}")]
    CurrencyMismatch { left: String, right: String },
    #[error("type mismatch: expected={expected}, found={found}")]
    TypeMismatch { expected: String, found: String },
    #[error("arithmetic overflow: op={op}, currency={currency}")]
    Overflow { op: &'static str, currency: String },

    // --- 构造校验 ---
    #[error("invalid value: {reason}")]
    InvalidValue { reason: String },
}

impl DomainError {
    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }

    /// 是否为币种不一致导致的错误
    pub fn is_currency_mismatch(&self) -> bool {
        matches!(self, Self::CurrencyMismatch { .. })
    }

    /// 是否为操作数类型错误（例如两个金额相乘）
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
