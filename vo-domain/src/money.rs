//! 金额（Money）值对象
//!
//! 金额由币种与最小货币单位的整数值组成，以两者整体判等。
//! 所有运算都返回新的金额，操作数保持不变：
//! - 加减要求币种一致，否则返回 `DomainError::CurrencyMismatch`
//! - 乘法只接受整数因子；两个金额相乘返回 `DomainError::TypeMismatch`
//! - 整数溢出返回 `DomainError::Overflow`
//!
//! 运算同时提供命名方法（`checked_add/checked_sub/checked_mul`）与运算符
//! （`+`、`-`、`*`），运算符的输出为 `DomainResult<Money>`。
//!
use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use vo_macros::value_object;

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// 币种代码（例如 `gbp`、`usd`），统一规范化为小写
///
/// 反序列化同样经过 `Currency::parse`，因此 `"GBP"` 读入后即为 `gbp`。
#[value_object]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
pub struct Currency(String);

impl Currency {
    /// 解析币种代码：去除首尾空白并转为小写，要求非空且仅包含 ASCII 字母
    ///
    /// # 示例
    ///
    /// ```
    /// use vo_domain::money::Currency;
    ///
    /// let c = Currency::parse("GBP").unwrap();
    /// assert_eq!(c.code(), "gbp");
    /// assert!(Currency::parse("").is_err());
    /// ```
    pub fn parse(code: &str) -> DomainResult<Self> {
        Self(code.trim().to_ascii_lowercase()).validated()
    }

    pub fn code(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Currency {
    type Error = DomainError;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.0.is_empty() {
            return Err(DomainError::invalid_value("currency code must not be empty"));
        }
        if !self.0.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::invalid_value(format!(
                "currency code must be alphabetic: {}",
                self.0
            )));
        }
        Ok(())
    }
}

impl FromStr for Currency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = DomainError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::parse(&code)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 金额值对象
#[value_object]
pub struct Money {
    currency: Currency,
    value: i64,
}

impl Money {
    pub fn new(currency: Currency, value: i64) -> Self {
        Self { currency, value }
    }

    /// 从币种代码与数值创建金额
    ///
    /// # 示例
    ///
    /// ```
    /// use vo_domain::money::Money;
    ///
    /// let a = Money::parse("GBP", 5).unwrap();
    /// let b = Money::parse("gbp", 5).unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn parse(currency: &str, value: i64) -> DomainResult<Self> {
        Ok(Self::new(Currency::parse(currency)?, value))
    }

    pub fn zero(currency: Currency) -> Self {
        Self::new(currency, 0)
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn is_negative(&self) -> bool {
        self.value < 0
    }

    /// 同币种相加
    pub fn checked_add(&self, other: &Money) -> DomainResult<Money> {
        self.ensure_same_currency(other, "add")?;
        let value = self
            .value
            .checked_add(other.value)
            .ok_or_else(|| self.overflow("add"))?;
        tracing::trace!(
            currency = %self.currency,
            left = self.value,
            right = other.value,
            value,
            "money added"
        );
        Ok(Self::new(self.currency.clone(), value))
    }

    /// 同币种相减，结果允许为负
    pub fn checked_sub(&self, other: &Money) -> DomainResult<Money> {
        self.ensure_same_currency(other, "subtract")?;
        let value = self
            .value
            .checked_sub(other.value)
            .ok_or_else(|| self.overflow("subtract"))?;
        tracing::trace!(
            currency = %self.currency,
            left = self.value,
            right = other.value,
            value,
            "money subtracted"
        );
        Ok(Self::new(self.currency.clone(), value))
    }

    /// 乘以整数因子
    ///
    /// 因子类型固定为 `i64`：布尔值、浮点数等在编译期即被拒绝；
    /// 两个金额相乘见 `impl Mul<&Money> for &Money`，在运行期返回 `TypeMismatch`。
    pub fn checked_mul(&self, factor: i64) -> DomainResult<Money> {
        let value = self
            .value
            .checked_mul(factor)
            .ok_or_else(|| self.overflow("multiply"))?;
        tracing::trace!(
            currency = %self.currency,
            value = self.value,
            factor,
            result = value,
            "money multiplied"
        );
        Ok(Self::new(self.currency.clone(), value))
    }

    /// 取反（仅在 `i64::MIN` 时溢出）
    pub fn checked_neg(&self) -> DomainResult<Money> {
        let value = self
            .value
            .checked_neg()
            .ok_or_else(|| self.overflow("negate"))?;
        Ok(Self::new(self.currency.clone(), value))
    }

    /// 以给定币种的零值为起点累加，遇到第一个币种不一致的金额即返回错误
    ///
    /// # 示例
    ///
    /// ```
    /// use vo_domain::money::{Currency, Money};
    ///
    /// let gbp = Currency::parse("gbp").unwrap();
    /// let items = vec![Money::new(gbp.clone(), 5), Money::new(gbp.clone(), 10)];
    /// assert_eq!(Money::sum(gbp.clone(), &items).unwrap(), Money::new(gbp, 15));
    /// ```
    pub fn sum<'a, I>(currency: Currency, items: I) -> DomainResult<Money>
    where
        I: IntoIterator<Item = &'a Money>,
    {
        items
            .into_iter()
            .try_fold(Money::zero(currency), |acc, item| acc.checked_add(item))
    }

    fn ensure_same_currency(&self, other: &Money, op: &'static str) -> DomainResult<()> {
        if self.currency != other.currency {
            tracing::debug!(op, left = %self.currency, right = %other.currency, "currency mismatch");
            return Err(DomainError::CurrencyMismatch {
                left: self.currency.code().to_string(),
                right: other.currency.code().to_string(),
            });
        }
        Ok(())
    }

    fn overflow(&self, op: &'static str) -> DomainError {
        tracing::debug!(op, currency = %self.currency, value = self.value, "money overflow");
        DomainError::Overflow {
            op,
            currency: self.currency.code().to_string(),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency, self.value)
    }
}

// ---- 运算符 ----

impl Add for &Money {
    type Output = DomainResult<Money>;

    fn add(self, rhs: &Money) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl Add for Money {
    type Output = DomainResult<Money>;

    fn add(self, rhs: Money) -> Self::Output {
        self.checked_add(&rhs)
    }
}

impl Sub for &Money {
    type Output = DomainResult<Money>;

    fn sub(self, rhs: &Money) -> Self::Output {
        self.checked_sub(rhs)
    }
}

impl Sub for Money {
    type Output = DomainResult<Money>;

    fn sub(self, rhs: Money) -> Self::Output {
        self.checked_sub(&rhs)
    }
}

impl Mul<i64> for &Money {
    type Output = DomainResult<Money>;

    fn mul(self, rhs: i64) -> Self::Output {
        self.checked_mul(rhs)
    }
}

impl Mul<i64> for Money {
    type Output = DomainResult<Money>;

    fn mul(self, rhs: i64) -> Self::Output {
        self.checked_mul(rhs)
    }
}

// 金额只能乘以数量，金额乘金额没有业务含义
impl Mul<&Money> for &Money {
    type Output = DomainResult<Money>;

    fn mul(self, rhs: &Money) -> Self::Output {
        tracing::debug!(op = "multiply", left = %self, right = %rhs, "money used as factor");
        Err(DomainError::TypeMismatch {
            expected: "integer".to_string(),
            found: "Money".to_string(),
        })
    }
}

impl Mul for Money {
    type Output = DomainResult<Money>;

    fn mul(self, rhs: Money) -> Self::Output {
        &self * &rhs
    }
}
