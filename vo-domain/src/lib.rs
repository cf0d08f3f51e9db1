//! 值对象与实体建模基础库（vo-domain）
//!
//! 以两个最基础的领域建模概念为中心：
//! - 值对象（`value_object`）：没有标识，以属性值判等，不可变；
//!   例如金额 `Money`、姓名 `Name`、订单行 `Line`
//! - 实体（`entity`）：具有标识，标识在属性变化后依旧保持；
//!   例如 `Person`，两个句柄只有指向同一对象时才相等
//!
//! `Money` 是其中唯一带有业务规则的类型：加减要求币种一致，
//! 乘法只接受整数因子，违反时分别返回 `CurrencyMismatch` 与 `TypeMismatch`。
//!
//! 典型用法：
//!
//! ```
//! use vo_domain::money::{Currency, Money};
//!
//! let gbp = Currency::parse("gbp")?;
//! let fiver = Money::new(gbp.clone(), 5);
//! let tenner = Money::new(gbp.clone(), 10);
//!
//! assert_eq!((&fiver + &fiver)?, tenner);
//! assert_eq!((&tenner - &fiver)?, fiver);
//! assert_eq!((&fiver * 5)?, Money::new(gbp, 25));
//! # Ok::<(), vo_domain::error::DomainError>(())
//! ```
//!
pub mod entity;
pub mod error;
pub mod line;
pub mod money;
pub mod name;
pub mod person;
pub mod value_object;
