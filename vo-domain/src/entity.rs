//! 实体（Entity）基础抽象
//!
//! 实体以标识区分彼此：属性变化不改变它是谁，属性相同也不意味着是同一个。
//!
use std::{fmt::Display, str::FromStr};

/// 具备唯一标识的实体抽象
pub trait Entity {
    /// 实体标识类型，要求可解析、可显示与可克隆
    type Id: FromStr + Clone + Display;

    /// 获取实体标识
    fn id(&self) -> &Self::Id;
}
