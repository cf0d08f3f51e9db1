//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的对象，用于封装不可变的概念性值与校验逻辑。
//! 结构相等由 `#[value_object]` 宏派生，本模块只约束校验行为。
//!

/// 值对象抽象
pub trait ValueObject: Sized {
    /// 业务校验失败时的错误类型
    type Error;

    /// 创建值对象时进行验证
    fn validate(&self) -> Result<(), Self::Error>;

    /// 校验通过后返回自身，便于在构造函数末尾链式使用
    fn validated(self) -> Result<Self, Self::Error> {
        self.validate()?;
        Ok(self)
    }
}
