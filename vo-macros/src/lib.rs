//! 值对象与实体标识的过程宏（vo-macros）
//!
//! - `#[value_object]`：为结构体/枚举合并值语义所需的派生（结构相等）
//! - `#[entity_id]`：为单字段 tuple struct 形式的实体标识生成便捷实现
//!
use proc_macro::TokenStream;

mod derive_utils;
mod entity_id;
mod value_object;

/// 值对象宏
/// - 合并/追加派生：Debug, Clone, PartialEq, Eq, Hash
/// - 追加 `#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]`；
///   该条件按**使用宏的 crate** 的特性求值，因此使用方需自行声明 `serde` 特性
///   （并依赖 serde），未声明时不会派生，编译器会给出 `unexpected_cfgs` 提示
/// - 不接受参数
#[proc_macro_attribute]
pub fn value_object(attr: TokenStream, item: TokenStream) -> TokenStream {
    value_object::expand(attr, item)
}

/// 实体 ID 宏
/// 用于 `tuple struct` 形式的 ID 类型（例如 `struct PersonId(u64);`），
/// 自动实现 `new`、`Display`、`FromStr`、`AsRef`、`From` 等。
/// 仅支持单字段的 `tuple struct`。
#[proc_macro_attribute]
pub fn entity_id(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity_id::expand(attr, item)
}
