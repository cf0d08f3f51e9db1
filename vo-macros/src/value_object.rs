use crate::derive_utils::apply_derives;
use proc_macro::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{Item, Result};

// 值对象以全部字段判等，因此不追加 Default（空值通常不是合法的值对象）
fn required_derives() -> Vec<syn::Path> {
    vec![
        syn::parse_quote!(Debug),
        syn::parse_quote!(Clone),
        syn::parse_quote!(PartialEq),
        syn::parse_quote!(Eq),
        syn::parse_quote!(Hash),
    ]
}

/// #[value_object] 宏实现
/// - 支持结构体（具名或 tuple）与枚举，不接受参数
/// - 合并/追加派生：Debug, Clone, PartialEq, Eq, Hash
/// - 追加 `cfg_attr(feature = "serde", ...)`，见 `derive_utils::apply_derives`
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    match expand_tokens(attr.into(), item.into()) {
        Ok(out) => out.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_tokens(
    attr: proc_macro2::TokenStream,
    item: proc_macro2::TokenStream,
) -> Result<proc_macro2::TokenStream> {
    if !attr.is_empty() {
        return Err(syn::Error::new(
            attr.span(),
            "#[value_object] takes no arguments",
        ));
    }

    let mut input: Item = syn::parse2(item)?;
    match &mut input {
        Item::Struct(st) => apply_derives(&mut st.attrs, required_derives()),
        Item::Enum(en) => apply_derives(&mut en.attrs, required_derives()),
        other => {
            return Err(syn::Error::new(
                other.span(),
                "#[value_object] only supports struct or enum",
            ));
        }
    }

    Ok(quote! { #input })
}
