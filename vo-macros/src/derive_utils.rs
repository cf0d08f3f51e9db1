use quote::ToTokens;
use syn::{Attribute, Token};

// 提取非 derive 属性与已有 derive 列表
pub(crate) fn split_derives(attrs: &[Attribute]) -> (Vec<Attribute>, Vec<syn::Path>) {
    let mut retained = Vec::new();
    let mut existing = Vec::new();
    for attr in attrs.iter() {
        if attr.path().is_ident("derive") {
            if let Ok(list) = attr.parse_args_with(
                syn::punctuated::Punctuated::<syn::Path, Token![,]>::parse_terminated,
            ) {
                existing.extend(list);
            }
        } else {
            retained.push(attr.clone());
        }
    }
    (retained, existing)
}

// 合并默认与已有 derive（去重，优先保留 required）
pub(crate) fn merge_derives(existing: Vec<syn::Path>, required: Vec<syn::Path>) -> Attribute {
    let mut seen = std::collections::HashSet::<String>::new();
    let mut final_list: Vec<syn::Path> = Vec::new();
    for p in required.into_iter().chain(existing) {
        if seen.insert(derive_key(&p)) {
            final_list.push(p);
        }
    }
    syn::parse_quote!(#[derive(#(#final_list),*)])
}

// 归一化 derive 的 key，避免 Serialize/serde::Serialize 重复
pub(crate) fn derive_key(p: &syn::Path) -> String {
    if let Some(last) = p.segments.last() {
        let last_ident = last.ident.to_string();
        match last_ident.as_str() {
            "Serialize" | "Deserialize" => format!("serde::{}", last_ident),
            _ => last_ident,
        }
    } else {
        p.to_token_stream().to_string()
    }
}

// 直接在 attrs 上应用默认派生合并；
// 若用户未手动派生 serde，则追加按 `serde` 特性开启的派生。
// cfg 在宏展开后的调用方 crate 中求值，调用方需声明同名特性。
pub(crate) fn apply_derives(attrs: &mut Vec<Attribute>, required: Vec<syn::Path>) {
    let (retained, existing) = split_derives(attrs);
    let has_serde = existing
        .iter()
        .any(|p| derive_key(p).starts_with("serde::"));
    let merged = merge_derives(existing, required);

    let mut out = vec![merged];
    if !has_serde {
        out.push(syn::parse_quote!(
            #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        ));
    }
    out.extend(retained);
    *attrs = out;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive_names(attr: &Attribute) -> Vec<String> {
        let list = attr
            .parse_args_with(syn::punctuated::Punctuated::<syn::Path, Token![,]>::parse_terminated)
            .unwrap();
        list.iter().map(derive_key).collect()
    }

    // 测试合并时 required 在前且去重
    #[test]
    fn merge_keeps_required_first_and_dedups() {
        let existing: Vec<syn::Path> = vec![
            syn::parse_quote!(PartialOrd),
            syn::parse_quote!(Clone),
        ];
        let required: Vec<syn::Path> = vec![syn::parse_quote!(Clone), syn::parse_quote!(Eq)];

        let merged = merge_derives(existing, required);
        assert_eq!(derive_names(&merged), vec!["Clone", "Eq", "PartialOrd"]);
    }

    // 测试 serde 派生路径归一化
    #[test]
    fn serde_paths_are_normalised() {
        let a: syn::Path = syn::parse_quote!(Serialize);
        let b: syn::Path = syn::parse_quote!(serde::Serialize);
        assert_eq!(derive_key(&a), derive_key(&b));
    }

    // 测试追加按特性开启的 serde 派生
    #[test]
    fn apply_adds_feature_gated_serde_once() {
        let mut attrs: Vec<Attribute> = vec![syn::parse_quote!(#[doc = "x"])];
        apply_derives(&mut attrs, vec![syn::parse_quote!(Debug)]);

        assert_eq!(attrs.len(), 3);
        assert!(attrs[0].path().is_ident("derive"));
        assert!(attrs[1].path().is_ident("cfg_attr"));
        assert!(attrs[2].path().is_ident("doc"));
    }

    // 测试用户已派生 serde 时不再追加
    #[test]
    fn apply_skips_serde_when_user_derives_it() {
        let mut attrs: Vec<Attribute> = vec![syn::parse_quote!(#[derive(serde::Serialize)])];
        apply_derives(&mut attrs, vec![syn::parse_quote!(Debug)]);

        assert_eq!(attrs.len(), 1);
        assert_eq!(derive_names(&attrs[0]), vec!["Debug", "serde::Serialize"]);
    }
}
