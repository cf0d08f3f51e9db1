use std::collections::HashSet;

use vo_macros::value_object;

#[value_object]
struct Amount {
    currency: String,
    value: i64,
}

#[value_object]
struct Sku(String);

#[value_object]
#[derive(PartialOrd, Ord)]
enum Level {
    Low,
    High,
}

fn main() {
    // Debug 默认开启，应可格式化
    let a = Amount {
        currency: "gbp".to_string(),
        value: 5,
    };
    let _ = format!("{:?}", a);

    // Clone/PartialEq/Eq 可用，且以全部字段判等
    let b = a.clone();
    assert!(a == b);
    assert!(
        a != Amount {
            currency: "usd".to_string(),
            value: 5,
        }
    );

    // Hash 可用
    let set: HashSet<Amount> = [a, b].into_iter().collect();
    assert_eq!(set.len(), 1);

    // tuple struct 同样以值判等
    assert!(Sku("CHAIR-1".into()) == Sku("CHAIR-1".into()));
    assert!(Sku("CHAIR-1".into()) != Sku("TABLE-1".into()));

    // 用户追加的派生与默认派生合并
    assert!(Level::Low < Level::High);
}
