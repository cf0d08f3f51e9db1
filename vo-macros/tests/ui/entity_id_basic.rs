use vo_macros::entity_id;

#[entity_id]
struct OrderId(u64);

#[entity_id]
struct Sku(String);

fn main() {
    let id = OrderId::new(7);
    let _ = format!("{:?}", id); // 默认派生 Debug
    assert_eq!(id.to_string(), "7");
    let raw: &u64 = id.as_ref();
    assert_eq!(*raw, 7);

    let parsed: OrderId = "7".parse().unwrap();
    assert!(parsed == id);
    assert_eq!(u64::from(parsed), 7);
    assert!(OrderId::from(8) != id);

    let sku: Sku = "CHAIR-1".to_string().into();
    let raw: &String = sku.as_ref();
    assert_eq!(raw, "CHAIR-1");
    assert!(Sku::default() == Sku::new(String::new()));
}
