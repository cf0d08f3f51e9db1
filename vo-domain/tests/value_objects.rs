use anyhow::Result as AnyResult;
use proptest::prelude::*;
use vo_domain::entity::Entity;
use vo_domain::error::DomainError;
use vo_domain::line::Line;
use vo_domain::money::{Currency, Money};
use vo_domain::name::Name;
use vo_domain::person::Person;

fn gbp(value: i64) -> Money {
    Money::parse("gbp", value).unwrap()
}

#[test]
fn test_equality() -> AnyResult<()> {
    assert_eq!(Money::parse("gbp", 10)?, Money::parse("gbp", 10)?);
    assert_ne!(Name::new("Harry", "Percival")?, Name::new("Bob", "Gregory")?);
    assert_eq!(Line::new("CHAIR-1", 5)?, Line::new("CHAIR-1", 5)?);
    Ok(())
}

// ---- 值对象运算 ----

#[test]
fn test_can_add_money_values_for_the_same_currency() -> AnyResult<()> {
    let fiver = gbp(5);
    let tenner = gbp(10);
    assert_eq!((&fiver + &fiver)?, tenner);
    Ok(())
}

#[test]
fn test_can_subtract_money_value() -> AnyResult<()> {
    let fiver = gbp(5);
    let tenner = gbp(10);
    assert_eq!((&tenner - &fiver)?, fiver);
    Ok(())
}

#[test]
fn test_adding_different_currencies_fails() -> AnyResult<()> {
    let err = (Money::parse("usd", 10)? + Money::parse("gbp", 10)?).unwrap_err();
    assert!(matches!(err, DomainError::CurrencyMismatch { .. }));
    Ok(())
}

#[test]
fn test_can_multiply_money_by_a_number() -> AnyResult<()> {
    let fiver = gbp(5);
    assert_eq!((&fiver * 5)?, Money::parse("gbp", 25)?);
    Ok(())
}

#[test]
fn test_multiplying_two_money_values_is_an_error() {
    let fiver = gbp(5);
    let tenner = gbp(10);
    let err = (&tenner * &fiver).unwrap_err();
    assert!(matches!(err, DomainError::TypeMismatch { .. }));
}

// ---- 姓名与人员 ----

#[test]
fn test_name_equality() -> AnyResult<()> {
    assert_ne!(Name::new("Harry", "Percival")?, Name::new("Barry", "Percival")?);
    Ok(())
}

#[test]
fn test_barry_is_harry() -> AnyResult<()> {
    let harry = Person::new(Name::new("Harry", "Percival")?);
    let barry = harry.clone();

    barry.set_name(Name::new("Barry", "Percival")?);

    assert!(harry.is(&barry) && barry.is(&harry));
    assert_eq!(harry.name(), Name::new("Barry", "Percival")?);
    assert_eq!(harry.id(), barry.id());
    Ok(())
}

// ---- 性质测试 ----

fn currency_code() -> impl Strategy<Value = String> {
    "[a-z]{3}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn add_matches_integer_addition(c in currency_code(), x in -1_000_000_000i64..1_000_000_000, y in -1_000_000_000i64..1_000_000_000) {
        let currency = Currency::parse(&c).unwrap();
        let sum = (&Money::new(currency.clone(), x) + &Money::new(currency.clone(), y)).unwrap();
        prop_assert_eq!(sum, Money::new(currency, x + y));
    }

    #[test]
    fn sub_matches_integer_subtraction(c in currency_code(), x in -1_000_000_000i64..1_000_000_000, y in -1_000_000_000i64..1_000_000_000) {
        let currency = Currency::parse(&c).unwrap();
        let diff = (&Money::new(currency.clone(), x) - &Money::new(currency.clone(), y)).unwrap();
        prop_assert_eq!(diff, Money::new(currency, x - y));
    }

    #[test]
    fn mul_matches_integer_multiplication(c in currency_code(), x in -1_000_000i64..1_000_000, n in -1_000_000i64..1_000_000) {
        let currency = Currency::parse(&c).unwrap();
        let product = (&Money::new(currency.clone(), x) * n).unwrap();
        prop_assert_eq!(product, Money::new(currency, x * n));
    }

    #[test]
    fn different_currencies_never_mix(a in currency_code(), b in currency_code(), x in any::<i32>(), y in any::<i32>()) {
        prop_assume!(a != b);
        let left = Money::parse(&a, x as i64).unwrap();
        let right = Money::parse(&b, y as i64).unwrap();

        prop_assert!((&left + &right).unwrap_err().is_currency_mismatch());
        prop_assert!((&left - &right).unwrap_err().is_currency_mismatch());
    }

    #[test]
    fn money_times_money_is_always_type_mismatch(a in currency_code(), b in currency_code(), x in any::<i64>(), y in any::<i64>()) {
        let left = Money::parse(&a, x).unwrap();
        let right = Money::parse(&b, y).unwrap();
        prop_assert!((&left * &right).unwrap_err().is_type_mismatch());
    }
}
