//! Money 值对象使用示例
//!
//! 展示金额的不可变运算与两类误用错误。
//!
//! 运行示例：
//! ```bash
//! cargo run -p vo-domain --example money_usage
//! ```

use vo_domain::error::DomainResult;
use vo_domain::money::{Currency, Money};

fn main() -> DomainResult<()> {
    println!("=== Money 值对象使用示例 ===\n");

    let gbp = Currency::parse("gbp")?;
    let fiver = Money::new(gbp.clone(), 5);
    let tenner = Money::new(gbp.clone(), 10);

    // 1. 同币种加减
    println!("1. 同币种加减");
    println!("   {} + {} = {}", fiver, fiver, (&fiver + &fiver)?);
    println!("   {} - {} = {}", tenner, fiver, (&tenner - &fiver)?);
    println!("   {} - {} = {}\n", fiver, tenner, (&fiver - &tenner)?);

    // 2. 乘以整数
    println!("2. 乘以整数");
    println!("   {} * 5 = {}\n", fiver, (&fiver * 5)?);

    // 3. 运算不改变操作数（值对象特性）
    println!("3. 运算不改变操作数");
    let _ = (&fiver + &tenner)?;
    println!("   fiver 仍然是 {}\n", fiver);

    // 4. 币种不一致
    println!("4. 币种不一致");
    let dollars = Money::parse("usd", 10)?;
    match &dollars + &tenner {
        Ok(m) => println!("   意外成功: {}", m),
        Err(e) => println!("   {} + {} -> {}\n", dollars, tenner, e),
    }

    // 5. 金额乘金额
    println!("5. 金额乘金额");
    match &tenner * &fiver {
        Ok(m) => println!("   意外成功: {}", m),
        Err(e) => println!("   {} * {} -> {}\n", tenner, fiver, e),
    }

    // 6. 累加
    println!("6. 累加");
    let items = [fiver.clone(), tenner.clone(), fiver.clone()];
    println!("   sum = {}", Money::sum(gbp, &items)?);

    Ok(())
}
