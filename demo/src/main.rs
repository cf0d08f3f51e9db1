use anyhow::{Result, bail};
use tracing_subscriber::EnvFilter;
use vo_domain::entity::Entity;
use vo_domain::error::DomainError;
use vo_domain::line::Line;
use vo_domain::money::{Currency, Money};
use vo_domain::name::Name;
use vo_domain::person::Person;

// 日志级别通过 RUST_LOG 配置，默认 info；设为 debug 可看到被拒绝的运算
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn value_objects() -> Result<()> {
    let gbp = Currency::parse("gbp")?;
    let fiver = Money::new(gbp.clone(), 5);
    let tenner = Money::new(gbp.clone(), 10);

    let sum = (&fiver + &fiver)?;
    tracing::info!(%fiver, %sum, "fiver + fiver");
    if sum != tenner {
        bail!("expected {tenner}, got {sum}");
    }

    let diff = (&tenner - &fiver)?;
    tracing::info!(%tenner, %diff, "tenner - fiver");

    let product = (&fiver * 5)?;
    tracing::info!(%fiver, %product, "fiver * 5");

    match Money::parse("usd", 10)? + Money::parse("gbp", 10)? {
        Err(err @ DomainError::CurrencyMismatch { .. }) => {
            tracing::info!(error = %err, "usd + gbp rejected")
        }
        other => bail!("usd + gbp should be rejected, got {other:?}"),
    }

    match &tenner * &fiver {
        Err(err @ DomainError::TypeMismatch { .. }) => {
            tracing::info!(error = %err, "money * money rejected")
        }
        other => bail!("money * money should be rejected, got {other:?}"),
    }

    let line = Line::new("CHAIR-1", 5)?;
    let same = line == Line::new("CHAIR-1", 5)?;
    tracing::info!(%line, same, "line equality");
    Ok(())
}

fn entities() -> Result<()> {
    let harry = Person::new(Name::new("Harry", "Percival")?);
    let barry = harry.clone();

    barry.set_name(Name::new("Barry", "Percival")?);

    tracing::info!(
        harry = %harry.name(),
        barry = %barry.name(),
        same_person = harry.is(&barry),
        id = %harry.id(),
        "renamed through an alias"
    );

    let twin = Person::new(Name::new("Barry", "Percival")?);
    tracing::info!(
        same_name = twin.name() == harry.name(),
        same_person = twin == harry,
        "same name, different person"
    );
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();

    value_objects()?;
    entities()?;
    Ok(())
}
