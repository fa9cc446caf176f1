use tracing::trace_span;
use tracing_subscriber::{
    EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use pgparam::Result;

mod scalar;
mod composite;
mod types;

fn main() -> Result<()> {
    tracing_subscriber::Registry::default()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    trace_span!("scalar").in_scope(scalar::main)?;
    trace_span!("composite").in_scope(composite::main)?;
    trace_span!("types").in_scope(types::main)?;

    Ok(())
}
