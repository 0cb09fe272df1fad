//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`. Module paths are hidden (`with_target(false)`); spans from the
//! `#[instrument]`ed client methods are shown inline instead.
//!
//! ```bash
//! # Lifecycle transitions only
//! RUST_LOG=info cargo run
//!
//! # Request payloads and mailbox traffic
//! RUST_LOG=debug cargo run
//!
//! # Just the HTTP layer
//! RUST_LOG=storefront_client::api=debug cargo run
//! ```
//!
//! A successful purchase at `info` reads roughly:
//!
//! ```text
//! INFO Catalog load started
//! INFO Catalog loaded count=3
//! INFO submit{product_id=ProductId(Number(Number(1)))}: Sending submit to actor
//! INFO Submission pending product_id=1 submission_id=6f1c...
//! INFO Order confirmed product_id=1 order_id=ORD-99
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
