//! Live Resolution Integration Test
//!
//! Resolves a known address against the public registries. Requires network
//! access; endpoints default to public RPCs and can be overridden with
//! `ENS_RPC_URL`, `BASE_RPC_URL`, and `CYBER_RPC_URL`.
//!
//! ## Running
//!
//! ```bash
//! cargo test --test live_resolution -- --ignored --nocapture
//! ```

use multiname_rs::{
    parse_evm_address, GetNamesConfig, NameResolver, Namespace, ResolverConfig,
};

const OBLIQUES: &str = "0xC79E675A8Dd11fBEc7Ea1042efB6686C9DfdC57E";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,multiname_rs=debug")),
        )
        .with_test_writer()
        .try_init();
}

#[tokio::test]
#[ignore = "requires network access to public RPC endpoints"]
async fn test_live_ens_and_base() {
    init_tracing();

    let config = ResolverConfig::load().expect("valid RPC configuration");
    let resolver = NameResolver::from_config(&config);
    let address = parse_evm_address(OBLIQUES).unwrap();

    let names = resolver
        .get_names(address, &[Namespace::Ens, Namespace::Base], &GetNamesConfig::new())
        .await;

    tracing::info!(?names, "Live resolution result");

    // Every key is present regardless of outcome; names match when resolved
    assert_eq!(names.iter().count(), Namespace::ALL.len());
    if let Some(ens) = names.get(Namespace::Ens) {
        assert_eq!(ens, "obliques.eth");
    }
    if let Some(base) = names.get(Namespace::Base) {
        assert_eq!(base, "obliques.base.eth");
    }
    assert_eq!(names.get(Namespace::Cyber), None);
}

#[tokio::test]
#[ignore = "requires network access to public RPC endpoints"]
async fn test_live_outcomes_report_failures() {
    init_tracing();

    let resolver = NameResolver::mainnet();
    let address = parse_evm_address(OBLIQUES).unwrap();

    let outcomes = resolver
        .resolve_outcomes(address, &Namespace::ALL, &GetNamesConfig::new())
        .await;

    for (namespace, outcome) in &outcomes {
        tracing::info!(namespace = %namespace, ?outcome, "Live outcome");
    }
    assert_eq!(outcomes.len(), Namespace::ALL.len());
}
