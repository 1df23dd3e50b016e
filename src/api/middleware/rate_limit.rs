//! Per-client request budgets for the bookstore API.
//!
//! Two buckets are keyed by peer IP:
//!
//! | Routes | Refill | Burst |
//! |---|---|---|
//! | catalog, downloads, stats | 2/s | 100 |
//! | `POST /api/checkout` | 1/s | 10 |
//!
//! A client over budget gets `429 Too Many Requests`. The server must be
//! started with `into_make_service_with_connect_info::<SocketAddr>()` so the
//! peer address is available.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Governor layer keyed by peer IP, as used on both route groups.
pub type PeerRateLimit =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

const BROWSE_PER_SECOND: u64 = 2;
const BROWSE_BURST: u32 = 100;

const CHECKOUT_PER_SECOND: u64 = 1;
const CHECKOUT_BURST: u32 = 10;

/// Budget for read-only routes: listings, trending, categories, downloads
/// and sales stats.
///
/// Sized so a storefront page that fans out into several catalog calls does
/// not trip the limit.
///
/// ```rust,ignore
/// let app = api::routes::public_routes().layer(rate_limit::layer());
/// ```
pub fn layer() -> PeerRateLimit {
    peer_ip_layer(BROWSE_PER_SECOND, BROWSE_BURST)
}

/// Budget for `POST /api/checkout`.
///
/// Every checkout runs card validation, so this bucket is small to slow down
/// card-number guessing.
pub fn secure_layer() -> PeerRateLimit {
    peer_ip_layer(CHECKOUT_PER_SECOND, CHECKOUT_BURST)
}

fn peer_ip_layer(per_second: u64, burst_size: u32) -> PeerRateLimit {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(per_second)
            .burst_size(burst_size)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}
