//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use std::time::Duration;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Burst size per client IP.
const API_BURST: u32 = 100;

/// One token is replenished per period, so a drained bucket refills in 15 minutes.
const API_REPLENISH_PERIOD: Duration = Duration::from_secs(9);

/// Creates a rate limiter for the JSON API.
///
/// # Limits
///
/// - **Burst**: 100 requests
/// - **Rate**: 1 request per 9 seconds (about 100 per 15 minutes)
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the socket
/// peer address, so the server must be started with connect info.
pub fn api_layer()
-> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .period(API_REPLENISH_PERIOD)
            .burst_size(API_BURST)
            .finish()
            .expect("rate limit period and burst size are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
