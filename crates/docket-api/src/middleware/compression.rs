//! Response compression layer.

use tower_http::compression::CompressionLayer;

/// Gzip compression for JSON responses (record listings grow with every
/// version).
pub fn build_compression_layer() -> CompressionLayer {
    CompressionLayer::new().gzip(true)
}
