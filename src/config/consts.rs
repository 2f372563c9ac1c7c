/// Annotation or group kind that matches every kind of the same category
pub const WILDCARD: &str = "*";
/// Environment filter applied by the binary when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "stage_orderer=info";
