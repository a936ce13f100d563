//! # gorilla
//!
//! A lossless compression codec for time-series data, implementing
//! Facebook's Gorilla scheme (VLDB 2015): delta-of-delta encoding on
//! timestamps and XOR-based encoding on IEEE 754 floats, packed into a
//! bit-level inner payload and wrapped in a framed container with a
//! magic number, version, CRC32, and optional metrics-preprocessing
//! metadata.
//!
//! ## Example
//!
//! ```rust
//! use gorilla::{encode, decode, Point, EncodeOptions};
//!
//! let points = vec![
//!     Point::new(1_609_459_200, 12.0),
//!     Point::new(1_609_459_260, 12.5),
//!     Point::new(1_609_459_320, 13.0),
//! ];
//!
//! let compressed = encode(&points, EncodeOptions::default()).unwrap();
//! let decompressed = decode(&compressed).unwrap();
//! assert_eq!(points, decompressed);
//! ```
//!
//! ## Metrics preprocessing
//!
//! Counters and decimal-valued metrics compress better after a cheap
//! preprocessing pass: first-differencing monotonic counters, and
//! scaling decimal values into integers before the XOR stage.
//!
//! ```rust
//! use gorilla::{encode, decode, Point, EncodeOptions, ScaleDecimals};
//!
//! let points = vec![
//!     Point::new(0, 100.0),
//!     Point::new(1, 200.0),
//!     Point::new(2, 350.0),
//! ];
//! let opts = EncodeOptions {
//!     metrics_mode: true,
//!     is_counter: true,
//!     scale_decimals: ScaleDecimals::Auto,
//! };
//! let compressed = encode(&points, opts).unwrap();
//! let decompressed = decode(&compressed).unwrap();
//! for (a, b) in points.iter().zip(decompressed.iter()) {
//!     assert!((a.value - b.value).abs() < 1e-6);
//! }
//! ```

pub mod bitio;
pub mod codec;
pub mod crc32;
pub mod error;
pub mod frame;
pub mod inner;
pub mod preprocess;
pub mod timestamp;
pub mod value;

pub use codec::{decode, decode_with_report, encode, DecodeReport, EncodeOptions, Point};
pub use error::{DecodeError, EncodeError};
pub use preprocess::ScaleDecimals;
