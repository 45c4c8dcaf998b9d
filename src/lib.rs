// CIE Reference Codec - Core Library
// Bank payment references for the student portal, shared by the web front end,
// the server and the CLI so all three produce identical strings.

pub mod constants;
pub mod error;
pub mod mapper;
pub mod date;
pub mod amount;
pub mod checksum;
pub mod builder;
pub mod validity;
pub mod config;
pub mod batch;

// Re-export commonly used types
pub use error::{ReferenceError, ReferenceResult};
pub use mapper::{map_char, try_map_char};
pub use date::{compress_date, compress_date_from, infer_period_token, parse_due_date};
pub use amount::{compress_amount, Amount};
pub use checksum::{
    checksum, checksum_report, checksum_with, split_reference, verify_reference,
    ChecksumReport, UnmappedChar,
};
pub use builder::{
    build_reference, ChargeKey, GeneratedReference, ReferenceBuilder, ReferenceInput,
};
pub use validity::{ReferenceStatus, Validity};
pub use config::CodecConfig;
pub use batch::{generate_from_csv, write_csv, BatchInput, BatchRow, BatchSummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
