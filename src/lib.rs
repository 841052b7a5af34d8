pub mod cli;
pub mod config;
pub mod constants;
pub mod encoder;
pub mod error;
pub mod hexdump;
pub mod record;

pub use encoder::{encode, encode_record, encode_to_path, write_record};
pub use error::EncodeError;
pub use record::ConfigRecord;
