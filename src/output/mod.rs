//! Output formatting for lookup results.
//!
//! - [`terminal`] - Section headers, pretty-printed JSON and error messages

mod terminal;

pub use terminal::{
    format_header, format_json, print_error, print_section, IP_INFO_HEADER, NETWORK_INFO_HEADER,
};
