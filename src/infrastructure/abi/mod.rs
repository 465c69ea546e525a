//! ABI infrastructure - function matching and argument decoding on alloy types

mod arguments;
mod matcher;

pub use arguments::{
    format_value, resolve_from_call_data, resolve_from_call_data_with_selector,
    resolve_from_strings, CallDataCursor, DecodeError,
};
pub use matcher::{find_by_hex_signature, find_by_text_signature};
