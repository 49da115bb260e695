//! Terminal output helpers

mod printer;
mod table;

pub use printer::{
    notify, print_error, print_header, print_info, print_key_value, print_success, print_warning,
    Notice,
};
pub use table::truncate;
