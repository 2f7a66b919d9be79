//! REST API endpoint implementations.

mod request;
pub mod url_encoding;
pub mod variables;

pub use request::send_request;
pub use url_encoding::encode_path_segment;
pub use variables::{
    VariablePage, create_variable, delete_variable, get_variable, list_variables,
    list_variables_page, update_variable,
};
