mod url;

pub use url::{create_url_handler, get_url_handler};
