mod http;
mod ipinfo;

pub use ipinfo::fetch_lookup;
