mod error;
mod types;
mod view_state;

pub use error::LookupError;
pub use types::{IpInfoResponse, Location, LookupResult};
pub use view_state::{LookupEvent, ViewState};
