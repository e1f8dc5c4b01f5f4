mod copy_button;
mod external_link;
mod icons;
mod ip_panel;
mod spinner;

pub use copy_button::CopyButton;
pub use external_link::ExternalLink;
pub use icons::{CheckIcon, CopyIcon, LocationIcon};
pub use ip_panel::IpPanel;
pub use spinner::Spinner;
