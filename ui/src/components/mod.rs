mod anchor_link;
pub use anchor_link::AnchorLink;

mod card;
pub use card::{ProjectCard, RevealCard};

mod contact_form;
pub use contact_form::ContactFormView;

mod site_footer;
pub use site_footer::SiteFooter;

mod site_header;
pub use site_header::SiteHeader;
