//! The page sections, in document order.

mod about;
pub use about::About;

mod contact;
pub use contact::Contact;

mod education;
pub use education::Education;

mod hero;
pub use hero::Hero;

mod projects;
pub use projects::Projects;

mod services;
pub use services::Services;

mod skills;
pub use skills::Skills;
