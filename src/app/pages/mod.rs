//! Routed page components.

mod contacts;
mod dashboard;
mod inbox;
mod not_found;
mod reviews;
mod whatsapp;

pub use contacts::Contacts;
pub use dashboard::Dashboard;
pub use inbox::Inbox;
pub use not_found::NotFound;
pub use reviews::Reviews;
pub use whatsapp::WhatsApp;
