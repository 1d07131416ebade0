//! Views rendered by the client-side router.

mod home;
mod layout;

pub use home::Home;
pub use layout::Wrapper;
