//! Text rendering of the search session. Pure functions of the session state.

pub mod card;
pub mod page;

pub use page::render_session;
