mod actions;
mod session;

pub use actions::{Action, Outcome, Services, apply};
pub use session::{Added, MealView, Session, SessionId, SessionStore};
