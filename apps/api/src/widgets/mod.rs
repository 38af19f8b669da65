// Widget state: countdown timer, loading skeleton layouts, sticky action bar.
// Rendering is left to the client; these modules own the state transitions.

pub mod action_bar;
pub mod countdown;
pub mod handlers;
pub mod skeleton;
