//! Per-device receivers.
//!
//! Each receiver owns the policy for which raw events its channel reacts to
//! and translates them into processor calls. The engine routes every raw
//! event to exactly one receiver, so no event is ever double-handled.
//!
//! All three share the same stroke sub-machine: Idle → Active →
//! {Completed, Canceled} → Idle, with a defensive `has_stroke` re-check
//! before every move-append because a stroke may have been preempted by a
//! manipulation since the last event.

mod mouse;
mod pen;
mod touch;

pub use mouse::MouseReceiver;
pub use pen::PenReceiver;
pub use touch::TouchReceiver;
