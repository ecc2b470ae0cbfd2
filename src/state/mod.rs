/// State management module
///
/// Each state machine here is a plain struct with pure transition
/// methods; the iced update loop calls into them at the boundary and
/// nothing in this module depends on rendering:
/// - Password gate and its persisted flag (gate.rs)
/// - Lightbox open/closed/index transitions (lightbox.rs)
/// - Language selection (language.rs)

pub mod gate;
pub mod language;
pub mod lightbox;
