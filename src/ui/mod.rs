/// UI module
///
/// Pure view builders: every function here maps state to widgets and
/// emits `Message`s; no state lives in this module.
/// - Password entry screen (gate.rs)
/// - The landing page itself (landing.rs)
/// - The magnified viewer overlay (lightbox.rs)

pub mod gate;
pub mod landing;
pub mod lightbox;
