/// Image loading module
///
/// Turns validated image references into renderable iced handles.
/// Loading is fire-and-forget per reference: each slot loads on its own
/// and a failed slot falls back to the placeholder without affecting the
/// others.

pub mod loader;

use iced::widget::image::Handle;

/// One entry of the lightbox image set: the reference it was built from
/// and, once its load finishes, the renderable handle. A slot whose load
/// failed carries the fallback reference and handle instead.
#[derive(Debug, Clone)]
pub struct ImageSlot {
    pub src: String,
    pub handle: Option<Handle>,
}

impl ImageSlot {
    pub fn new(src: String) -> Self {
        ImageSlot { src, handle: None }
    }
}
