use iced::keyboard::{self, key};
use iced::widget::image::Handle;
use iced::{Element, Subscription, Task, Theme};

// Declare the application modules
mod config;
mod content;
mod gallery;
mod images;
mod links;
mod state;
mod storage;
mod ui;

use config::{AppConfig, Flags};
use images::loader::{self, LoadError};
use images::ImageSlot;
use state::gate::AccessGate;
use state::language::Language;
use state::lightbox::Lightbox;
use storage::{FileStore, KvStore, MemoryStore};

/// Main application state
pub struct EstateApp {
    /// Listing configuration (copy defaults, references, password)
    config: AppConfig,
    /// Durable flag store backing the gate's "remember me" behavior
    store: Box<dyn KvStore>,
    /// Password gate; the landing page only renders once it is open
    gate: AccessGate,
    /// Current contents of the password field
    password_input: String,
    /// Which content bundle is rendered
    language: Language,
    /// Magnified viewer state
    lightbox: Lightbox,
    /// Lightbox image set: validated hero at slot 0, gallery after it
    slots: Vec<ImageSlot>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User edited the password field
    PasswordChanged(String),
    /// User submitted the password form
    PasswordSubmitted,
    /// User picked a language in the header switcher
    LanguagePicked(Language),
    /// A hero/gallery image was clicked; open the viewer at this slot
    OpenLightbox(usize),
    CloseLightbox,
    NextImage,
    PreviousImage,
    /// A thumbnail in the viewer strip was clicked
    JumpTo(usize),
    /// Background load for one slot finished
    ImageLoaded {
        slot: usize,
        result: Result<Handle, LoadError>,
    },
    /// Contact button: copy the mailto link to the clipboard
    ContactPressed,
    /// Secondary "learn more" button; only acknowledges the interest
    LearnMorePressed,
}

impl EstateApp {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let flags = Flags::from_env();
        let config = AppConfig::load();

        let store: Box<dyn KvStore> = match FileStore::open_default() {
            Ok(store) => Box::new(store),
            Err(error) => {
                eprintln!("⚠️  Flag store unavailable, gate will ask again next session: {}", error);
                Box::new(MemoryStore::default())
            }
        };
        let gate = AccessGate::from_store(store.as_ref());

        let hero = config.effective_hero(&flags).unwrap_or_default();
        let gallery = gallery::gallery_list(config.gallery_urls.clone());
        let slots: Vec<ImageSlot> = gallery::lightbox_refs(&hero, &gallery)
            .into_iter()
            .map(ImageSlot::new)
            .collect();

        println!("♨️  Hot Spring Estate LP initialized with {} photos", slots.len());

        let app = EstateApp {
            language: config.initial_language,
            config,
            store,
            gate,
            password_input: String::new(),
            lightbox: Lightbox::new(),
            slots,
            status: String::new(),
        };

        // A returning visitor skips the gate, so start loading right away.
        let task = if app.gate.unlocked() {
            app.load_all_images()
        } else {
            Task::none()
        };

        (app, task)
    }

    /// Fire-and-forget load for every slot. Results come back one
    /// `ImageLoaded` message at a time, in whatever order they finish.
    fn load_all_images(&self) -> Task<Message> {
        Task::batch(self.slots.iter().enumerate().map(|(slot, entry)| {
            Task::perform(loader::load_image(entry.src.clone()), move |result| {
                Message::ImageLoaded { slot, result }
            })
        }))
    }

    fn loaded_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.handle.is_some()).count()
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PasswordChanged(value) => {
                self.password_input = value;
                Task::none()
            }
            Message::PasswordSubmitted => {
                let was_unlocked = self.gate.unlocked();
                let passed = self.gate.submit(
                    &self.password_input,
                    &self.config.access_password,
                    self.store.as_mut(),
                );
                if passed && !was_unlocked {
                    self.password_input.clear();
                    self.status = format!("Loading {} photos...", self.slots.len());
                    return self.load_all_images();
                }
                Task::none()
            }
            Message::LanguagePicked(language) => {
                self.language = language;
                Task::none()
            }
            Message::OpenLightbox(slot) => {
                self.lightbox.open(slot, self.slots.len());
                Task::none()
            }
            Message::CloseLightbox => {
                self.lightbox.close();
                Task::none()
            }
            Message::NextImage => {
                self.lightbox.next(self.slots.len());
                Task::none()
            }
            Message::PreviousImage => {
                self.lightbox.previous(self.slots.len());
                Task::none()
            }
            Message::JumpTo(slot) => {
                self.lightbox.jump_to(slot, self.slots.len());
                Task::none()
            }
            Message::ImageLoaded { slot, result } => {
                if let Some(entry) = self.slots.get_mut(slot) {
                    match result {
                        Ok(handle) => {
                            entry.handle = Some(handle);
                        }
                        Err(error) => {
                            // Local, silent recovery: only this slot is
                            // swapped for the placeholder, never retried.
                            eprintln!("⚠️  Photo {} failed ({}), using placeholder", entry.src, error);
                            entry.src = gallery::FALLBACK_IMAGE_REF.to_string();
                            entry.handle = Some(loader::fallback_handle());
                        }
                    }
                    self.status =
                        format!("{} / {} photos ready", self.loaded_count(), self.slots.len());
                }
                Task::none()
            }
            Message::ContactPressed => {
                let link = links::mailto_link(&self.config.contact_email, content::CONTACT_SUBJECT);
                self.status = format!("📋 Copied {}", link);
                iced::clipboard::write(link)
            }
            Message::LearnMorePressed => {
                // The original page only acknowledged the click here;
                // point the visitor at the brochure instead.
                self.status = format!(
                    "📝 {}",
                    content::for_language(self.language).contact_cta
                );
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        if !self.gate.unlocked() {
            return ui::gate::view(&self.password_input, self.gate.rejected());
        }

        let landing = ui::landing::view(self);
        if self.lightbox.is_open() {
            ui::lightbox::overlay(landing, self)
        } else {
            landing
        }
    }

    /// Keyboard bindings for the viewer. Only registered while the
    /// overlay is open; when it closes the subscription drops and no
    /// listener lingers.
    fn subscription(&self) -> Subscription<Message> {
        if !self.lightbox.is_open() {
            return Subscription::none();
        }
        keyboard::on_key_press(|pressed, _modifiers| match pressed {
            keyboard::Key::Named(key::Named::Escape) => Some(Message::CloseLightbox),
            keyboard::Key::Named(key::Named::ArrowLeft) => Some(Message::PreviousImage),
            keyboard::Key::Named(key::Named::ArrowRight) => Some(Message::NextImage),
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::FALLBACK_IMAGE_REF;

    /// App with a two-slot image set (hero + one gallery photo) and an
    /// in-memory flag store, past the gate.
    fn app_with_two_slots() -> EstateApp {
        let mut store = MemoryStore::default();
        let mut gate = AccessGate::from_store(&store);
        gate.submit("onsen2525", "onsen2525", &mut store);
        EstateApp {
            config: AppConfig::default(),
            store: Box::new(store),
            gate,
            password_input: String::new(),
            language: Language::Japanese,
            lightbox: Lightbox::new(),
            slots: vec![
                ImageSlot::new("/images/hero.jpg".to_string()),
                ImageSlot::new("/images/g1.jpg".to_string()),
            ],
            status: String::new(),
        }
    }

    #[test]
    fn test_failed_load_swaps_only_that_slot_for_the_placeholder() {
        let mut app = app_with_two_slots();

        let _ = app.update(Message::ImageLoaded {
            slot: 1,
            result: Err(LoadError::Io(
                "/images/g1.jpg".to_string(),
                "No such file or directory".to_string(),
            )),
        });

        // The failed slot now carries the fallback reference and a
        // renderable handle.
        assert_eq!(app.slots[1].src, FALLBACK_IMAGE_REF);
        assert!(app.slots[1].handle.is_some());
        // The hero slot is untouched.
        assert_eq!(app.slots[0].src, "/images/hero.jpg");
        assert!(app.slots[0].handle.is_none());
    }

    #[test]
    fn test_successful_load_keeps_the_original_reference() {
        let mut app = app_with_two_slots();

        let _ = app.update(Message::ImageLoaded {
            slot: 0,
            result: Ok(loader::fallback_handle()),
        });

        assert_eq!(app.slots[0].src, "/images/hero.jpg");
        assert!(app.slots[0].handle.is_some());
        assert_eq!(app.status, "1 / 2 photos ready");
    }

    #[test]
    fn test_lightbox_opens_before_any_photo_finishes_loading() {
        let mut app = app_with_two_slots();
        assert!(app.slots.iter().all(|slot| slot.handle.is_none()));

        let _ = app.update(Message::OpenLightbox(0));

        assert!(app.lightbox.is_open());
        assert_eq!(app.lightbox.index(), 0);
    }

    #[test]
    fn test_learn_more_notes_the_localized_cta() {
        let mut app = app_with_two_slots();
        let _ = app.update(Message::LanguagePicked(Language::English));
        let _ = app.update(Message::LearnMorePressed);
        assert!(app
            .status
            .contains(content::for_language(Language::English).contact_cta));
    }

    #[test]
    fn test_out_of_range_slot_is_ignored() {
        let mut app = app_with_two_slots();
        let _ = app.update(Message::ImageLoaded {
            slot: 9,
            result: Ok(loader::fallback_handle()),
        });
        assert!(app.slots.iter().all(|slot| slot.handle.is_none()));
    }
}

fn main() -> iced::Result {
    iced::application(
        "Hot Spring Estate — Owner Direct",
        EstateApp::update,
        EstateApp::view,
    )
    .theme(EstateApp::theme)
    .subscription(EstateApp::subscription)
    .window_size(iced::Size::new(1180.0, 800.0))
    .centered()
    .run_with(EstateApp::new)
}
