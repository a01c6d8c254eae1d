pub mod card;
pub mod constants;
pub mod controller;
pub mod document;
pub mod entrance;
pub mod error;
pub mod events;
pub mod holo;
pub mod idle;
pub mod modal;
pub mod spread;
pub mod timers;

pub use card::{Card, CardKind, HoloSurface, SurfaceState};
pub use constants::Settings;
pub use controller::Controller;
pub use document::{Document, Scheduler, Task, TimerId};
pub use error::HoloError;
pub use events::{Binding, EventKind, Input, Target};
pub use holo::{map_pointer, CardRect, HoloState};
pub use timers::TimerTable;
