pub mod config;
pub mod data;
pub mod ui;
pub mod util;

pub use config::Config;
pub use data::{
    AppStateStore, Booking, BookingError, BookingRepository, Database, MemoryStore,
    PersistentStore, ProfileRecord, SharedStore, StoreError, TimeSlot, UserProfile, Weekday,
};
pub use ui::App;
