mod achievement;
mod record;
mod snapshot;

pub use achievement::Achievement;
pub use record::{UserProfile, UserRecord};
pub use snapshot::ActivitySnapshot;
