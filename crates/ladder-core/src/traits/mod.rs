mod store;

pub use store::IUserStore;
