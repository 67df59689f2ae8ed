mod context;
mod persistence;
mod store;

pub use context::WizardContext;
pub use persistence::WizardPersistence;
pub use store::{WizardStore, WizardTransaction};
