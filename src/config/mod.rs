pub mod settings;

pub use settings::{LoggingSettings, Settings, VarSettings};
