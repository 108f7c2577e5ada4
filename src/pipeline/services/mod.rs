pub mod image;

pub use self::image::{LightingClassifier, LightingService};
