pub mod chat;
pub mod inference;
pub mod media;
pub(crate) mod utils;

pub use chat::{ChatMessage, Role};
pub use inference::{DEFAULT_MODEL, GITHUB_MODELS_ENDPOINT, InferenceClient};
pub use media::MediaFile;
