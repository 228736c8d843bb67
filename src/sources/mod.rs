pub mod bilibili;
pub mod plugin;

pub use bilibili::BilibiliSource;
pub use plugin::AudioSource;
