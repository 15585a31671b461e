pub mod directory;
pub mod interface;
pub mod player;


pub use directory::VoiceDirectory;
pub use interface::{
    NullSpeechEngine, SpeechEngine, SpeechError, VoiceInfo, VoiceSettings, RATE_MAX, RATE_MIN,
};
pub use player::NarrationPlayer;
