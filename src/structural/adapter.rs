// Pattern: Adapter
// The client expects `MediaPlayer::play(audio_type, file)`. The advanced
// player only offers one method per format; the adapter bridges the two.

use crate::error::{PatternError, Result};

pub trait MediaPlayer {
    fn play(&self, audio_type: &str, file_name: &str) -> Result<String>;
}

/// Third-party player with an incompatible interface.
#[derive(Debug, Default)]
pub struct AdvancedMediaPlayer;

impl AdvancedMediaPlayer {
    pub fn play_vlc(&self, file_name: &str) -> String {
        format!("Playing vlc file: {file_name}")
    }

    pub fn play_mp4(&self, file_name: &str) -> String {
        format!("Playing mp4 file: {file_name}")
    }
}

#[derive(Debug, Default)]
pub struct MediaAdapter {
    advanced_player: AdvancedMediaPlayer,
}

impl MediaAdapter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MediaPlayer for MediaAdapter {
    fn play(&self, audio_type: &str, file_name: &str) -> Result<String> {
        match audio_type {
            "vlc" => Ok(self.advanced_player.play_vlc(file_name)),
            "mp4" => Ok(self.advanced_player.play_mp4(file_name)),
            other => Err(PatternError::unsupported_format(other, file_name)),
        }
    }
}

fn client_code(player: &dyn MediaPlayer, requests: &[(&str, &str)]) {
    for (audio_type, file_name) in requests {
        match player.play(audio_type, file_name) {
            Ok(line) => println!("{line}"),
            Err(err) => crate::console::diagnostic(err),
        }
    }
}

pub fn run_demo() {
    println!("Client: I can work just fine with the MediaPlayer objects:");
    let player = MediaAdapter::new();
    client_code(
        &player,
        &[("vlc", "movie.vlc"), ("mp4", "movie.mp4"), ("avi", "movie.avi")],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_routes_by_type() {
        let player = MediaAdapter::new();
        assert_eq!(player.play("vlc", "a.vlc").unwrap(), "Playing vlc file: a.vlc");
        assert_eq!(player.play("mp4", "b.mp4").unwrap(), "Playing mp4 file: b.mp4");
    }

    #[test]
    fn test_unsupported_type_is_reported() {
        let err = MediaAdapter::new().play("avi", "c.avi").unwrap_err();
        assert_eq!(err.to_string(), "Unsupported audio type 'avi' for c.avi");
    }

    #[test]
    fn test_usable_through_trait_object() {
        let player: Box<dyn MediaPlayer> = Box::new(MediaAdapter::new());
        assert!(player.play("mp4", "x.mp4").is_ok());
    }
}
