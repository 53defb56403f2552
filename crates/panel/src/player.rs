/// 音频小部件的会话内状态：记住正在播放的地址，重复点击同一首则停止
#[derive(Debug, Default, Clone)]
pub struct AudioPlayer {
    current: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Started,
    Stopped,
}

impl AudioPlayer {
    pub fn toggle(&mut self, src: &str) -> PlayerAction {
        if self.current.as_deref() == Some(src) {
            self.current = None;
            PlayerAction::Stopped
        } else {
            self.current = Some(src.to_string());
            PlayerAction::Started
        }
    }

    pub fn stop(&mut self) {
        self.current = None;
    }

    pub fn playing(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

const AUDIO_EXTS: [&str; 5] = [".mp3", ".wav", ".ogg", ".flac", ".m4a"];

/// 按扩展名判断是否音频文件
pub fn is_audio(name: &str) -> bool {
    let ext = netdisk_domain::ext_of(name).to_lowercase();
    AUDIO_EXTS.contains(&ext.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_switches_and_stops() {
        let mut player = AudioPlayer::default();
        assert_eq!(player.toggle("/home/a.mp3"), PlayerAction::Started);
        assert_eq!(player.playing(), Some("/home/a.mp3"));

        assert_eq!(player.toggle("/home/b.mp3"), PlayerAction::Started);
        assert_eq!(player.playing(), Some("/home/b.mp3"));

        assert_eq!(player.toggle("/home/b.mp3"), PlayerAction::Stopped);
        assert_eq!(player.playing(), None);
    }

    #[test]
    fn test_is_audio() {
        assert!(is_audio("song.mp3"));
        assert!(is_audio("SONG.FLAC"));
        assert!(!is_audio("a.txt"));
        assert!(!is_audio("mp3"));
    }
}
