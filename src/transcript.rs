//! Transcription source seam.
//!
//! The flow controller only needs four things from whatever captures
//! the user's idea: permission, start, stop, and the current text.
//! On-device audio capture lives behind this trait; the CLI ships a
//! typed source where "speaking" is typing, and tests ship fakes.

use async_trait::async_trait;

/// Supplies a live text transcript with start/stop controls.
///
/// `request_permission` may suspend (platform permission dialogs); a
/// denial is a soft failure and the flow simply stays idle.
#[async_trait]
pub trait TranscriptionSource: Send {
    async fn request_permission(&mut self) -> bool;

    /// Begin a fresh capture. Discards any previous transcript.
    fn start(&mut self);

    /// End the capture. The final transcript stays readable.
    fn stop(&mut self);

    fn current_text(&self) -> String;
}

/// A transcription source fed by typed text.
#[derive(Debug, Default)]
pub struct TypedTranscript {
    text: String,
    recording: bool,
}

impl TypedTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the transcript. Ignored when not capturing, mirroring a
    /// microphone that only hears while recording.
    pub fn set_text(&mut self, text: &str) {
        if self.recording {
            self.text = text.to_string();
        }
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }
}

#[async_trait]
impl TranscriptionSource for TypedTranscript {
    async fn request_permission(&mut self) -> bool {
        // Typing needs no grant.
        true
    }

    fn start(&mut self) {
        self.text.clear();
        self.recording = true;
    }

    fn stop(&mut self) {
        self.recording = false;
    }

    fn current_text(&self) -> String {
        self.text.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn typed_transcript_round_trip() {
        let mut source = TypedTranscript::new();
        assert!(source.request_permission().await);

        source.start();
        assert!(source.is_recording());
        source.set_text("todo list app");
        source.stop();
        assert!(!source.is_recording());
        assert_eq!(source.current_text(), "todo list app");
    }

    #[test]
    fn text_is_ignored_while_not_recording() {
        let mut source = TypedTranscript::new();
        source.set_text("dropped");
        assert_eq!(source.current_text(), "");
    }

    #[test]
    fn starting_again_discards_the_previous_transcript() {
        let mut source = TypedTranscript::new();
        source.start();
        source.set_text("first idea");
        source.stop();

        source.start();
        assert_eq!(source.current_text(), "");
    }
}
