use std::io;
use std::process::{Command, Stdio};

use wordbook_core::AudioPlayer;

/// Plays audio by handing the URL to an external program such as `mpv`.
pub struct CommandPlayer {
    program: String,
}

impl CommandPlayer {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }
}

impl AudioPlayer for CommandPlayer {
    fn play(&self, url: &str) -> io::Result<()> {
        let status = Command::new(&self.program)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;
        if !status.success() {
            return Err(io::Error::other(format!(
                "{} exited with {status}",
                self.program
            )));
        }
        Ok(())
    }
}
