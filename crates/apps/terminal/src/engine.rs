//! Headless interpreter and transcript for the novelty terminal.

/// First transcript line of every new terminal window.
pub const WELCOME_BANNER: &str = "Welcome to BabyWen Terminal.";

/// Oldest lines are dropped once the transcript grows past this many entries.
pub const MAX_TRANSCRIPT_LINES: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of interpreting one submitted command.
pub enum CommandReply {
    /// Append a single output line.
    Line(String),
    /// Erase the transcript.
    Clear,
}

/// Interprets a command. Matching ignores case; whitespace is part of the command.
pub fn interpret(command: &str) -> CommandReply {
    let reply = match command.to_lowercase().as_str() {
        "test" => "test",
        "hello" => "Hello, BabyWen enthusiast!",
        "babywen" => "BabyWen is the future of decentralized finance!",
        "moon" => "To the moon and beyond! \u{1F680}\u{1F315}",
        "clear" => return CommandReply::Clear,
        _ => return CommandReply::Line(format!("Command not found: {command}")),
    };
    CommandReply::Line(reply.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Transcript of one terminal window.
pub struct TerminalSession {
    lines: Vec<String>,
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self {
            lines: vec![WELCOME_BANNER.to_string()],
        }
    }
}

impl TerminalSession {
    /// Echoes `command` as a prompt line and applies its reply.
    pub fn submit(&mut self, command: &str) {
        self.lines.push(format!("$ {command}"));
        match interpret(command) {
            CommandReply::Line(line) => self.lines.push(line),
            CommandReply::Clear => self.lines.clear(),
        }
        if self.lines.len() > MAX_TRANSCRIPT_LINES {
            let overflow = self.lines.len() - MAX_TRANSCRIPT_LINES;
            self.lines.drain(..overflow);
        }
    }

    /// Lines in display order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}
