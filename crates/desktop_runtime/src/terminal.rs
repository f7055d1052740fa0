//! Command interpreter behind the terminal app.

use platform_host::AssistantRequest;

use crate::{
    assistant::{system_instruction, ChatMessage, MessageRole, Persona},
    i18n,
    model::Locale,
};

const HELP: &str = "\
  neofetch    Display system info and skills
  clear       Clear terminal screen
  whoami      Display current user
  youtube     Show channel info
  github      Show GitHub profile
  contact     Show contact details
  ask [query] Ask the AI assistant
  exit        Close terminal";

const NEOFETCH: &str = "\
hamza@hamza-desktop
-------------------
OS: HamzaOS 22.04
Host: Custom Rig
Kernel: 5.15.0-generic
Uptime: 11 years
Shell: zsh 5.8
Resolution: 1920x1080 (Full HD)
CPU: Intel Core i9 (Electronics Expert)
GPU: NVIDIA RTX 3080 (Windows/Linux Expert)
Memory: 32GiB / 64GiB";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Command,
    Output,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalLine {
    pub kind: LineKind,
    pub text: String,
}

impl TerminalLine {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// What the view has to do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalOutcome {
    Continue,
    /// Close the terminal window.
    Exit,
    /// Send this request and feed the reply to [`TerminalSession::finish_ask`].
    Ask(AssistantRequest),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalSession {
    locale: Locale,
    lines: Vec<TerminalLine>,
    processing: bool,
}

impl TerminalSession {
    pub fn new(locale: Locale) -> Self {
        let strings = i18n::strings(locale);
        Self {
            locale,
            lines: vec![
                TerminalLine::new(LineKind::Output, strings.term_welcome),
                TerminalLine::new(LineKind::Output, " "),
            ],
            processing: false,
        }
    }

    pub fn lines(&self) -> &[TerminalLine] {
        &self.lines
    }

    /// Whether an `ask` reply is outstanding. Input is ignored meanwhile.
    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn run(&mut self, input: &str) -> TerminalOutcome {
        let line = input.trim();
        if line.is_empty() || self.processing {
            return TerminalOutcome::Continue;
        }
        self.lines.push(TerminalLine::new(LineKind::Command, line));

        let (command, rest) = line
            .split_once(char::is_whitespace)
            .map(|(command, rest)| (command, rest.trim()))
            .unwrap_or((line, ""));
        let strings = i18n::strings(self.locale);

        match command.to_ascii_lowercase().as_str() {
            "help" => self.output(format!("{}\n{HELP}", strings.term_help)),
            "clear" => self.lines.clear(),
            "exit" => return TerminalOutcome::Exit,
            "whoami" => self.output("hamza_expert_11"),
            "youtube" => self.output(
                "Channel: Hamza Full HD (@hamzaellakany-hf5kw)\n\
                 URL: https://youtube.com/@hamzaellakany-hf5kw",
            ),
            "github" => self.output("GitHub: https://github.com/ellakanyhamza8-web"),
            "contact" => self.output("Email: ellakanyhamza8@gmail.com"),
            "neofetch" => self.output(NEOFETCH),
            "ask" if rest.is_empty() => self.error(strings.term_ask_usage),
            "ask" => {
                self.processing = true;
                self.output(strings.term_processing);
                return TerminalOutcome::Ask(AssistantRequest::new(
                    rest,
                    system_instruction(Persona::Terminal, self.locale),
                ));
            }
            other => self.error(format!("{other}: {}", strings.term_not_found)),
        }
        TerminalOutcome::Continue
    }

    /// Appends the assistant's reply (or its inline error) for the pending `ask`.
    pub fn finish_ask(&mut self, reply: ChatMessage) {
        self.processing = false;
        let kind = match reply.role {
            MessageRole::Error => LineKind::Error,
            MessageRole::Model | MessageRole::User => LineKind::Output,
        };
        self.lines.push(TerminalLine::new(kind, reply.text));
    }

    fn output(&mut self, text: impl Into<String>) {
        self.lines.push(TerminalLine::new(LineKind::Output, text));
    }

    fn error(&mut self, text: impl Into<String>) {
        self.lines.push(TerminalLine::new(LineKind::Error, text));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn last(session: &TerminalSession) -> &TerminalLine {
        session.lines().last().unwrap()
    }

    #[test]
    fn whoami_echoes_command_then_output() {
        let mut session = TerminalSession::new(Locale::En);
        let before = session.lines().len();
        assert_eq!(session.run("  WHOAMI "), TerminalOutcome::Continue);
        assert_eq!(
            &session.lines()[before..],
            &[
                TerminalLine::new(LineKind::Command, "WHOAMI"),
                TerminalLine::new(LineKind::Output, "hamza_expert_11"),
            ]
        );
    }

    #[test]
    fn clear_empties_history_and_exit_requests_close() {
        let mut session = TerminalSession::new(Locale::En);
        session.run("clear");
        assert!(session.lines().is_empty());
        assert_eq!(session.run("exit"), TerminalOutcome::Exit);
    }

    #[test]
    fn unknown_command_is_an_error_line() {
        let mut session = TerminalSession::new(Locale::En);
        session.run("sudo rm -rf /");
        assert_eq!(last(&session).kind, LineKind::Error);
        assert_eq!(last(&session).text, "sudo: command not found");
    }

    #[test]
    fn ask_without_query_reports_usage() {
        let mut session = TerminalSession::new(Locale::En);
        assert_eq!(session.run("ask   "), TerminalOutcome::Continue);
        assert_eq!(last(&session).kind, LineKind::Error);
        assert!(!session.is_processing());
    }

    #[test]
    fn ask_blocks_input_until_reply_arrives() {
        let mut session = TerminalSession::new(Locale::Ar);
        let TerminalOutcome::Ask(request) = session.run("ask what is ohm's law") else {
            panic!("expected ask outcome");
        };
        assert_eq!(request.prompt, "what is ohm's law");
        assert!(request.system_instruction.ends_with("Answer in Arabic."));
        assert!(session.is_processing());

        let len = session.lines().len();
        assert_eq!(session.run("whoami"), TerminalOutcome::Continue);
        assert_eq!(session.lines().len(), len);

        session.finish_ask(ChatMessage::new(MessageRole::Error, "Error: offline"));
        assert!(!session.is_processing());
        assert_eq!(last(&session).kind, LineKind::Error);
    }
}
