//! Interactive chat loop on stdin/stdout.
//!
//! Turns run on their own task so the prompt stays live while a reply is
//! outstanding: commands such as `/reset` work mid-request, and a second
//! message is refused until the first reply lands.

mod command;
mod render;
mod slot;

use std::path::PathBuf;
use std::sync::Arc;

use parley_ai::{reply, ImageAttachment, SessionManager, TurnOutcome};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;

use command::{parse, Command};
use slot::TurnSlot;

use crate::{attach, download};

pub struct ChatRepl {
    session: Arc<SessionManager>,
    http: reqwest::Client,
    outcomes: mpsc::UnboundedSender<TurnOutcome>,
    finished: Option<mpsc::UnboundedReceiver<TurnOutcome>>,
    turn: TurnSlot,
}

impl ChatRepl {
    pub fn new(session: Arc<SessionManager>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            session,
            http: reqwest::Client::new(),
            outcomes: tx,
            finished: Some(rx),
            turn: TurnSlot::default(),
        }
    }

    /// Run until `/quit` or end of input.
    pub async fn run(mut self, notice: Option<String>) {
        let Some(mut outcomes) = self.finished.take() else {
            return;
        };
        self.print_welcome(notice.as_deref());

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        prompt().await;

        loop {
            tokio::select! {
                Some(outcome) = outcomes.recv() => {
                    self.turn.finish();
                    self.print_outcome(&outcome);
                    prompt().await;
                }
                line = lines.next_line() => match line {
                    Ok(Some(line)) => {
                        if self.handle_line(&line).await {
                            break;
                        }
                        if !self.turn.is_busy() {
                            prompt().await;
                        }
                    }
                    Ok(None) => {
                        // Input closed: let an outstanding reply land first.
                        if self.turn.is_busy() {
                            if let Some(outcome) = outcomes.recv().await {
                                self.print_outcome(&outcome);
                            }
                        }
                        break;
                    }
                    Err(e) => {
                        tracing::error!("Failed to read input: {e}");
                        break;
                    }
                }
            }
        }
    }

    /// Returns `true` when the loop should exit.
    async fn handle_line(&self, line: &str) -> bool {
        match parse(line) {
            Command::Empty => {}
            Command::Send(text) => self.start_turn(text, None),
            Command::Image { path, text } => match attach::load_image(&path).await {
                Ok(image) => self.start_turn(text, Some(image)),
                Err(e) => println!("{e}"),
            },
            Command::ListPersonas => {
                let selected = self.session.selected_persona();
                println!("{}", render::format_personas(self.session.registry(), &selected.id));
            }
            Command::SwitchPersona(id) => match self.session.switch_persona(&id) {
                Ok(persona) => {
                    println!("Switched to {} {}.", persona.emoji, persona.display_name);
                    println!("{}", render::format_history(&[], &persona));
                }
                Err(e) => println!("{e}. Use /persona to list the available ones."),
            },
            Command::Reset => {
                self.session.reset();
                println!("Conversation cleared.");
            }
            Command::History => {
                let persona = self.session.selected_persona();
                println!("{}", render::format_history(&self.session.messages(), &persona));
            }
            Command::Copy => self.copy_last_reply(),
            Command::Save(dir) => self.save_last_images(dir).await,
            Command::Help => println!("{}", command::HELP),
            Command::Quit => return true,
            Command::Unknown(msg) => println!("{msg} (type /help for commands)"),
        }
        false
    }

    fn start_turn(&self, text: String, image: Option<ImageAttachment>) {
        if !self.turn.try_start() {
            println!("(still waiting for the previous reply)");
            return;
        }
        let session = Arc::clone(&self.session);
        let outcomes = self.outcomes.clone();
        tokio::spawn(async move {
            let outcome = session.send_turn(text, image).await;
            let _ = outcomes.send(outcome);
        });
        println!("…");
    }

    fn copy_last_reply(&self) {
        let Some(message) = self.session.last_bot_message() else {
            println!("Nothing to copy yet.");
            return;
        };
        let text = reply::clipboard_text(&message.text);
        match parley_platform::copy_text(&text) {
            Ok(()) => println!("Copied."),
            Err(e) => println!("Copy failed: {e}"),
        }
    }

    async fn save_last_images(&self, dir: Option<PathBuf>) {
        let urls = self
            .session
            .last_bot_message()
            .map(|m| reply::image_urls(&m.text))
            .unwrap_or_default();
        if urls.is_empty() {
            println!("The last reply has no image to save.");
            return;
        }

        let dir = match dir.map(Ok).unwrap_or_else(parley_platform::download_dir) {
            Ok(dir) => dir,
            Err(e) => {
                println!("No download directory: {e}");
                return;
            }
        };

        match download::save_images(&self.http, &urls, &dir).await {
            Ok(paths) => {
                for path in paths {
                    println!("Saved {}", path.display());
                }
            }
            Err(e) => println!("Download failed: {e}"),
        }
    }

    fn print_welcome(&self, notice: Option<&str>) {
        let persona = self.session.selected_persona();
        println!(
            "Parley v{} · {} {}",
            env!("CARGO_PKG_VERSION"),
            persona.emoji,
            persona.display_name
        );
        println!("Type /help for commands.\n");
        if let Some(notice) = notice {
            println!("⚠ {notice}\n");
        }
        println!("{}", render::format_history(&self.session.messages(), &persona));
    }

    fn print_outcome(&self, outcome: &TurnOutcome) {
        let persona = self.session.selected_persona();
        if let Some(text) = render::format_outcome(outcome, &persona) {
            println!("\n{text}");
        }
    }
}

async fn prompt() {
    let mut stdout = tokio::io::stdout();
    let _ = stdout.write_all(b"\n> ").await;
    let _ = stdout.flush().await;
}
