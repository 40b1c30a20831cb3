//! The REPL: one handler per screen, all driven by the session controller.

use std::time::Duration;

use anyhow::{Result, bail};
use colored::Colorize;
use marcus_application::{PendingAnalysis, PendingTurn, SessionController};
use marcus_core::MarcusError;
use marcus_core::session::Screen;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;

use crate::commands::{Command, parse_line};
use crate::draft::{self, Draft};
use crate::helper::CliHelper;
use crate::screens;

/// How long the splash screen stays up.
pub const SPLASH_DURATION: Duration = Duration::from_millis(2500);
/// Quote rotation period on the loading screen.
pub const QUOTE_INTERVAL: Duration = Duration::from_secs(4);

enum Flow {
    Continue,
    Quit,
}

pub struct App {
    controller: SessionController,
    editor: Editor<CliHelper, DefaultHistory>,
    draft: Draft,
    /// Screen whose static part has been printed; `None` forces a redraw.
    rendered: Option<Screen>,
    /// Debate messages already printed.
    shown_messages: usize,
}

impl App {
    pub fn new(controller: SessionController) -> Result<Self> {
        let mut editor = Editor::new()?;
        editor.set_helper(Some(CliHelper::new()));

        Ok(Self {
            controller,
            editor,
            draft: Draft::default(),
            rendered: None,
            shown_messages: 0,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        loop {
            let flow = match self.controller.screen() {
                Screen::Splash => self.splash().await?,
                Screen::Onboarding => self.onboarding()?,
                Screen::Dashboard => self.dashboard().await?,
                Screen::Result => self.result()?,
                Screen::Debate => self.debate().await?,
                Screen::Loading => bail!("Loading screen reached without a request in flight"),
            };
            if let Flow::Quit = flow {
                tracing::info!("Session ended by user");
                return Ok(());
            }
        }
    }

    // ============================================================================
    // Screens
    // ============================================================================

    async fn splash(&mut self) -> Result<Flow> {
        print!("{}", screens::splash(self.controller.language()));
        tokio::time::sleep(SPLASH_DURATION).await;
        self.controller.finish_splash()?;
        Ok(Flow::Continue)
    }

    fn onboarding(&mut self) -> Result<Flow> {
        let ui = self.controller.language().ui_text();
        if self.first_render() {
            print!("{}", screens::onboarding(ui));
        }

        let Some(command) = self.read(&format!("{}: ", ui.name_label))? else {
            return Ok(Flow::Quit);
        };
        match command {
            Command::Text(name) => {
                if let Err(err) = self.controller.complete_onboarding(&name) {
                    tracing::debug!("Onboarding rejected: {}", err);
                    println!("{}", screens::name_required(ui));
                }
            }
            other => return self.common(other),
        }
        Ok(Flow::Continue)
    }

    async fn dashboard(&mut self) -> Result<Flow> {
        if self.first_render() {
            if let Some(notice) = self.controller.take_notification() {
                println!("{}", screens::notification(&notice));
            }
            print!(
                "{}",
                screens::dashboard(&self.controller.snapshot(), &self.draft)
            );
        }

        let Some(command) = self.read("» ")? else {
            return Ok(Flow::Quit);
        };
        match command {
            Command::Text(line) => self.draft.push_line(&line),
            Command::Image(raw) => {
                let path = draft::expand_path(&raw);
                match draft::load_image(&path) {
                    Ok(image) => {
                        let ui = self.controller.language().ui_text();
                        println!("{}", format!("[{}: {}]", ui.img_attached, path.display()).green());
                        self.draft.attach(path, image);
                    }
                    Err(err) => {
                        tracing::warn!("{:#}", err);
                        println!("{}", screens::notification(&format!("{err:#}")));
                    }
                }
            }
            Command::DropImage => {
                if let Some(path) = self.draft.drop_image() {
                    println!("{}", screens::system(&format!("- {}", path.display())));
                }
            }
            Command::Analyze => return self.submit(false).await,
            Command::WorstCase => return self.submit(true).await,
            other => return self.common(other),
        }
        Ok(Flow::Continue)
    }

    async fn submit(&mut self, worst_case: bool) -> Result<Flow> {
        let input = self.draft.to_input(worst_case);
        match self.controller.begin_analysis(input)? {
            Some(pending) => {
                self.loading(pending).await;
                if self.controller.screen() == Screen::Result {
                    self.draft.clear();
                }
            }
            None => {
                let ui = self.controller.language().ui_text();
                println!("{}", screens::system(ui.input_placeholder));
            }
        }
        Ok(Flow::Continue)
    }

    /// Waits for the analysis while rotating quotes.
    async fn loading(&mut self, pending: PendingAnalysis) {
        let language = self.controller.language();
        println!("{}", screens::loading(language.ui_text()));

        let quotes = language.quotes();
        let mut ticker = tokio::time::interval(QUOTE_INTERVAL);
        let request = pending.execute();
        tokio::pin!(request);

        let mut index = 0;
        let completion = loop {
            tokio::select! {
                completion = &mut request => break completion,
                _ = ticker.tick() => {
                    if let Some(quote) = quotes.get(index % quotes.len().max(1)) {
                        println!("{}", screens::quote(quote));
                    }
                    index += 1;
                }
            }
        };

        self.controller.finish_analysis(completion);
        self.rendered = None;
    }

    fn result(&mut self) -> Result<Flow> {
        let snapshot = self.controller.snapshot();
        let ui = snapshot.language.ui_text();
        if self.first_render() {
            if let Some(analysis) = &snapshot.analysis {
                print!("{}", screens::result(ui, analysis));
            }
        }

        let Some(command) = self.read("» ")? else {
            return Ok(Flow::Quit);
        };
        match command {
            Command::Debate => {
                self.controller.start_debate()?;
                self.shown_messages = 0;
            }
            Command::Done => self.controller.reset_to_dashboard()?,
            Command::Text(_) => print!("{}", screens::help(Screen::Result, ui)),
            other => return self.common(other),
        }
        Ok(Flow::Continue)
    }

    async fn debate(&mut self) -> Result<Flow> {
        if self.first_render() {
            print!(
                "{}",
                screens::debate_header(self.controller.language().ui_text())
            );
        }
        self.print_new_messages();

        let Some(command) = self.read("» ")? else {
            return Ok(Flow::Quit);
        };
        match command {
            Command::Text(text) => {
                if let Some(pending) = self.controller.begin_debate_turn(&text)? {
                    self.exchange(pending).await;
                }
            }
            Command::End => {
                self.controller.end_debate()?;
                self.shown_messages = 0;
            }
            other => return self.common(other),
        }
        Ok(Flow::Continue)
    }

    async fn exchange(&mut self, pending: PendingTurn) {
        tracing::debug!(chars = pending.message().chars().count(), "Sending debate turn");
        // The user's own line is already on screen from the prompt.
        self.shown_messages += 1;
        println!("{}", screens::typing());

        let completion = pending.execute().await;
        self.controller.finish_debate_turn(completion);
    }

    // ============================================================================
    // Shared
    // ============================================================================

    /// Commands accepted on every screen.
    fn common(&mut self, command: Command) -> Result<Flow> {
        let screen = self.controller.screen();
        let ui = self.controller.language().ui_text();
        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => print!("{}", screens::help(screen, ui)),
            Command::Language(None) => print!("{}", screens::language_menu(self.controller.language())),
            Command::Language(Some(code)) => match self.controller.change_language_code(&code) {
                Ok(()) => {
                    self.draft.clear();
                    self.shown_messages = 0;
                    self.rendered = None;
                }
                Err(err @ MarcusError::UnsupportedLanguage(_)) => {
                    println!("{}", screens::notification(&err.to_string()));
                    print!("{}", screens::language_menu(self.controller.language()));
                }
                Err(err) => return Err(err.into()),
            },
            Command::Usage(usage) => println!("{}", screens::system(usage)),
            Command::Unknown(name) => {
                println!("{}", screens::system(&format!("{name}?")));
                print!("{}", screens::help(screen, ui));
            }
            other => {
                tracing::debug!(?other, %screen, "Command not available on this screen");
                print!("{}", screens::help(screen, ui));
            }
        }
        Ok(Flow::Continue)
    }

    fn print_new_messages(&mut self) {
        let snapshot = self.controller.snapshot();
        let Some(debate) = snapshot.debate else {
            return;
        };
        let user_name = snapshot.user_name.as_deref().unwrap_or_default();
        let ui = snapshot.language.ui_text();

        for message in debate.messages.iter().skip(self.shown_messages) {
            print!("{}", screens::message(ui, user_name, message));
        }
        self.shown_messages = debate.messages.len();
    }

    /// True the first time the current screen is drawn.
    fn first_render(&mut self) -> bool {
        let screen = self.controller.screen();
        if self.rendered == Some(screen) {
            return false;
        }
        self.rendered = Some(screen);
        true
    }

    /// Reads one line. `None` means end of input.
    fn read(&mut self, prompt: &str) -> Result<Option<Command>> {
        loop {
            match self.editor.readline(prompt) {
                Ok(line) => {
                    let Some(command) = parse_line(&line) else {
                        continue;
                    };
                    let _ = self.editor.add_history_entry(line.trim());
                    return Ok(Some(command));
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}", screens::system("CTRL-C: /quit"));
                }
                Err(ReadlineError::Eof) => return Ok(None),
                Err(err) => return Err(err.into()),
            }
        }
    }
}
