//! Rendering of each screen from a session snapshot.
//!
//! Every function returns the text to print so the layout can be tested
//! without a terminal.

use std::fmt::Write as _;

use colored::Colorize;
use marcus_core::analysis::StoicAnalysis;
use marcus_core::i18n::{Language, UiText};
use marcus_core::session::{ChatMessage, MessageRole, Screen, SessionSnapshot};

use crate::draft::Draft;

const RULE: &str = "────────────────────────────────────────";

pub fn splash(language: Language) -> String {
    let ui = language.ui_text();
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "M A R C U S".bright_yellow().bold());
    let _ = writeln!(out, "{}", ui.splash_sub.italic().bright_black());
    let _ = writeln!(out, "{}", RULE.bright_black());
    out
}

pub fn onboarding(ui: &UiText) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", ui.onboarding_title.bright_yellow().bold());
    let _ = writeln!(out, "{}", ui.onboarding_desc);
    let _ = writeln!(
        out,
        "{}",
        format!("{} + Enter = {}", ui.name_label, ui.start_btn).bright_black()
    );
    out
}

/// Shown when the submitted name is blank.
pub fn name_required(ui: &UiText) -> String {
    format!("{} ({})", ui.onboarding_desc, ui.name_label)
        .yellow()
        .to_string()
}

pub fn dashboard(snapshot: &SessionSnapshot, draft: &Draft) -> String {
    let ui = snapshot.language.ui_text();
    let name = snapshot.user_name.as_deref().unwrap_or_default();

    let mut out = String::new();
    let _ = writeln!(out, "{}", RULE.bright_black());
    let _ = writeln!(out, "{}", ui.greeting(name).bright_yellow().bold());
    let _ = writeln!(out, "{}", ui.dashboard_prompt);
    let _ = writeln!(out, "{}", ui.input_placeholder.italic().bright_black());
    if let Some(path) = draft.image_path() {
        let _ = writeln!(
            out,
            "{}",
            format!("[{}: {}]", ui.img_attached, path.display()).green()
        );
    }
    if draft.line_count() > 0 {
        let _ = writeln!(out, "{}", draft.text().bright_white());
    }
    let _ = writeln!(
        out,
        "{}",
        format!(
            "/analyze = {}   /worst = {}   /image <PATH>   /lang   /help",
            ui.analyze_btn, ui.worst_case_btn
        )
        .bright_black()
    );
    out
}

pub fn loading(ui: &UiText) -> String {
    format!("{}", ui.loading.bright_yellow())
}

pub fn quote(text: &str) -> String {
    format!("  \u{201C}{}\u{201D}", text).italic().bright_black().to_string()
}

fn bullet_list(out: &mut String, title: &str, items: &[String]) {
    let _ = writeln!(out, "{}", title.bold());
    for item in items {
        let _ = writeln!(out, "  • {item}");
    }
}

pub fn result(ui: &UiText, analysis: &StoicAnalysis) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", RULE.bright_black());
    let _ = writeln!(out, "{}", ui.result_title.bright_yellow().bold());
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", ui.filter_title.cyan().bold());
    bullet_list(&mut out, ui.facts, &analysis.facts);
    bullet_list(&mut out, ui.opinions, &analysis.opinions);
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", ui.dichotomy_title.cyan().bold());
    bullet_list(&mut out, ui.in_control, &analysis.in_control);
    bullet_list(&mut out, ui.out_control, &analysis.out_of_control);
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", ui.verdict_title.cyan().bold());
    let _ = writeln!(out, "{}", analysis.verdict.bright_white());
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}",
        format!("/debate = {}   /done = {}", ui.debate_btn, ui.done_btn).bright_black()
    );
    out
}

pub fn debate_header(ui: &UiText) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", RULE.bright_black());
    let _ = writeln!(
        out,
        "{} {}",
        ui.debate_header.bright_yellow().bold(),
        format!("● {}", ui.debate_online).green()
    );
    let _ = writeln!(
        out,
        "{}",
        format!(
            "{}   Enter = {}   /end = {}",
            ui.debate_placeholder, ui.send_message, ui.debate_end
        )
        .bright_black()
    );
    out
}

pub fn message(ui: &UiText, user_name: &str, message: &ChatMessage) -> String {
    match message.role {
        MessageRole::Model => {
            let mut out = format!("{}\n", format!("[{}]", ui.debate_header).bright_magenta());
            for line in message.text.lines() {
                let _ = writeln!(out, "{}", line.bright_blue());
            }
            out
        }
        MessageRole::User => format!("{}\n", format!("> {}: {}", user_name, message.text).green()),
    }
}

pub fn typing() -> String {
    "…".bright_black().to_string()
}

pub fn language_menu(current: Language) -> String {
    let ui = current.ui_text();
    let mut out = String::new();
    let _ = writeln!(out, "{}", ui.language_menu_title.bold());
    for language in Language::all() {
        let marker = if language == current { "*" } else { " " };
        let _ = writeln!(
            out,
            "{} {} {}  {}",
            marker,
            language.flag(),
            language.code(),
            language.display_name()
        );
    }
    let _ = writeln!(out, "{}", ui.language_reset_notice.yellow());
    let _ = writeln!(out, "{}", "/lang <CODE>".bright_black());
    out
}

pub fn help(screen: Screen, ui: &UiText) -> String {
    let mut lines = vec!["/lang [CODE]".to_string()];
    match screen {
        Screen::Dashboard => lines.extend([
            format!("/analyze        {}", ui.analyze_btn),
            format!("/worst          {}", ui.worst_case_btn),
            "/image <PATH>".to_string(),
            "/drop-image".to_string(),
        ]),
        Screen::Result => lines.extend([
            format!("/debate         {}", ui.debate_btn),
            format!("/done           {}", ui.done_btn),
        ]),
        Screen::Debate => lines.push(format!("/end            {}", ui.debate_end)),
        _ => {}
    }
    lines.extend(["/help".to_string(), "/quit".to_string()]);

    let mut out = String::new();
    for line in lines {
        let _ = writeln!(out, "  {}", line.bright_black());
    }
    out
}

pub fn notification(text: &str) -> String {
    text.red().bold().to_string()
}

pub fn system(text: &str) -> String {
    text.bright_black().to_string()
}
