//! Interactive module shell (Read-Eval-Print Loop)

use crate::output::console::ConsoleFormatter;
use casewalk_application::{
    ContentSource, ModuleSession, NavigationMode, export_session_json,
};
use casewalk_domain::{QuestionId, Section, TableRow, UnlockAttempt, normalize_token};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

/// Interactive shell over one module session
pub struct ModuleShell<C: ContentSource + 'static> {
    session: ModuleSession<C>,
}

impl<C: ContentSource + 'static> ModuleShell<C> {
    pub fn new(session: ModuleSession<C>) -> Self {
        Self { session }
    }

    /// Run the interactive shell
    pub fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = dirs::data_dir().map(|p| p.join("casewalk").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();
        self.print_view();

        loop {
            let readline = rl.readline("casewalk> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    if self.handle_command(line) {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {err:?}");
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        print!("{}", ConsoleFormatter::format_banner(self.session.module()));
        println!(
            "{}",
            "Type 'help' for commands, 'next' to walk the module.".dimmed()
        );
    }

    /// Render whatever the current navigation state points at.
    fn print_view(&self) {
        match self.session.mode() {
            NavigationMode::Guided => print!("{}", ConsoleFormatter::format_step(&self.session)),
            NavigationMode::Jump => print!(
                "{}",
                ConsoleFormatter::format_section(&self.session, self.session.current_section())
            ),
        }
    }

    /// Handle one command line. Returns true if the shell should exit.
    fn handle_command(&mut self, line: &str) -> bool {
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((first, rest)) => (first, rest.trim()),
            None => (line, ""),
        };

        match command {
            "quit" | "exit" | "q" => {
                println!("Bye!");
                return true;
            }
            "help" | "h" | "?" => self.print_help(),
            "next" | "n" => {
                self.session.next_step();
                self.print_view();
            }
            "prev" | "p" => {
                self.session.prev_step();
                self.print_view();
            }
            "steps" => self.print_steps(),
            "goto" => self.cmd_goto(rest),
            "mode" => self.cmd_mode(rest),
            "appendices" => self.cmd_appendices(rest),
            "show" => self.print_view(),
            "open" => self.cmd_open(rest),
            "answer" => self.cmd_answer(rest),
            "row" => self.cmd_row(rest),
            "compute" => self.cmd_compute(rest),
            "done" => self.cmd_done(rest),
            "progress" => print!("{}", ConsoleFormatter::format_progress(&self.session)),
            "export" => self.cmd_export(rest),
            "unlock" => self.cmd_unlock(rest),
            "instructor" => self.cmd_instructor(rest),
            "lock" => {
                self.session.lock_instructor();
                self.print_gate();
            }
            "reset" => {
                self.session.reset_responses();
                println!("{}", "Responses reset.".green());
            }
            "refresh" => {
                self.session.clear_content_cache();
                println!("Content cache cleared.");
                self.print_view();
            }
            "status" => self.print_status(),
            _ => {
                println!("Unknown command: {command}");
                println!("Type help for available commands");
            }
        }

        false
    }

    fn print_help(&self) {
        println!();
        println!("Navigation:");
        println!("  next, prev        - Walk the guided steps");
        println!("  steps             - List all guided steps");
        println!("  goto <section>    - Go to a section (e.g. 'goto part a', 'goto appendix 2')");
        println!("  mode guided|jump  - Switch navigation mode");
        println!("  appendices on|off - Include appendix steps in the walk");
        println!("  show              - Re-render the current view");
        println!();
        println!("Responses:");
        println!("  open <id>             - Show one question");
        println!("  answer <id> <text>    - Record a free-text answer");
        println!("  row <id> <col>=<val>  - Append a row to a table answer");
        println!("  compute <id>          - Compute the table summary");
        println!("  done <id> [on|off]    - Flip the manual completion flag");
        println!("  progress              - Show completion progress");
        println!("  export [path]         - Export responses as JSON");
        println!("  reset                 - Clear all responses");
        println!();
        println!("Instructor:");
        println!("  unlock <code>     - Unlock the facilitator guide");
        println!("  instructor on|off - Toggle facilitator content");
        println!("  lock              - Lock the facilitator guide");
        println!();
        println!("Other:");
        println!("  status, refresh, help, quit");
        println!();
    }

    fn print_steps(&self) {
        println!();
        for (index, step) in self.session.steps().iter().enumerate() {
            let marker = if index == self.session.step_index() {
                ">"
            } else {
                " "
            };
            let target = match &step.question_id {
                Some(id) => format!("{} - {id}", step.section.label()),
                None => step.section.label(),
            };
            println!("{marker} {:>2}. {target}", index + 1);
        }
        println!();
    }

    fn print_gate(&self) {
        print!(
            "{}",
            ConsoleFormatter::format_gate(self.session.gate(), self.session.unlock_configured())
        );
    }

    fn print_status(&self) {
        print!("{}", ConsoleFormatter::format_banner(self.session.module()));
        println!(
            "Mode: {} | Section: {}",
            self.session.mode().label(),
            self.session.current_section().label()
        );
        self.print_gate();
        let progress = self.session.progress();
        println!(
            "Answered: {}/{} ({:.1}%)",
            progress.answered,
            progress.total,
            progress.percent_rounded()
        );
    }

    fn parse_id(&self, raw: &str) -> QuestionId {
        QuestionId::new(normalize_token(raw))
    }

    fn cmd_goto(&mut self, rest: &str) {
        match Section::parse(rest) {
            Ok(section) => {
                self.session.goto_section(section);
                self.print_view();
            }
            Err(err) => println!("{}", err.to_string().yellow()),
        }
    }

    fn cmd_mode(&mut self, rest: &str) {
        match rest {
            "guided" => self.session.set_mode(NavigationMode::Guided),
            "jump" => self.session.set_mode(NavigationMode::Jump),
            _ => {
                println!("Usage: mode guided|jump");
                return;
            }
        }
        self.print_view();
    }

    fn cmd_appendices(&mut self, rest: &str) {
        match rest {
            "on" => self.session.set_include_appendices(true),
            "off" => self.session.set_include_appendices(false),
            _ => {
                println!("Usage: appendices on|off");
                return;
            }
        }
        println!(
            "Guided walk now has {} steps.",
            self.session.steps().len()
        );
    }

    fn cmd_open(&mut self, rest: &str) {
        if rest.is_empty() {
            println!("Usage: open <id>");
            return;
        }
        let id = self.parse_id(rest);
        match self.session.module().item(&id) {
            Some(item) => print!(
                "{}",
                ConsoleFormatter::format_question(
                    item,
                    self.session.responses().record(&id),
                    self.session.instructor_notes_visible(),
                )
            ),
            None => println!("{}", format!("Question not found: {id}").yellow()),
        }
    }

    fn cmd_answer(&mut self, rest: &str) {
        let Some((raw_id, text)) = rest.split_once(char::is_whitespace) else {
            println!("Usage: answer <id> <text>");
            return;
        };
        let id = self.parse_id(raw_id);
        match self.session.set_text_answer(&id, text.trim().to_string()) {
            Ok(()) => println!("{}", format!("Recorded answer for {id}.").green()),
            Err(err) => println!("{}", err.to_string().yellow()),
        }
    }

    fn cmd_row(&mut self, rest: &str) {
        let mut tokens = rest.split_whitespace();
        let Some(raw_id) = tokens.next() else {
            println!("Usage: row <id> <col>=<value> ...");
            return;
        };
        let id = self.parse_id(raw_id);

        let mut row = TableRow::new();
        for pair in tokens {
            let Some((key, value)) = pair.split_once('=') else {
                println!("Skipping malformed cell '{pair}' (expected <col>=<value>)");
                continue;
            };
            let value = serde_json::from_str(value)
                .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));
            row.insert(key.to_string(), value);
        }

        if row.is_empty() {
            println!("Usage: row <id> <col>=<value> ...");
            return;
        }

        match self.session.push_row(&id, row) {
            Ok(()) => println!("{}", format!("Row added to {id}.").green()),
            Err(err) => println!("{}", err.to_string().yellow()),
        }
    }

    fn cmd_compute(&mut self, rest: &str) {
        if rest.is_empty() {
            println!("Usage: compute <id>");
            return;
        }
        let id = self.parse_id(rest);
        match self.session.compute(&id) {
            Ok(computed) => println!(
                "{}",
                format!(
                    "Computed result saved: {} row(s), columns: {}",
                    computed.rows,
                    computed.columns.join(", ")
                )
                .green()
            ),
            Err(err) => println!("{}", err.to_string().yellow()),
        }
    }

    fn cmd_done(&mut self, rest: &str) {
        let mut tokens = rest.split_whitespace();
        let Some(raw_id) = tokens.next() else {
            println!("Usage: done <id> [on|off]");
            return;
        };
        let done = match tokens.next() {
            None | Some("on") => true,
            Some("off") => false,
            Some(other) => {
                println!("Unknown flag '{other}' (expected on|off)");
                return;
            }
        };

        let id = self.parse_id(raw_id);
        match self.session.set_done(&id, done) {
            Ok(()) => println!(
                "{}",
                format!("Marked {id} as {}.", if done { "done" } else { "not done" }).green()
            ),
            Err(err) => println!("{}", err.to_string().yellow()),
        }
    }

    fn cmd_export(&mut self, rest: &str) {
        let json = match export_session_json(&self.session) {
            Ok(json) => json,
            Err(err) => {
                println!("{}", format!("Export failed: {err}").red());
                return;
            }
        };

        if rest.is_empty() || rest == "-" {
            println!("{json}");
            return;
        }

        match std::fs::write(rest, &json) {
            Ok(()) => println!("{}", format!("Responses exported to {rest}.").green()),
            Err(err) => println!("{}", format!("Could not write {rest}: {err}").red()),
        }
    }

    fn cmd_unlock(&mut self, rest: &str) {
        if rest.is_empty() {
            println!("Usage: unlock <code>");
            return;
        }
        match self.session.submit_unlock_code(rest) {
            UnlockAttempt::Unlocked => {
                println!("{}", "Unlocked. Use 'instructor on' to show notes.".green());
            }
            UnlockAttempt::WrongCode | UnlockAttempt::NotConfigured => self.print_gate(),
        }
    }

    fn cmd_instructor(&mut self, rest: &str) {
        match rest {
            "on" => self.session.set_instructor_enabled(true),
            "off" => self.session.set_instructor_enabled(false),
            _ => {
                println!("Usage: instructor on|off");
                return;
            }
        }
        self.print_gate();
    }
}
