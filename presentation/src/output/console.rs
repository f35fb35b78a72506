//! Console formatter for module content and session state

use casewalk_application::{ContentSource, ModuleSession};
use casewalk_domain::{
    AnswerValue, CatalogIssue, GateState, InstructorGate, ItemType, ModulePayload, Part,
    ProgressSummary, QuestionId, QuestionItem, ResponseRecord, Section, Segment,
};
use colored::Colorize;
use std::collections::HashSet;

/// Formats module content and session state for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the module banner shown at startup.
    pub fn format_banner(module: &ModulePayload) -> String {
        let mut output = String::new();
        output.push_str(&format!("\n{}\n", module.title.cyan().bold()));

        let mut caption = format!("Module ID: {}", module.module_id);
        if let Some(version) = &module.version {
            caption.push_str(&format!(" | Version: {version}"));
        }
        output.push_str(&format!("{}\n", caption.dimmed()));
        output
    }

    /// Format the itemized fatal-load error list.
    pub fn format_issues(issues: &[CatalogIssue]) -> String {
        let mut output = format!("{}\n", "Unable to load module catalog:".red().bold());
        for issue in issues {
            output.push_str(&format!("  - {}\n", issue.message));
        }
        output
    }

    /// Format one section: markdown with questions substituted inline
    /// at their placeholder positions, then any part questions the
    /// narrative never referenced.
    pub fn format_section<C: ContentSource>(
        session: &ModuleSession<C>,
        section: Section,
    ) -> String {
        let mut output = String::new();
        output.push_str(&Self::section_header(session, section));

        match session.section_segments(section) {
            Err(err) => {
                output.push_str(&format!("\n{}\n", err.to_string().red()));
            }
            Ok(segments) => {
                let blank = segments.iter().all(|segment| match segment {
                    Segment::Prose(text) => text.trim().is_empty(),
                    Segment::Placeholder(_) => false,
                });
                if blank {
                    output.push_str(&format!(
                        "{}\n",
                        "This section has no markdown content yet.".dimmed()
                    ));
                }

                let mut rendered: HashSet<QuestionId> = HashSet::new();

                for segment in &segments {
                    match segment {
                        Segment::Prose(text) => output.push_str(text),
                        Segment::Placeholder(id) => {
                            output.push_str(&Self::render_placeholder(session, id, &mut rendered));
                        }
                    }
                }
                if !output.ends_with('\n') {
                    output.push('\n');
                }

                if let Some(part) = section.part() {
                    let remaining: Vec<&QuestionItem> = session
                        .module()
                        .part_items(part)
                        .filter(|item| !rendered.contains(&item.id))
                        .collect();

                    if rendered.is_empty() && remaining.is_empty() {
                        output.push_str(&format!(
                            "\n{}\n",
                            format!("No questions found for Part {part}.").yellow()
                        ));
                    } else if !remaining.is_empty() {
                        output.push_str(&format!(
                            "\n{}\n",
                            format!("Questions - Part {part}").cyan().bold()
                        ));
                        for item in remaining {
                            output.push_str(&Self::format_question(
                                item,
                                session.responses().record(&item.id),
                                session.instructor_notes_visible(),
                            ));
                        }
                    }
                }
            }
        }

        output
    }

    fn section_header<C: ContentSource>(session: &ModuleSession<C>, section: Section) -> String {
        let mut header = format!("\n{}", section.label().cyan().bold());

        if let Some(part) = section.part() {
            let progress = session.part_progress(part);
            if progress.total > 0 {
                let badge = format!("[{}/{} answered]", progress.answered, progress.total);
                let badge = if progress.is_complete() {
                    badge.green()
                } else {
                    badge.dimmed()
                };
                header.push_str(&format!("  {badge}"));
            }
        }

        header.push('\n');
        header
    }

    fn render_placeholder<C: ContentSource>(
        session: &ModuleSession<C>,
        id: &QuestionId,
        rendered: &mut HashSet<QuestionId>,
    ) -> String {
        if id.is_empty() {
            return format!("\n{}\n", "warning: empty question placeholder".yellow());
        }

        match session.module().item(id) {
            None => format!(
                "\n{}\n",
                format!("warning: unknown question placeholder: {id}").yellow()
            ),
            Some(item) => {
                if rendered.insert(id.clone()) {
                    Self::format_question(
                        item,
                        session.responses().record(id),
                        session.instructor_notes_visible(),
                    )
                } else {
                    // Duplicate reference in the same view: the full
                    // block already rendered above.
                    format!("\n{}\n", format!("({id} appears above)").dimmed())
                }
            }
        }
    }

    /// Format one question block: id, prompt, current response state,
    /// and the matching input hint.
    pub fn format_question(
        item: &QuestionItem,
        record: Option<&ResponseRecord>,
        notes_visible: bool,
    ) -> String {
        let mut output = String::new();

        let mut title = format!("── {} ──", item.id).yellow().bold().to_string();
        if record.is_some_and(ResponseRecord::is_answered) {
            title.push_str(&format!(" {}", "[answered]".green()));
        }
        if record.is_some_and(|r| r.done) {
            title.push_str(&format!(" {}", "(done)".green()));
        }
        output.push_str(&format!("\n{title}\n"));

        if !item.prompt.is_empty() {
            output.push_str(&format!("{}\n", item.prompt));
        }

        match record.and_then(|r| r.answer.as_ref()) {
            None => output.push_str(&format!("{}\n", "Response: (none)".dimmed())),
            Some(AnswerValue::Text(text)) => {
                if text.trim().is_empty() {
                    output.push_str(&format!("{}\n", "Response: (none)".dimmed()));
                } else {
                    output.push_str(&format!("Response: {text}\n"));
                }
            }
            Some(AnswerValue::Table(rows)) => {
                output.push_str("Rows:\n");
                for row in rows {
                    let cells: Vec<String> = row
                        .iter()
                        .map(|(key, value)| format!("{key}: {}", Self::cell(value)))
                        .collect();
                    output.push_str(&format!("  - {}\n", cells.join(" | ")));
                }
            }
            Some(AnswerValue::Structured(value)) => {
                output.push_str(&format!("Response: {value}\n"));
            }
        }

        if let Some(computed) = record.and_then(|r| r.computed.as_ref()) {
            output.push_str(&format!(
                "{}\n",
                format!(
                    "Computed: {} row(s), columns: {}",
                    computed.rows,
                    computed.columns.join(", ")
                )
                .green()
            ));
        }

        output.push_str(&format!("{}\n", Self::hint(item).dimmed()));

        if notes_visible {
            output.push_str(&Self::format_instructor_notes(item));
        }

        output
    }

    fn cell(value: &serde_json::Value) -> String {
        match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    fn hint(item: &QuestionItem) -> String {
        match item.item_type {
            ItemType::TableCalc => format!(
                "row {id} <col>=<value> ...  |  compute {id}  |  done {id}",
                id = item.id
            ),
            _ => format!("answer {id} <text>  |  done {id}", id = item.id),
        }
    }

    fn format_instructor_notes(item: &QuestionItem) -> String {
        let mut output = format!("{}\n", "Instructor notes:".yellow());
        match &item.instructor_notes {
            None => output.push_str(&format!(
                "{}\n",
                "No instructor notes available for this question.".dimmed()
            )),
            Some(notes) => {
                let pretty =
                    serde_json::to_string_pretty(notes).unwrap_or_else(|_| notes.to_string());
                for line in pretty.lines() {
                    output.push_str(&format!("  {line}\n"));
                }
            }
        }
        output
    }

    /// Format the current guided step: one question, or a whole
    /// content-only section.
    pub fn format_step<C: ContentSource>(session: &ModuleSession<C>) -> String {
        let step = session.current_step().clone();
        let mut output = format!(
            "\n{}",
            format!(
                "Step {}/{} - {}",
                session.step_index() + 1,
                session.steps().len(),
                step.section.label()
            )
            .cyan()
            .bold()
        );
        output.push('\n');

        match &step.question_id {
            None => output.push_str(&Self::format_section(session, step.section)),
            Some(id) => {
                let mut rendered = HashSet::new();
                output.push_str(&Self::render_placeholder(session, id, &mut rendered));
            }
        }

        output
    }

    /// Format overall and per-part progress with completion badges.
    pub fn format_progress<C: ContentSource>(session: &ModuleSession<C>) -> String {
        let overall = session.progress();
        let mut output = format!("\n{}\n", "Progress".cyan().bold());
        output.push_str(&Self::progress_line("Overall", overall));

        for part in Part::all() {
            let progress = session.part_progress(part);
            output.push_str(&Self::progress_line(&format!("Part {part}"), progress));
        }

        output
    }

    fn progress_line(label: &str, progress: ProgressSummary) -> String {
        let percent = progress.percent_rounded();
        let filled = (percent / 100.0 * 20.0).round() as usize;
        let bar = format!("[{}{}]", "#".repeat(filled), "-".repeat(20 - filled));

        let mut line = format!(
            "  {label:<8} {bar} {}/{} ({percent:.1}%)",
            progress.answered, progress.total
        );
        if progress.is_complete() {
            line.push_str(&format!(" {}", "complete".green()));
        }
        line.push('\n');
        line
    }

    /// Format the instructor gate status line.
    pub fn format_gate(gate: &InstructorGate, configured: bool) -> String {
        let mut output = String::new();
        match gate.state() {
            GateState::Locked => {
                output.push_str(&format!(
                    "{}\n",
                    "Locked - instructor notes are hidden".dimmed()
                ));
                if let Some(error) = gate.last_error() {
                    output.push_str(&format!("{}\n", error.yellow()));
                } else if !configured {
                    output.push_str(&format!("{}\n", "Unlock code not configured.".yellow()));
                }
            }
            GateState::Unlocked { enabled: false } => {
                output.push_str("Unlocked - instructor notes are hidden (try: instructor on)\n");
            }
            GateState::Unlocked { enabled: true } => {
                output.push_str(&format!("{}\n", "Instructor Mode ON".green()));
            }
        }
        output
    }
}
