//! The module session façade.
//!
//! [`ModuleSession`] owns all mutable session state — navigation mode,
//! guided step index, response store, instructor gate — and wires it to
//! the immutable catalog and the section content source. One instance
//! per logical session; nothing here is a process global.

use crate::ports::content_source::{ContentError, ContentSource};
use casewalk_domain::{
    AnswerValue, ComputedResult, DomainError, GuidedStep, InstructorGate, ModulePayload, Part,
    PartPlaceholders, ProgressSummary, QuestionId, ResponseStore, Section, Segment, TableRow,
    UnlockAttempt, build_guided_steps, build_snapshot, clamp_step_index, extract_placeholders,
    module_progress, part_progress, segment_text, step_for_question,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Navigation mode of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationMode {
    /// Linear step-by-step walk, one question or content block at a time.
    #[default]
    Guided,
    /// Free navigation to any section, all its questions shown at once.
    Jump,
}

impl NavigationMode {
    pub fn label(&self) -> &'static str {
        match self {
            NavigationMode::Guided => "guided",
            NavigationMode::Jump => "jump",
        }
    }
}

/// Mutable session-scoped state, grouped so it can be inspected and
/// reset as one unit.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub mode: NavigationMode,
    pub step_index: usize,
    pub jump_section: Option<Section>,
    pub include_appendices: bool,
    pub responses: ResponseStore,
    pub gate: InstructorGate,
}

/// One user session over a loaded module.
pub struct ModuleSession<C: ContentSource> {
    module: ModulePayload,
    content: Arc<C>,
    unlock_code: Option<String>,
    state: SessionState,
    steps: Vec<GuidedStep>,
}

impl<C: ContentSource> ModuleSession<C> {
    /// Create a session over a validated module.
    ///
    /// Builds the initial guided step list by extracting placeholders
    /// from each part's markdown. A part whose markdown cannot be read
    /// contributes an empty list (the section itself will surface the
    /// content error when rendered).
    pub fn new(module: ModulePayload, content: Arc<C>, unlock_code: Option<String>) -> Self {
        let mut session = Self {
            module,
            content,
            unlock_code,
            state: SessionState::default(),
            steps: Vec::new(),
        };
        session.rebuild_steps();
        info!(
            module_id = %session.module.module_id,
            steps = session.steps.len(),
            "session started"
        );
        session
    }

    pub fn module(&self) -> &ModulePayload {
        &self.module
    }

    // ==================== Guided Steps ====================

    /// Extract the per-part placeholder lists from section markdown.
    fn part_placeholders(&self) -> PartPlaceholders {
        let mut parts = PartPlaceholders::default();
        for part in Part::all() {
            match self.content.load_section(Section::Part(part)) {
                Ok(text) => parts.set(part, extract_placeholders(&text)),
                Err(err) => {
                    warn!(part = %part, %err, "part content unavailable, no question steps");
                    parts.set(part, Vec::new());
                }
            }
        }
        parts
    }

    /// Rebuild the guided step list from current content and toggles.
    ///
    /// Idempotent and side-effect-free apart from re-clamping the step
    /// index, so it is safe to invoke on every refresh.
    pub fn rebuild_steps(&mut self) {
        self.steps = build_guided_steps(&self.part_placeholders(), self.state.include_appendices);
        self.state.step_index = clamp_step_index(&self.steps, self.state.step_index);
        debug!(steps = self.steps.len(), "guided steps rebuilt");
    }

    pub fn steps(&self) -> &[GuidedStep] {
        &self.steps
    }

    pub fn step_index(&self) -> usize {
        self.state.step_index
    }

    /// The step the guided walk currently points at.
    pub fn current_step(&self) -> &GuidedStep {
        // Step 0 (Part 0) always exists, and the index is kept clamped.
        &self.steps[self.state.step_index]
    }

    pub fn next_step(&mut self) -> &GuidedStep {
        self.state.step_index = clamp_step_index(&self.steps, self.state.step_index + 1);
        self.current_step()
    }

    pub fn prev_step(&mut self) -> &GuidedStep {
        self.state.step_index = self.state.step_index.saturating_sub(1);
        self.current_step()
    }

    pub fn goto_step(&mut self, index: usize) -> &GuidedStep {
        self.state.step_index = clamp_step_index(&self.steps, index);
        self.current_step()
    }

    /// Jump the guided walk to the step carrying the given question.
    pub fn goto_question(&mut self, id: &QuestionId) -> Option<usize> {
        let index = step_for_question(&self.steps, id)?;
        self.state.step_index = index;
        Some(index)
    }

    // ==================== Navigation ====================

    pub fn mode(&self) -> NavigationMode {
        self.state.mode
    }

    pub fn set_mode(&mut self, mode: NavigationMode) {
        self.state.mode = mode;
    }

    pub fn include_appendices(&self) -> bool {
        self.state.include_appendices
    }

    /// Toggle appendix steps. Rebuilds the walk; earlier indices are
    /// unaffected because appendix steps only ever append at the tail.
    pub fn set_include_appendices(&mut self, include: bool) {
        if self.state.include_appendices != include {
            self.state.include_appendices = include;
            self.rebuild_steps();
        }
    }

    /// The section currently on screen: the guided step's section, or
    /// the free jump target.
    pub fn current_section(&self) -> Section {
        match self.state.mode {
            NavigationMode::Guided => self.current_step().section,
            NavigationMode::Jump => self.state.jump_section.unwrap_or(Section::PartZero),
        }
    }

    /// Navigate directly to a section. In guided mode the walk moves to
    /// that section's first step; in jump mode it is shown whole.
    pub fn goto_section(&mut self, section: Section) {
        self.state.jump_section = Some(section);
        if self.state.mode == NavigationMode::Guided
            && let Some(index) = self.steps.iter().position(|s| s.section == section)
        {
            self.state.step_index = index;
        }
    }

    /// Load one section's markdown, split into prose and placeholder
    /// segments. A missing file is a recoverable, per-section error.
    pub fn section_segments(&self, section: Section) -> Result<Vec<Segment>, ContentError> {
        self.content.load_section(section).map(|text| segment_text(&text))
    }

    /// Clear the memoized section content (and rebuild the walk, since
    /// the files may have changed underneath).
    pub fn clear_content_cache(&mut self) {
        self.content.clear_cache();
        self.rebuild_steps();
    }

    // ==================== Responses ====================

    fn require_item(&self, id: &QuestionId) -> Result<&casewalk_domain::QuestionItem, DomainError> {
        self.module
            .item(id)
            .ok_or_else(|| DomainError::UnknownQuestion(id.clone()))
    }

    pub fn set_text_answer(&mut self, id: &QuestionId, text: String) -> Result<(), DomainError> {
        self.require_item(id)?;
        self.state.responses.set_answer(id, AnswerValue::Text(text));
        Ok(())
    }

    /// Append one row to a table item's answer.
    pub fn push_row(&mut self, id: &QuestionId, row: TableRow) -> Result<(), DomainError> {
        let item = self.require_item(id)?;
        if !item.item_type.is_table() {
            return Err(DomainError::NotATable { id: id.clone() });
        }
        self.state.responses.push_table_row(id, row);
        Ok(())
    }

    /// Run the compute action on a table item: summarize its current
    /// rows into a computed result stored alongside the answer.
    pub fn compute(&mut self, id: &QuestionId) -> Result<ComputedResult, DomainError> {
        let item = self.require_item(id)?;
        if !item.item_type.is_table() {
            return Err(DomainError::NotATable { id: id.clone() });
        }

        let rows = match self.state.responses.record(id).and_then(|r| r.answer.as_ref()) {
            Some(AnswerValue::Table(rows)) => rows.clone(),
            _ => Vec::new(),
        };
        let computed = ComputedResult::from_rows(&rows);
        self.state.responses.set_computed(id, computed.clone());
        Ok(computed)
    }

    pub fn set_done(&mut self, id: &QuestionId, done: bool) -> Result<(), DomainError> {
        self.require_item(id)?;
        self.state.responses.set_done(id, done);
        Ok(())
    }

    pub fn is_answered(&self, id: &QuestionId) -> bool {
        self.state.responses.is_answered(id)
    }

    pub fn responses(&self) -> &ResponseStore {
        &self.state.responses
    }

    /// The reset action: clears every per-question record.
    pub fn reset_responses(&mut self) {
        self.state.responses.clear();
        info!("responses reset");
    }

    // ==================== Progress ====================

    pub fn progress(&self) -> ProgressSummary {
        module_progress(&self.module, &self.state.responses)
    }

    pub fn part_progress(&self, part: Part) -> ProgressSummary {
        part_progress(&self.module, &self.state.responses, part)
    }

    // ==================== Instructor Gate ====================

    pub fn gate(&self) -> &InstructorGate {
        &self.state.gate
    }

    /// Whether any unlock code is configured at all.
    pub fn unlock_configured(&self) -> bool {
        self.unlock_code.is_some()
    }

    pub fn submit_unlock_code(&mut self, entered: &str) -> UnlockAttempt {
        self.state.gate.submit_code(entered, self.unlock_code.as_deref())
    }

    pub fn set_instructor_enabled(&mut self, enabled: bool) {
        self.state.gate.set_enabled(enabled);
    }

    pub fn lock_instructor(&mut self) {
        self.state.gate.lock();
    }

    /// Whether facilitator notes render right now.
    pub fn instructor_notes_visible(&self) -> bool {
        self.state.gate.notes_visible()
    }

    // ==================== Export ====================

    /// Pure snapshot of the session; repeated calls mutate nothing.
    pub fn snapshot(&self, exported_at: impl Into<String>) -> casewalk_domain::ExportSnapshot {
        build_snapshot(
            &self.module,
            &self.state.responses,
            self.state.mode.label(),
            self.current_section().label(),
            exported_at,
        )
    }
}
