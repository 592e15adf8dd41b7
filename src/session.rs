use crate::model::Question;
use std::collections::BTreeMap;

/// What the learner can do with the current question.
///
/// `Selecting` carries the not-yet-submitted choice, `Locked` means the
/// answer was submitted and correctness is revealed, `Completed` means the
/// last question's result has been acknowledged. Invalid combinations like
/// "locked but nothing selected" cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Selecting { pending: Option<usize> },
    Locked,
    Completed,
}

/// Result of an [`QuizSession::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Not in `Locked`, nothing happened.
    Ignored,
    /// Moved on to the next question.
    Next,
    /// That was the last question; the session is now `Completed`.
    Finished,
}

/// One quiz attempt. Holds a snapshot of the questions taken at creation,
/// so later bank changes never affect a session in flight. Never persisted;
/// dropping it mid-attempt loses nothing durable.
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    selections: BTreeMap<usize, usize>, // question index -> submitted option
    phase: Phase,
}

impl QuizSession {
    /// An empty question list is a valid terminal state: the session starts
    /// out `Completed` with a 0/0 score.
    pub fn new(questions: Vec<Question>) -> Self {
        let phase = if questions.is_empty() {
            Phase::Completed
        } else {
            Phase::Selecting { pending: None }
        };
        QuizSession {
            questions,
            current: 0,
            selections: BTreeMap::new(),
            phase,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total(&self) -> u32 {
        self.questions.len() as u32
    }

    /// 0-based index of the question on screen.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The choice picked but not yet submitted, if any.
    pub fn pending(&self) -> Option<usize> {
        match self.phase {
            Phase::Selecting { pending } => pending,
            _ => None,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.phase == Phase::Locked
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Completed
    }

    /// The frozen selection for a question, present only once submitted.
    pub fn selection(&self, index: usize) -> Option<usize> {
        self.selections.get(&index).copied()
    }

    /// Whether the submitted answer for `index` matched. `None` until that
    /// question has been submitted.
    pub fn answered_correctly(&self, index: usize) -> Option<bool> {
        let picked = self.selection(index)?;
        let q = self.questions.get(index)?;
        Some(picked == q.correct)
    }

    /// Pick (or re-pick) an option for the current question. Ignored once
    /// the answer is locked or the session is over; the option index itself
    /// must be in range for the current question.
    pub fn select_option(&mut self, option: usize) {
        let Phase::Selecting { pending } = &mut self.phase else {
            return;
        };
        let q = &self.questions[self.current];
        assert!(
            option < q.options.len(),
            "option index {option} out of range for question {}",
            self.current
        );
        *pending = Some(option);
    }

    /// Freeze the pending choice and reveal correctness. Returns whether the
    /// answer was right, or `None` when there was nothing to submit (no
    /// pending choice, already locked, or finished).
    pub fn submit_answer(&mut self) -> Option<bool> {
        let Phase::Selecting {
            pending: Some(choice),
        } = self.phase
        else {
            return None;
        };
        self.selections.insert(self.current, choice);
        self.phase = Phase::Locked;
        Some(choice == self.questions[self.current].correct)
    }

    /// Acknowledge the revealed answer and move on. Only valid in `Locked`;
    /// on the last question this completes the session.
    pub fn advance(&mut self) -> Advance {
        if self.phase != Phase::Locked {
            return Advance::Ignored;
        }
        if self.current + 1 >= self.questions.len() {
            self.phase = Phase::Completed;
            Advance::Finished
        } else {
            self.current += 1;
            self.phase = Phase::Selecting { pending: None };
            Advance::Next
        }
    }

    /// Start over on the same question snapshot. Valid mid-session or from
    /// `Completed`; clears every selection and does not touch stored
    /// progress.
    pub fn retake(&mut self) {
        self.selections.clear();
        self.current = 0;
        self.phase = if self.questions.is_empty() {
            Phase::Completed
        } else {
            Phase::Selecting { pending: None }
        };
    }

    /// Count of submitted answers matching their question. Unanswered
    /// questions simply don't count; callable in any phase.
    pub fn score(&self) -> u32 {
        self.selections
            .iter()
            .filter(|(idx, picked)| {
                self.questions
                    .get(**idx)
                    .is_some_and(|q| q.correct == **picked)
            })
            .count() as u32
    }

    /// Score as a percentage of the question count; 0 for an empty session.
    pub fn percentage(&self) -> f32 {
        crate::stats::percentage(self.score(), self.total())
    }

    /// Fraction of questions already dealt with, for the progress bar.
    pub fn progress_fraction(&self) -> f32 {
        if self.questions.is_empty() {
            return 1.0;
        }
        self.current as f32 / self.questions.len() as f32
    }
}
