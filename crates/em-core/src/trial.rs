//! The per-judge trial state machine.
//!
//! A trial advances `Unmet -> Greeted -> InProgress(i) -> Completed(verdict)`.
//! Greeting is required before the trial can start. Each answer scores +10
//! (acceptable) or -5 (not), and the cursor advances by exactly one per
//! submission regardless of correctness — every question is answerable
//! exactly once. When the last question has been answered the trust level
//! binds a [`Verdict`] and the trial becomes immutable.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::question::Question;

/// Trust awarded for an acceptable answer.
pub const TRUST_CORRECT: i32 = 10;
/// Trust deducted for an unacceptable answer.
pub const TRUST_INCORRECT: i32 = 5;

/// The verdict tier a completed trial binds from its trust level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Trust 25 or higher: the judge is convinced.
    Approved,
    /// Trust 15 to 24: doubts remain, but the trial is passed.
    Acceptable,
    /// Trust below 15: the trial is failed.
    Rejected,
}

impl Verdict {
    /// Bind a verdict tier from a final trust level.
    pub fn from_trust(trust: i32) -> Self {
        if trust >= 25 {
            Self::Approved
        } else if trust >= 15 {
            Self::Acceptable
        } else {
            Self::Rejected
        }
    }

    /// Whether this verdict passes the trial.
    pub fn passed(&self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Approved => write!(f, "approved"),
            Self::Acceptable => write!(f, "acceptable"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

/// The lifecycle phase of a trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialPhase {
    /// The judge has not been greeted yet.
    Unmet,
    /// Greeted; the trial may start.
    Greeted,
    /// Question `i` is awaiting an answer.
    InProgress(usize),
    /// All questions answered; the verdict is bound.
    Completed(Verdict),
}

/// One judge's trial: a question sequence and a trust counter.
#[derive(Debug, Clone)]
pub struct Trial {
    judge: String,
    greeting: String,
    questions: Vec<Question>,
    trust: i32,
    phase: TrialPhase,
}

impl Trial {
    /// Create a trial for a judge. Errors if the question sequence is empty.
    pub fn new(
        judge: impl Into<String>,
        greeting: impl Into<String>,
        questions: Vec<Question>,
    ) -> CoreResult<Self> {
        let judge = judge.into();
        if questions.is_empty() {
            return Err(CoreError::EmptyTrial(judge));
        }
        Ok(Self {
            judge,
            greeting: greeting.into(),
            questions,
            trust: 0,
            phase: TrialPhase::Unmet,
        })
    }

    /// The judge's name.
    pub fn judge(&self) -> &str {
        &self.judge
    }

    /// The accumulated trust level.
    pub fn trust(&self) -> i32 {
        self.trust
    }

    /// The current lifecycle phase.
    pub fn phase(&self) -> TrialPhase {
        self.phase
    }

    /// Whether the trial has reached its verdict.
    pub fn is_completed(&self) -> bool {
        matches!(self.phase, TrialPhase::Completed(_))
    }

    /// Whether the trial completed with a passing verdict.
    pub fn is_passed(&self) -> bool {
        matches!(self.phase, TrialPhase::Completed(v) if v.passed())
    }

    /// Whether the trial is waiting for an answer.
    pub fn is_awaiting_answer(&self) -> bool {
        matches!(self.phase, TrialPhase::InProgress(_))
    }

    /// Greet the judge. The first greeting is the irreversible
    /// `Unmet -> Greeted` transition; later greetings change nothing.
    pub fn greet(&mut self) -> String {
        match self.phase {
            TrialPhase::Unmet => {
                self.phase = TrialPhase::Greeted;
                self.greeting.clone()
            }
            _ => format!(
                "{} inclines their head. You have already been introduced.",
                self.judge
            ),
        }
    }

    /// Start the trial. Requires a prior greeting; emits the first question.
    pub fn begin(&mut self) -> String {
        match self.phase {
            TrialPhase::Unmet => format!(
                "{} regards you coldly. \"You must first greet me, traveler. \
                 We do not test the rude.\"",
                self.judge
            ),
            TrialPhase::Greeted => {
                self.phase = TrialPhase::InProgress(0);
                format!(
                    "\"Then we begin. Answer honestly.\"\n\n{}",
                    self.questions[0].render()
                )
            }
            TrialPhase::InProgress(_) => {
                format!("{} is already testing you. Answer the question.", self.judge)
            }
            TrialPhase::Completed(_) => format!("{} has already tested you.", self.judge),
        }
    }

    /// Submit an answer to the current question.
    ///
    /// Outside `InProgress` this is a no-op returning a corrective message.
    pub fn submit(&mut self, answer: &str) -> String {
        match self.phase {
            TrialPhase::InProgress(i) => {
                let correct = self.questions[i].check(answer);
                let ack = if correct {
                    self.trust += TRUST_CORRECT;
                    format!("{} nods slowly.", self.judge)
                } else {
                    self.trust -= TRUST_INCORRECT;
                    format!("{}'s expression hardens.", self.judge)
                };

                let next = i + 1;
                if next == self.questions.len() {
                    let verdict = Verdict::from_trust(self.trust);
                    self.phase = TrialPhase::Completed(verdict);
                    format!("{ack}\n\n{}", self.verdict_text(verdict))
                } else {
                    self.phase = TrialPhase::InProgress(next);
                    format!("{ack}\n\n{}", self.questions[next].render())
                }
            }
            TrialPhase::Completed(_) => format!("{} has already tested you.", self.judge),
            _ => format!("{} has not asked you anything yet.", self.judge),
        }
    }

    fn verdict_text(&self, verdict: Verdict) -> String {
        let line = match verdict {
            Verdict::Approved => "\"I am convinced. Your mind rings true. You may pass.\"",
            Verdict::Acceptable => {
                "\"I still hold doubts... but you have done enough. You may pass.\""
            }
            Verdict::Rejected => "\"No. You have failed my trial. I will not speak for you.\"",
        };
        format!("The questions are finished. {} rises. {line}", self.judge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions() -> Vec<Question> {
        vec![
            Question::open("q1", vec!["alpha"]),
            Question::open("q2", vec!["beta"]),
            Question::open("q3", vec!["gamma"]),
            Question::open("q4", vec!["delta"]),
        ]
    }

    fn trial() -> Trial {
        Trial::new("Zyx", "Zyx bows. \"Welcome, traveler.\"", questions()).unwrap()
    }

    #[test]
    fn empty_questions_rejected() {
        let err = Trial::new("Zyx", "hi", vec![]).unwrap_err();
        assert!(err.to_string().contains("no questions"));
    }

    #[test]
    fn greet_is_irreversible() {
        let mut t = trial();
        assert_eq!(t.phase(), TrialPhase::Unmet);

        let first = t.greet();
        assert!(first.contains("Welcome"));
        assert_eq!(t.phase(), TrialPhase::Greeted);

        let again = t.greet();
        assert!(again.contains("already been introduced"));
        assert_eq!(t.phase(), TrialPhase::Greeted);
    }

    #[test]
    fn begin_before_greet_is_refused() {
        let mut t = trial();
        let reply = t.begin();
        assert!(reply.contains("must first greet"));
        assert_eq!(t.phase(), TrialPhase::Unmet);
    }

    #[test]
    fn begin_emits_first_question() {
        let mut t = trial();
        t.greet();
        let reply = t.begin();
        assert!(reply.contains("q1"));
        assert_eq!(t.phase(), TrialPhase::InProgress(0));
    }

    #[test]
    fn scoring_and_cursor() {
        let mut t = trial();
        t.greet();
        t.begin();

        t.submit("alpha");
        assert_eq!(t.trust(), 10);
        assert_eq!(t.phase(), TrialPhase::InProgress(1));

        t.submit("wrong");
        assert_eq!(t.trust(), 5);
        assert_eq!(t.phase(), TrialPhase::InProgress(2));
    }

    #[test]
    fn scenario_three_correct_one_wrong_passes() {
        let mut t = trial();
        t.greet();
        t.begin();
        t.submit("alpha");
        t.submit("beta");
        t.submit("gamma");
        let reply = t.submit("wrong");

        assert_eq!(t.trust(), 25);
        assert_eq!(t.phase(), TrialPhase::Completed(Verdict::Approved));
        assert!(t.is_passed());
        assert!(reply.contains("You may pass"));
    }

    #[test]
    fn all_wrong_is_rejected() {
        let mut t = trial();
        t.greet();
        t.begin();
        for _ in 0..4 {
            t.submit("wrong");
        }
        assert_eq!(t.trust(), -20);
        assert_eq!(t.phase(), TrialPhase::Completed(Verdict::Rejected));
        assert!(!t.is_passed());
        assert!(t.is_completed());
    }

    #[test]
    fn completed_is_terminal() {
        let mut t = trial();
        t.greet();
        t.begin();
        for _ in 0..4 {
            t.submit("alpha");
        }
        let trust_before = t.trust();

        let reply = t.submit("alpha");
        assert!(reply.contains("already tested"));
        assert_eq!(t.trust(), trust_before);

        let reply = t.begin();
        assert!(reply.contains("already tested"));
    }

    #[test]
    fn submit_before_start_is_noop() {
        let mut t = trial();
        let reply = t.submit("alpha");
        assert!(reply.contains("not asked you anything"));
        assert_eq!(t.trust(), 0);
        assert_eq!(t.phase(), TrialPhase::Unmet);
    }

    #[test]
    fn verdict_thresholds() {
        assert_eq!(Verdict::from_trust(25), Verdict::Approved);
        assert_eq!(Verdict::from_trust(24), Verdict::Acceptable);
        assert_eq!(Verdict::from_trust(15), Verdict::Acceptable);
        assert_eq!(Verdict::from_trust(14), Verdict::Rejected);
        assert_eq!(Verdict::from_trust(-20), Verdict::Rejected);
        assert!(Verdict::Acceptable.passed());
        assert!(!Verdict::Rejected.passed());
    }
}
