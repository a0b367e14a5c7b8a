//! Subscale scoring of a completed inventory.
//!
//! Every `true` answer scores one point for the subscale the item belongs
//! to. Unanswered items score nothing and are counted separately.

use std::fmt;

use mai_survey::{Completion, InfoRecord, QuestionId, ResultsStage};
use serde::Serialize;

/// The two top-level factors of the inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    KnowledgeOfCognition,
    RegulationOfCognition,
}

impl Factor {
    pub const ALL: [Factor; 2] = [Self::KnowledgeOfCognition, Self::RegulationOfCognition];

    pub fn name(self) -> &'static str {
        match self {
            Self::KnowledgeOfCognition => "Knowledge of cognition",
            Self::RegulationOfCognition => "Regulation of cognition",
        }
    }
}

/// The eight subscales; together they cover all 52 items exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Subscale {
    DeclarativeKnowledge,
    ProceduralKnowledge,
    ConditionalKnowledge,
    Planning,
    InformationManagement,
    ComprehensionMonitoring,
    Debugging,
    Evaluation,
}

impl Subscale {
    pub const ALL: [Subscale; 8] = [
        Self::DeclarativeKnowledge,
        Self::ProceduralKnowledge,
        Self::ConditionalKnowledge,
        Self::Planning,
        Self::InformationManagement,
        Self::ComprehensionMonitoring,
        Self::Debugging,
        Self::Evaluation,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::DeclarativeKnowledge => "Declarative knowledge",
            Self::ProceduralKnowledge => "Procedural knowledge",
            Self::ConditionalKnowledge => "Conditional knowledge",
            Self::Planning => "Planning",
            Self::InformationManagement => "Information management",
            Self::ComprehensionMonitoring => "Comprehension monitoring",
            Self::Debugging => "Debugging strategies",
            Self::Evaluation => "Evaluation",
        }
    }

    pub fn factor(self) -> Factor {
        match self {
            Self::DeclarativeKnowledge | Self::ProceduralKnowledge | Self::ConditionalKnowledge => {
                Factor::KnowledgeOfCognition
            }
            _ => Factor::RegulationOfCognition,
        }
    }

    /// Item numbers belonging to this subscale.
    pub fn items(self) -> &'static [u32] {
        match self {
            Self::DeclarativeKnowledge => &[5, 10, 12, 16, 17, 20, 32, 46],
            Self::ProceduralKnowledge => &[3, 14, 27, 33],
            Self::ConditionalKnowledge => &[15, 18, 26, 29, 35],
            Self::Planning => &[4, 6, 8, 22, 23, 42, 45],
            Self::InformationManagement => &[9, 13, 30, 31, 37, 39, 41, 43, 47, 48],
            Self::ComprehensionMonitoring => &[1, 2, 11, 21, 28, 34, 49],
            Self::Debugging => &[25, 40, 44, 51, 52],
            Self::Evaluation => &[7, 19, 24, 36, 38, 50],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubscaleScore {
    pub subscale: Subscale,
    pub score: usize,
    pub max: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FactorScore {
    pub factor: Factor,
    pub score: usize,
    pub max: usize,
}

/// Scores of one completed inventory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    pub info: InfoRecord,
    pub subscales: Vec<SubscaleScore>,
    pub factors: Vec<FactorScore>,
    pub total: usize,
    pub max: usize,
    pub unanswered: usize,
}

impl ScoreReport {
    pub fn subscale(&self, subscale: Subscale) -> Option<&SubscaleScore> {
        self.subscales.iter().find(|entry| entry.subscale == subscale)
    }

    pub fn factor(&self, factor: Factor) -> Option<&FactorScore> {
        self.factors.iter().find(|entry| entry.factor == factor)
    }
}

impl fmt::Display for ScoreReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} (age {}, {}, grade {})",
            self.info.name(),
            self.info.age(),
            self.info.school(),
            self.info.grade()
        )?;
        for factor in &self.factors {
            writeln!(f, "{}: {}/{}", factor.factor.name(), factor.score, factor.max)?;
            for entry in self
                .subscales
                .iter()
                .filter(|entry| entry.subscale.factor() == factor.factor)
            {
                writeln!(f, "  {:<26} {:>2}/{}", entry.subscale.name(), entry.score, entry.max)?;
            }
        }
        write!(f, "Total: {}/{}", self.total, self.max)?;
        if self.unanswered > 0 {
            write!(f, " ({} unanswered)", self.unanswered)?;
        }
        Ok(())
    }
}

/// Results stage for the inventory.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaiScoring;

impl ResultsStage for MaiScoring {
    type Report = ScoreReport;

    fn evaluate(&self, completion: &Completion) -> ScoreReport {
        let answers = &completion.answers;

        let subscales: Vec<SubscaleScore> = Subscale::ALL
            .into_iter()
            .map(|subscale| SubscaleScore {
                subscale,
                score: subscale
                    .items()
                    .iter()
                    .filter(|&&item| answers.get(QuestionId::new(item)) == Some(true))
                    .count(),
                max: subscale.items().len(),
            })
            .collect();

        let factors = Factor::ALL
            .into_iter()
            .map(|factor| {
                let (score, max) = subscales
                    .iter()
                    .filter(|entry| entry.subscale.factor() == factor)
                    .fold((0, 0), |(score, max), entry| {
                        (score + entry.score, max + entry.max)
                    });
                FactorScore { factor, score, max }
            })
            .collect();

        ScoreReport {
            info: completion.info.clone(),
            total: subscales.iter().map(|entry| entry.score).sum(),
            max: subscales.iter().map(|entry| entry.max).sum(),
            subscales,
            factors,
            unanswered: answers.unanswered().count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use mai_survey::{AnswerVector, InfoField};

    use super::*;
    use crate::ITEM_COUNT;

    fn completion(answer: impl Fn(u32) -> Option<bool>) -> Completion {
        let mut answers = AnswerVector::new(ITEM_COUNT);
        for id in 1..=ITEM_COUNT as u32 {
            if let Some(value) = answer(id) {
                answers.set(QuestionId::new(id), value).unwrap();
            }
        }
        let mut info = InfoRecord::new();
        info.set(InfoField::Name, "Mina");
        Completion { answers, info }
    }

    #[test]
    fn subscales_partition_items() {
        let mut seen = HashSet::new();
        for subscale in Subscale::ALL {
            for &item in subscale.items() {
                assert!(seen.insert(item), "item {item} listed twice");
            }
        }
        assert_eq!(seen.len(), ITEM_COUNT);
        assert!(seen.iter().all(|item| (1..=ITEM_COUNT as u32).contains(item)));
    }

    #[test]
    fn all_true_scores_maximum() {
        let report = MaiScoring.evaluate(&completion(|_| Some(true)));

        assert_eq!(report.total, 52);
        assert_eq!(report.max, 52);
        assert_eq!(report.unanswered, 0);
        assert_eq!(
            report.factor(Factor::KnowledgeOfCognition).map(|f| (f.score, f.max)),
            Some((17, 17))
        );
        assert_eq!(
            report.factor(Factor::RegulationOfCognition).map(|f| (f.score, f.max)),
            Some((35, 35))
        );
    }

    #[test]
    fn false_and_unanswered_score_nothing() {
        let report = MaiScoring.evaluate(&completion(|id| match id {
            3 | 14 => Some(true),
            1..=20 => Some(false),
            _ => None,
        }));

        assert_eq!(report.total, 2);
        assert_eq!(report.unanswered, 32);
        assert_eq!(
            report.subscale(Subscale::ProceduralKnowledge).map(|s| s.score),
            Some(2)
        );
        assert_eq!(report.subscale(Subscale::Planning).map(|s| s.score), Some(0));
    }

    #[test]
    fn display_lists_every_subscale() {
        let text = MaiScoring.evaluate(&completion(|_| Some(false))).to_string();

        assert!(text.starts_with("Mina"));
        for subscale in Subscale::ALL {
            assert!(text.contains(subscale.name()), "missing {}", subscale.name());
        }
        assert!(text.ends_with("Total: 0/52"));
    }
}
