use super::sales::SalesRecord;

pub const QUESTIONS: [&str; 3] = [
    "Which items reach 75% and 50% sold?",
    "Identify best-selling items by category.",
    "Describe slow-moving products.",
];

pub const RECOMMENDATION_PLACEHOLDER: &str =
    "Generated AI-driven recommendations would appear here (requires OpenAI API key).";
pub const MOCKED_NOTICE: &str = "AI integration is currently mocked for this demo.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Answer {
    pub recommendation: String,
    pub notice: String,
}

/// Produces an answer for one executive question over the sales data.
pub trait InsightSource {
    fn answer(&self, question: &str, records: &[SalesRecord]) -> Answer;
}

/// Stands in for a text-generation backend. Never looks at its inputs.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockInsightSource;

impl InsightSource for MockInsightSource {
    fn answer(&self, _question: &str, _records: &[SalesRecord]) -> Answer {
        Answer {
            recommendation: RECOMMENDATION_PLACEHOLDER.into(),
            notice: MOCKED_NOTICE.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Insight {
    /// 1-based position, as shown in the heading.
    pub index: usize,
    pub question: &'static str,
    pub answer: Answer,
}

pub fn insights(source: &dyn InsightSource, records: &[SalesRecord]) -> Vec<Insight> {
    QUESTIONS
        .iter()
        .enumerate()
        .map(|(i, &question)| Insight {
            index: i + 1,
            question,
            answer: source.answer(question, records),
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::sales;

    #[test]
    fn three_questions_in_order() {
        let insights = insights(&MockInsightSource, sales::dataset());
        assert_eq!(
            insights
                .iter()
                .map(|i| (i.index, i.question))
                .collect::<Vec<_>>(),
            [
                (1, "Which items reach 75% and 50% sold?"),
                (2, "Identify best-selling items by category."),
                (3, "Describe slow-moving products."),
            ]
        );
    }

    #[test]
    fn every_answer_is_the_same_placeholder() {
        let first = insights(&MockInsightSource, sales::dataset());
        let again = insights(&MockInsightSource, &[]);
        assert_eq!(first, again);
        for insight in first {
            assert_eq!(insight.answer.recommendation, RECOMMENDATION_PLACEHOLDER);
            assert_eq!(insight.answer.notice, MOCKED_NOTICE);
        }
    }
}
