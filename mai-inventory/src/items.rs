use mai_survey::{Catalog, CatalogError, Question};

/// Number of items in the inventory.
pub const ITEM_COUNT: usize = 52;

/// `(short, long)` prompts in item order; item `n` is at index `n - 1`.
const ITEMS: [(&str, &str); ITEM_COUNT] = [
    ("Goal check", "I ask myself periodically if I am meeting my goals."),
    ("Alternatives", "I consider several alternatives to a problem before I answer."),
    ("Proven strategies", "I try to use strategies that have worked in the past."),
    ("Pacing", "I pace myself while learning in order to have enough time."),
    ("Strengths and weaknesses", "I understand my intellectual strengths and weaknesses."),
    ("Learning needs", "I think about what I really need to learn before I begin a task."),
    ("Test outcome", "I know how well I did once I finish a test."),
    ("Specific goals", "I set specific goals before I begin a task."),
    ("Slowing down", "I slow down when I encounter important information."),
    ("Important information", "I know what kind of information is most important to learn."),
    ("All options", "I ask myself if I have considered all options when solving a problem."),
    ("Organizing", "I am good at organizing information."),
    ("Focused attention", "I consciously focus my attention on important information."),
    ("Strategy purpose", "I have a specific purpose for each strategy I use."),
    ("Prior knowledge", "I learn best when I know something about the topic."),
    ("Expectations", "I know what the teacher expects me to learn."),
    ("Remembering", "I am good at remembering information."),
    ("Situational strategies", "I use different learning strategies depending on the situation."),
    ("Easier way", "I ask myself if there was an easier way to do things after I finish a task."),
    ("Control", "I have control over how well I learn."),
    ("Periodic review", "I periodically review to help me understand important relationships."),
    ("Questions first", "I ask myself questions about the material before I begin."),
    ("Several solutions", "I think of several ways to solve a problem and choose the best one."),
    ("Summarizing", "I summarize what I've learned after I finish."),
    ("Asking for help", "I ask others for help when I don't understand something."),
    ("Self-motivation", "I can motivate myself to learn when I need to."),
    ("Strategy awareness", "I am aware of what strategies I use when I study."),
    ("Strategy usefulness", "I find myself analyzing the usefulness of strategies while I study."),
    ("Compensating", "I use my intellectual strengths to compensate for my weaknesses."),
    ("Meaning", "I focus on the meaning and significance of new information."),
    ("Own examples", "I create my own examples to make information more meaningful."),
    ("Judging understanding", "I am a good judge of how well I understand something."),
    ("Automatic strategies", "I find myself using helpful learning strategies automatically."),
    ("Comprehension pauses", "I find myself pausing regularly to check my comprehension."),
    ("Strategy timing", "I know when each strategy I use will be most effective."),
    ("Goal accomplishment", "I ask myself how well I accomplish my goals once I'm finished."),
    ("Diagrams", "I draw pictures or diagrams to help me understand while learning."),
    (
        "Options afterwards",
        "I ask myself if I have considered all options after I solve a problem.",
    ),
    ("Own words", "I try to translate new information into my own words."),
    ("Changing strategies", "I change strategies when I fail to understand."),
    ("Text structure", "I use the organizational structure of the text to help me learn."),
    ("Instructions", "I read instructions carefully before I begin a task."),
    ("Relating", "I ask myself if what I'm reading is related to what I already know."),
    ("Reevaluating", "I reevaluate my assumptions when I get confused."),
    ("Time organization", "I organize my time to best accomplish my goals."),
    ("Interest", "I learn more when I am interested in the topic."),
    ("Small steps", "I try to break studying down into smaller steps."),
    ("Overall meaning", "I focus on overall meaning rather than specifics."),
    (
        "Progress questions",
        "I ask myself questions about how well I am doing while I am learning something new.",
    ),
    ("Learned enough", "I ask myself if I learned as much as I could have once I finish a task."),
    ("Going back", "I stop and go back over new information that is not clear."),
    ("Rereading", "I stop and reread when I get confused."),
];

/// Build the inventory catalog, items numbered `1..=52`.
pub fn catalog() -> Result<Catalog, CatalogError> {
    Catalog::new(
        ITEMS
            .iter()
            .zip(1u32..)
            .map(|(&(short, long), id)| Question::new(id, short, long))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use mai_survey::QuestionId;

    #[test]
    fn catalog_is_dense() {
        let catalog = catalog().unwrap();
        assert_eq!(catalog.len(), ITEM_COUNT);
        assert_eq!(
            catalog.get(QuestionId::new(52)).map(Question::prompt_short),
            Some("Rereading")
        );
    }

    #[test]
    fn prompts_are_filled_in() {
        for question in &catalog().unwrap() {
            assert!(!question.prompt_short().is_empty());
            assert!(question.prompt_long().starts_with('I'));
            assert!(question.prompt_long().ends_with('.'));
        }
    }
}
