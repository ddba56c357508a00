//! Fixed question banks served to the apps.
//!
//! PHQ-9 and GAD-7 use the standard wording with the usual 0-3 frequency scale. FSFI
//! items follow the published 19-item questionnaire; each item carries its own scale.

use crate::models::{PcosQuestion, QuestionOption, QuestionnaireTest, TestQuestion};

pub const PHQ9: &str = "phq9";
pub const GAD7: &str = "gad7";
pub const FSFI: &str = "fsfi";

pub const PCOS_QUESTIONS: [PcosQuestion; 8] = [
    PcosQuestion { id: "q1", question: "Do you have irregular periods?", kind: "yes_no" },
    PcosQuestion { id: "q2", question: "Do you experience excessive hair growth?", kind: "yes_no" },
    PcosQuestion { id: "q3", question: "Do you have acne or oily skin?", kind: "yes_no" },
    PcosQuestion { id: "q4", question: "Have you experienced weight gain?", kind: "yes_no" },
    PcosQuestion { id: "q5", question: "Do you have difficulty losing weight?", kind: "yes_no" },
    PcosQuestion { id: "q6", question: "Do you experience hair thinning or hair loss?", kind: "yes_no" },
    PcosQuestion { id: "q7", question: "Do you have darkening of skin in body folds?", kind: "yes_no" },
    PcosQuestion { id: "q8", question: "Have you been diagnosed with insulin resistance?", kind: "yes_no" },
];

const FREQUENCY: [QuestionOption; 4] = [
    QuestionOption { label: "Not at all", value: 0 },
    QuestionOption { label: "Several days", value: 1 },
    QuestionOption { label: "More than half the days", value: 2 },
    QuestionOption { label: "Nearly every day", value: 3 },
];

const PHQ9_ITEMS: [&str; 9] = [
    "Little interest or pleasure in doing things",
    "Feeling down, depressed, or hopeless",
    "Trouble falling or staying asleep, or sleeping too much",
    "Feeling tired or having little energy",
    "Poor appetite or overeating",
    "Feeling bad about yourself, or that you are a failure or have let yourself or your family down",
    "Trouble concentrating on things, such as reading the newspaper or watching television",
    "Moving or speaking so slowly that other people could have noticed, or the opposite, being so fidgety or restless that you have been moving around a lot more than usual",
    "Thoughts that you would be better off dead, or of hurting yourself in some way",
];

const GAD7_ITEMS: [&str; 7] = [
    "Feeling nervous, anxious, or on edge",
    "Not being able to stop or control worrying",
    "Worrying too much about different things",
    "Trouble relaxing",
    "Being so restless that it is hard to sit still",
    "Becoming easily annoyed or irritable",
    "Feeling afraid, as if something awful might happen",
];

/// (question, lowest option value). Every FSFI scale tops out at 5.
const FSFI_ITEMS: [(&str, i64); 19] = [
    ("How often did you feel sexual desire or interest?", 1),
    ("How would you rate your level of sexual desire or interest?", 1),
    ("How often did you feel sexually aroused during sexual activity or intercourse?", 0),
    ("How would you rate your level of sexual arousal during sexual activity or intercourse?", 0),
    ("How confident were you about becoming sexually aroused during sexual activity or intercourse?", 0),
    ("How often have you been satisfied with your arousal during sexual activity or intercourse?", 0),
    ("How often did you become lubricated during sexual activity or intercourse?", 0),
    ("How difficult was it to become lubricated during sexual activity or intercourse?", 0),
    ("How often did you maintain your lubrication until completion of sexual activity or intercourse?", 0),
    ("How difficult was it to maintain your lubrication until completion of sexual activity or intercourse?", 0),
    ("When you had sexual stimulation or intercourse, how often did you reach orgasm?", 0),
    ("When you had sexual stimulation or intercourse, how difficult was it for you to reach orgasm?", 0),
    ("How satisfied were you with your ability to reach orgasm during sexual activity or intercourse?", 0),
    ("How satisfied have you been with the amount of emotional closeness during sexual activity between you and your partner?", 0),
    ("How satisfied have you been with your sexual relationship with your partner?", 1),
    ("How satisfied have you been with your overall sexual life?", 1),
    ("How often did you experience discomfort or pain during vaginal penetration?", 0),
    ("How often did you experience discomfort or pain following vaginal penetration?", 0),
    ("How would you rate your level of discomfort or pain during or following vaginal penetration?", 0),
];

const SCALE_LABELS: [&str; 6] = ["0", "1", "2", "3", "4", "5"];

fn numbered(prefix: &str, items: &[&'static str], options: &[QuestionOption]) -> Vec<TestQuestion> {
    items
        .iter()
        .enumerate()
        .map(|(i, text)| TestQuestion {
            id: format!("{}{}", prefix, i + 1),
            question_text: *text,
            response_type: "scale",
            options: options.to_vec(),
        })
        .collect()
}

pub fn phq9() -> QuestionnaireTest {
    QuestionnaireTest {
        name: PHQ9,
        display_name: "PHQ-9 Depression Test",
        description: "Patient Health Questionnaire for depression screening",
        questions: numbered("q", &PHQ9_ITEMS, &FREQUENCY),
    }
}

pub fn gad7() -> QuestionnaireTest {
    QuestionnaireTest {
        name: GAD7,
        display_name: "GAD-7 Anxiety Test",
        description: "Generalized Anxiety Disorder 7-item scale",
        questions: numbered("q", &GAD7_ITEMS, &FREQUENCY),
    }
}

pub fn fsfi() -> QuestionnaireTest {
    let questions = FSFI_ITEMS
        .iter()
        .enumerate()
        .map(|(i, (text, min))| TestQuestion {
            id: format!("q{}", i + 1),
            question_text: *text,
            response_type: "scale",
            options: (*min..=5)
                .map(|value| QuestionOption {
                    label: SCALE_LABELS[value as usize],
                    value,
                })
                .collect(),
        })
        .collect();

    QuestionnaireTest {
        name: FSFI,
        display_name: "Female Sexual Function Index (FSFI)",
        description: "Assessment of female sexual function",
        questions,
    }
}

/// Tests offered under the mental-health section.
pub fn mental_health_tests() -> Vec<QuestionnaireTest> {
    vec![phq9(), gad7()]
}
