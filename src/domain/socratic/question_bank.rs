//! Static question tables.
//!
//! Every table is an ordered slice so lookups and iteration are
//! deterministic. The first entry of each category's list is the opening
//! question for that category.

use super::values::{Complexity, Concept};

/// Workflow categories offered in the opening menu, in menu order.
pub const WORKFLOW_CATEGORIES: [&str; 4] = [
    "chatbot",
    "data analysis",
    "RAG workflow",
    "content generation",
];

/// Asked when a category has no question list.
pub const UNKNOWN_CATEGORY_QUESTION: &str =
    "Can you tell me more about what you're trying to accomplish?";

/// Asked when every candidate list is empty.
pub const EMPTY_POOL_QUESTION: &str = "Can you tell me more about that?";

pub const INITIAL_QUESTIONS: &[(&str, &[&str])] = &[
    (
        "chatbot",
        &[
            "What kind of conversations do you want your chatbot to have with users?",
            "Who is your target audience for this chatbot?",
            "What specific problems should your chatbot help users solve?",
            "What tone or personality should your chatbot have?",
        ],
    ),
    (
        "data analysis",
        &[
            "What type of data are you working with?",
            "What insights or patterns are you hoping to discover?",
            "What decisions will this analysis help you make?",
            "How will you be using the results of this analysis?",
        ],
    ),
    (
        "RAG workflow",
        &[
            "What kind of documents or knowledge base will you be searching through?",
            "What types of questions do users need to ask about this information?",
            "How current does the information need to be?",
            "What level of detail should the answers provide?",
        ],
    ),
    (
        "content generation",
        &[
            "What type of content do you want to generate?",
            "Who is the intended audience for this content?",
            "What style or tone should the content have?",
            "What information or inputs will you provide to generate the content?",
        ],
    ),
];

/// Keyword table in detection order.
pub const CONCEPT_KEYWORDS: &[(Concept, &[&str])] = &[
    (
        Concept::Business,
        &["business", "company", "enterprise", "commercial", "revenue"],
    ),
    (
        Concept::Technical,
        &["api", "database", "integration", "technical", "system"],
    ),
    (
        Concept::UserExperience,
        &["user", "experience", "interface", "usability", "design"],
    ),
    (
        Concept::Automation,
        &["automate", "automatic", "workflow", "process", "task"],
    ),
    (
        Concept::RealTime,
        &["real-time", "live", "instant", "immediate", "streaming"],
    ),
    (
        Concept::Security,
        &["secure", "security", "private", "confidential", "protect"],
    ),
    (
        Concept::Scale,
        &["scale", "scalable", "performance", "volume", "growth"],
    ),
];

pub const CONCEPT_QUESTIONS: &[(Concept, &[&str])] = &[
    (
        Concept::Business,
        &[
            "How does this fit into your business goals?",
            "What's the expected business impact or ROI?",
            "Who are the key stakeholders for this project?",
        ],
    ),
    (
        Concept::Technical,
        &[
            "What existing systems does this need to integrate with?",
            "Are there any technical constraints I should know about?",
            "What's your current technical infrastructure like?",
        ],
    ),
    (
        Concept::UserExperience,
        &[
            "What does a successful user interaction look like?",
            "How tech-savvy are your typical users?",
            "What would make this really valuable for your users?",
        ],
    ),
    (
        Concept::Automation,
        &[
            "What manual processes are you hoping to automate?",
            "How often does this process need to run?",
            "What triggers should start this automation?",
        ],
    ),
    (
        Concept::RealTime,
        &[
            "How quickly do you need responses or results?",
            "What happens if there's a delay in processing?",
            "How will users know when new information is available?",
        ],
    ),
    (
        Concept::Security,
        &[
            "What kind of sensitive information will be handled?",
            "What security or compliance requirements do you have?",
            "Who should have access to this system?",
        ],
    ),
    (
        Concept::Scale,
        &[
            "How many users do you expect?",
            "What's the expected volume of data or requests?",
            "How quickly do you anticipate growth?",
        ],
    ),
];

const LOW_COMPLEXITY_FALLBACKS: &[&str] = &[
    "Can you give me a specific example of how you'd use this?",
    "What would success look like to you?",
    "What's the main challenge you're trying to solve?",
];

const GENERAL_FALLBACKS: &[&str] = &[
    "Which part of this is most important to get right?",
    "What would make the biggest difference for your users?",
    "Are there any constraints or limitations I should know about?",
];

/// Questions tailored to an inferred professional domain.
pub const DOMAIN_QUESTIONS: &[(&str, &[&str])] = &[
    (
        "healthcare",
        &[
            "Will this workflow handle protected health information or patient records?",
            "Which clinical systems, such as an EHR, does this need to work with?",
            "Who reviews the output before it reaches patients or clinicians?",
        ],
    ),
    (
        "finance",
        &[
            "Which transactions or financial records will this workflow touch?",
            "What audit or regulatory reporting does this need to support?",
            "How should the workflow handle a transaction that fails validation?",
        ],
    ),
    (
        "technology",
        &[
            "Which APIs or services will this workflow call?",
            "How should the workflow behave when an upstream service is unavailable?",
            "Where will this workflow be deployed and who operates it?",
        ],
    ),
    (
        "manufacturing",
        &[
            "Which production or inventory systems hold the data this needs?",
            "How quickly do changes on the shop floor need to be reflected?",
            "What happens downstream when the supply chain is disrupted?",
        ],
    ),
    (
        "retail",
        &[
            "Which customer touchpoints should this workflow support?",
            "How will this connect to your catalog or CRM data?",
            "What does a successful sale or support interaction look like here?",
        ],
    ),
    (
        "education",
        &[
            "Who are the learners and what level are they at?",
            "How will you assess whether the learning goals are met?",
            "Which course materials or systems should this draw from?",
        ],
    ),
];

fn lookup<K: 'static>(
    table: &'static [(K, &'static [&'static str])],
    matches: impl Fn(&K) -> bool,
) -> Option<&'static [&'static str]> {
    table
        .iter()
        .find(|(key, _)| matches(key))
        .map(|(_, questions)| *questions)
}

/// Question list for a workflow category, if the category is known.
pub fn initial_questions(category: &str) -> Option<&'static [&'static str]> {
    lookup(INITIAL_QUESTIONS, |key| *key == category)
}

/// Follow-up questions for a concept.
pub fn concept_questions(concept: Concept) -> &'static [&'static str] {
    lookup(CONCEPT_QUESTIONS, |key| *key == concept).unwrap_or(&[])
}

/// Generic follow-ups for an answer of the given complexity.
pub fn fallback_questions(complexity: Complexity) -> &'static [&'static str] {
    match complexity {
        Complexity::Low => LOW_COMPLEXITY_FALLBACKS,
        Complexity::Medium | Complexity::High => GENERAL_FALLBACKS,
    }
}

/// Domain question list, if the domain has one.
pub fn domain_questions(domain: &str) -> Option<&'static [&'static str]> {
    lookup(DOMAIN_QUESTIONS, |key| *key == domain)
}

/// The numbered category menu shown at the start of a session.
pub fn category_menu() -> String {
    let mut menu =
        String::from("To get started, please select one of these common workflow categories:\n\n");
    for (i, category) in WORKFLOW_CATEGORIES.iter().enumerate() {
        menu.push_str(&format!("{}. {}\n", i + 1, category));
    }
    menu.push_str("\nWhich category best matches what you'd like to build?");
    menu
}
