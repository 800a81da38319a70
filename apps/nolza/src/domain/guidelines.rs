//! Responsible-drinking guidelines shown on their own screen.

use serde::Serialize;

pub const GUIDELINES_TITLE: &str = "Guidelines for Responsible and Mindful Social Drinking";

/// Home-screen banner that links to the guidelines.
pub const GUIDELINES_BANNER: &str = "Drink Responsibly and Mindfully";

pub const GUIDELINES_INTRO: &str = "Social drinking should always be safe, respectful, and enjoyable for everyone. To help ensure a positive experience, please follow these guidelines:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Guideline {
    pub id: &'static str,
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
}

pub const GUIDELINES: [Guideline; 6] = [
    Guideline {
        id: "drink-legally",
        title: "I. Drink Legally",
        paragraphs: &[
            "Always respect the legal drinking age in your country. Underage drinking is both unsafe and illegal.",
            "If you notice someone underage drinking, encourage them to stop and seek help from a responsible adult if necessary. Never provide alcohol to anyone underage.",
            "Drinking legally helps keep everyone safe and avoids serious legal consequences.",
        ],
    },
    Guideline {
        id: "avoid-driving",
        title: "II. Avoid Driving Under the Influence",
        paragraphs: &[
            "Never drink and drive. If you plan to drink, arrange a safe way home, such as a designated driver, taxi, or rideshare service.",
            "If you see someone attempting to drive while impaired, intervene safely: offer alternative transportation or contact someone who can help. Protecting yourself and others should always be your top priority.",
        ],
    },
    Guideline {
        id: "stay-hydrated",
        title: "III. Stay Hydrated",
        paragraphs: &[
            "Drink water throughout the event to maintain balance and well-being. Alternating alcoholic drinks with non-alcoholic beverages is strongly encouraged.",
        ],
    },
    Guideline {
        id: "respect-limits",
        title: "IV. Know and Respect Personal Limits",
        paragraphs: &[
            "Listen to your body and understand your alcohol tolerance. Pace yourself, take breaks when needed, and stop drinking if you feel unwell or unsafe.",
            "Drinking games are meant to be fun for everyone. No one should feel pressured to binge drink, or even to drink alcohol at all. Substituting alcoholic beverages with non-alcoholic alternatives during games is a great way to prevent overconsumption.",
        ],
    },
    Guideline {
        id: "prioritize-safety",
        title: "V. Prioritize Safety, Consent, and Inclusion",
        paragraphs: &[
            "All participants should feel safe, respected, and in control. Drinking games should focus on shared enjoyment, not peer pressure or risky behavior.",
            "Never pressure anyone to drink or participate. Respect everyone's boundaries and ensure all activities are safe and fully consensual.",
        ],
    },
    Guideline {
        id: "foster-inclusive",
        title: "VI. Foster a Respectful and Inclusive Social Environment",
        paragraphs: &[
            "A positive social environment makes drinking games enjoyable for everyone. Celebrate connections, not consumption.",
            "Encourage participation without judgment, and respect choices to abstain from alcohol or replace it with non-alcoholic alternatives. Honoring everyone's decisions ensures all participants feel included and comfortable.",
        ],
    },
];

/// Look up a guideline by id or by its 1-based position.
pub fn find_guideline(key: &str) -> Option<&'static Guideline> {
    let key = key.trim();
    if let Ok(n) = key.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| GUIDELINES.get(i));
    }
    GUIDELINES.iter().find(|g| g.id.eq_ignore_ascii_case(key))
}
