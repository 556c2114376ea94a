// Static guide content
//
// Card bodies are described with a small block vocabulary. The state core
// only ever looks at card ids; blocks are interpreted by the renderer.

/// A piece of presentational content inside a card body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    /// Introductory sentence under the card header
    Lead(&'static str),
    /// Large centered headline
    Formula(&'static str),
    /// Sub-heading
    Heading(&'static str),
    /// Named item with a short description and optional example
    Labeled {
        label: &'static str,
        detail: &'static str,
        example: Option<&'static str>,
    },
    /// Side-by-side bad/good contrast
    Compare {
        bad_label: &'static str,
        bad: &'static str,
        good_label: &'static str,
        good: &'static str,
    },
    /// Steps joined by arrows (a cycle or pipeline)
    Flow(&'static [&'static str]),
    /// Numbered steps
    Steps(&'static [&'static str]),
    /// Monospace sample, optionally titled
    Code {
        title: Option<&'static str>,
        lines: &'static [&'static str],
    },
    /// Highlighted tip or exercise
    Callout {
        label: &'static str,
        text: &'static str,
    },
    /// Row of short chips
    Tags(&'static [&'static str]),
    /// `key: value` template lines
    Template(&'static [(&'static str, &'static str)]),
    /// The copy-to-clipboard row (only meaningful on cards with a template)
    CopyButton,
}

/// A collapsible content unit within a section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    /// Unique across the whole guide
    pub id: &'static str,
    pub title: &'static str,
    pub body: &'static [Block],
    /// Text placed on the clipboard by the copy action
    pub copy_template: Option<&'static str>,
}

/// Creative brief template copied by the workshop card
pub const CREATIVE_BRIEF_TEMPLATE: &str = "Task: Create a creative brief for [project type]
Context: Client: [name], Industry: [type], Budget: [range]
Examples: Style similar to [brand references]
Format: Include objectives, target audience, key messages, deliverables
Tone: Professional but inspiring";

pub const FOUNDATION_CARDS: &[Card] = &[
    Card {
        id: "framework",
        title: "The 6-Step Framework",
        body: &[
            Block::Formula("Task + Context + Examples + Persona + Format + Tone"),
            Block::Labeled {
                label: "🎯 Task",
                detail: "Clear, specific action",
                example: Some("\"Generate a social media post...\""),
            },
            Block::Labeled {
                label: "🕸 Context",
                detail: "Background information",
                example: Some("\"...for a tech startup launch...\""),
            },
            Block::Labeled {
                label: "</> Examples",
                detail: "Style references",
                example: Some("\"...following this tone: [sample]...\""),
            },
            Block::Labeled {
                label: "🧠 Persona",
                detail: "Role assignment",
                example: Some("\"You are a marketing expert...\""),
            },
            Block::Labeled {
                label: "▢ Format",
                detail: "Output structure",
                example: Some("\"...as 3 bullet points...\""),
            },
            Block::Labeled {
                label: "✨ Tone",
                detail: "Emotional style",
                example: Some("\"...with enthusiastic energy\""),
            },
        ],
        copy_template: None,
    },
    Card {
        id: "quality",
        title: "The Golden Rule",
        body: &[
            Block::Formula("Quality In = Quality Out"),
            Block::Lead(
                "The clarity and specificity of your prompt directly determines the quality of AI responses.",
            ),
            Block::Compare {
                bad_label: "❌ Vague Prompt",
                bad: "\"Write something about marketing\"",
                good_label: "✅ Specific Prompt",
                good: "\"Write a 500-word blog post about content marketing strategies for B2B SaaS companies, focusing on LinkedIn and email automation\"",
            },
        ],
        copy_template: None,
    },
    Card {
        id: "iteration",
        title: "Iterative Refinement",
        body: &[
            Block::Heading("The Refinement Cycle"),
            Block::Lead("Prompting is rarely perfect on the first try"),
            Block::Flow(&["Start Simple", "Add Context", "Test & Evaluate", "Refine & Retry"]),
            Block::Callout {
                label: "Pro Tip:",
                text: "Use iteration markers in prompts like \"V1:\", \"V2:\" to track your refinements.",
            },
        ],
        copy_template: None,
    },
];

pub const ADVANCED_CARDS: &[Card] = &[
    Card {
        id: "chain-thought",
        title: "Chain of Thought Prompting",
        body: &[
            Block::Lead("Guide AI through step-by-step reasoning for complex tasks."),
            Block::Heading("Structure:"),
            Block::Steps(&[
                "Define the problem",
                "Break into steps",
                "Solve each step",
                "Combine for answer",
            ]),
            Block::Code {
                title: Some("Example:"),
                lines: &[
                    "\"Let's solve this step by step:",
                    "1. First, identify the key variables...",
                    "2. Next, apply the relevant formula...",
                    "3. Then, calculate the intermediate result...",
                    "4. Finally, arrive at the conclusion...\"",
                ],
            },
        ],
        copy_template: None,
    },
    Card {
        id: "few-shot",
        title: "Few-Shot Learning",
        body: &[
            Block::Lead("Provide examples to establish patterns and style."),
            Block::Code {
                title: Some("Zero-Shot"),
                lines: &["\"Translate to French: 'Hello'\""],
            },
            Block::Code {
                title: Some("One-Shot"),
                lines: &["\"Example: 'Hello' → 'Bonjour'", "Translate: 'Goodbye'\""],
            },
            Block::Code {
                title: Some("Few-Shot (Best)"),
                lines: &[
                    "\"Examples:",
                    "'Hello' → 'Bonjour'",
                    "'Thank you' → 'Merci'",
                    "'Goodbye' → 'Au revoir'",
                    "Translate: 'How are you?'\"",
                ],
            },
            Block::Heading("Best For:"),
            Block::Tags(&[
                "Pattern Recognition",
                "Style Consistency",
                "Format Matching",
                "Tone Replication",
            ]),
        ],
        copy_template: None,
    },
    Card {
        id: "meta-prompting",
        title: "Meta-Prompting",
        body: &[
            Block::Lead("Use AI to help you create better prompts."),
            Block::Code {
                title: Some("Technique 1: Prompt Generator"),
                lines: &["\"Create 5 different prompts for generating creative project names for a sustainable fashion startup\""],
            },
            Block::Code {
                title: Some("Technique 2: Prompt Optimizer"),
                lines: &["\"Analyze this prompt and suggest 3 ways to make it more effective: [your prompt]\""],
            },
            Block::Callout {
                label: "💡 Pro Tip:",
                text: "Ask AI to critique your prompts from different perspectives (clarity, specificity, completeness).",
            },
        ],
        copy_template: None,
    },
];

pub const WORKSHOP_CARDS: &[Card] = &[
    Card {
        id: "creative-brief",
        title: "Creative Brief Generator",
        body: &[
            Block::Lead("Generate comprehensive creative briefs using structured prompts."),
            Block::Heading("Template:"),
            Block::Template(&[
                ("Task:", "Create a creative brief for [project type]"),
                ("Context:", "Client: [name], Industry: [type], Budget: [range]"),
                ("Examples:", "Style similar to [brand references]"),
                ("Format:", "Include objectives, target audience, key messages, deliverables"),
                ("Tone:", "Professional but inspiring"),
            ]),
            Block::CopyButton,
        ],
        copy_template: Some(CREATIVE_BRIEF_TEMPLATE),
    },
    Card {
        id: "campaign-concepts",
        title: "Campaign Concept Workshop",
        body: &[
            Block::Lead("Ideate and develop campaign concepts with systematic prompting."),
            Block::Code {
                title: Some("Brainstorming Prompt"),
                lines: &["\"Generate 10 creative campaign concepts for [product] targeting [audience]. Each concept should include: theme, tagline, and 1 visual idea. Style: [brand personality]\""],
            },
            Block::Code {
                title: Some("Refinement Prompt"),
                lines: &["\"Take concept #3 and expand it into a full campaign strategy including: 3 touchpoints, content pillars, success metrics, and timeline\""],
            },
            Block::Callout {
                label: "🎯 Exercise:",
                text: "Apply these prompts to a real project. Start broad, then narrow down to your best concept.",
            },
        ],
        copy_template: None,
    },
    Card {
        id: "brand-voice",
        title: "Brand Voice Development",
        body: &[
            Block::Lead("Create consistent brand voice with tone-specific prompting."),
            Block::Code {
                title: Some("Voice Definition"),
                lines: &["\"Analyze these 3 existing texts from [brand] and extract: 5 key voice attributes, typical sentence structure, vocabulary level, and emotional tone\""],
            },
            Block::Code {
                title: Some("Voice Application"),
                lines: &["\"Rewrite this message for [brand] using their voice: [tone attributes]. Include: casual contractions, [specific vocabulary], and maintain [emotional approach]\""],
            },
            Block::Tags(&[
                "Playful",
                "Professional",
                "Empathetic",
                "Bold",
                "Minimalist",
                "Conversational",
                "Technical",
                "Inspirational",
            ]),
        ],
        copy_template: None,
    },
];

/// Closing call-to-action banner shown under every section
pub struct Banner {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub chips: &'static [&'static str],
}

pub const CALL_TO_ACTION: Banner = Banner {
    title: "Ready to Master Prompting?",
    subtitle: "Start applying these techniques to your creative projects today",
    chips: &["Practice Daily", "Test & Iterate", "Share with Team"],
};

pub const APP_TITLE: &str = "Prompt Engineering Mastery";
pub const APP_SUBTITLE: &str = "For Creative Professionals";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::SECTIONS;
    use std::collections::HashSet;

    #[test]
    fn card_ids_are_unique_across_sections() {
        let mut seen = HashSet::new();
        for section in &SECTIONS {
            assert!(!section.cards.is_empty(), "{} has no cards", section.id);
            for card in section.cards {
                assert!(seen.insert(card.id), "duplicate card id {}", card.id);
            }
        }
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn only_creative_brief_has_a_template() {
        let with_template: Vec<_> = SECTIONS
            .iter()
            .flat_map(|s| s.cards.iter())
            .filter(|c| c.copy_template.is_some())
            .map(|c| c.id)
            .collect();
        assert_eq!(with_template, vec!["creative-brief"]);
    }

    #[test]
    fn copy_button_only_on_cards_with_template() {
        for card in SECTIONS.iter().flat_map(|s| s.cards.iter()) {
            let has_button = card.body.contains(&Block::CopyButton);
            assert_eq!(has_button, card.copy_template.is_some(), "{}", card.id);
        }
    }

    #[test]
    fn template_block_matches_copied_text() {
        let card = &WORKSHOP_CARDS[0];
        let Some(Block::Template(rows)) = card
            .body
            .iter()
            .find(|b| matches!(b, Block::Template(_)))
        else {
            panic!("creative brief has no template block");
        };
        let rendered: Vec<String> = rows.iter().map(|(k, v)| format!("{} {}", k, v)).collect();
        assert_eq!(rendered.join("\n"), CREATIVE_BRIEF_TEMPLATE);
    }
}
