//! Keyword tables of the ethics-documentation study.
//!
//! These lists are reproduced byte-for-byte from the survey protocol. Bump
//! [`KEYWORDS_VERSION`] whenever any of them changes so reports stay comparable.

pub const KEYWORDS_VERSION: &str = "2025.1";

/// Lower-case substrings identifying large technology organizations.
pub const BIG_TECH_KEYWORDS: &[&str] = &[
    "google",
    "meta",
    "facebook",
    "microsoft",
    "nvidia",
    "openai",
    "amazon",
    "apple",
    "ibm",
    "stabilityai",
    "deepmind",
    "salesforce",
    "adobe",
    "intel",
];

/// Theme name → keywords, in report definition order.
pub const THEME_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Bias & Fairness",
        &[
            "bias",
            "fairness",
            "discrimination",
            "stereotype",
            "gender",
            "race",
            "demographic",
            "representation",
            "inequality",
        ],
    ),
    (
        "Safety & Misuse",
        &[
            "safety",
            "misuse",
            "harm",
            "toxic",
            "abuse",
            "malicious",
            "attack",
            "fake",
            "hallucination",
            "risk",
            "weapon",
            "jailbreak",
        ],
    ),
    (
        "Privacy & PII",
        &[
            "privacy",
            "pii",
            "consent",
            "personal data",
            "gdpr",
            "anonym",
            "surveillance",
            "confidential",
        ],
    ),
    (
        "Environmental",
        &[
            "carbon",
            "energy",
            "environment",
            "emission",
            "co2",
            "footprint",
            "sustain",
            "power consumption",
        ],
    ),
];

/// Phrases marking an ethics cell as "nothing documented".
pub const NEGATIVE_PHRASES: &[&str] = &[
    "n/a",
    "none",
    "missing",
    "no information",
    "not available",
    "not discussed",
    "not explicitly discussed",
    "no ethical considerations",
    "not mentioned",
    "no mention",
    "not provided",
    "no specific",
    "not addressed",
    "nothing mentioned",
];

/// Spelled-out forms of the abbreviated negative phrases ("n/a").
pub const NEGATIVE_LONG_FORMS: &[&str] = &["not applicable"];

/// Last year counted as Pre-GenAI.
pub const ERA_BOUNDARY_YEAR: i32 = 2022;

/// Ethics texts shorter than this many characters count as undocumented.
pub const MIN_ETHICS_LEN: usize = 3;

pub const MULTIMODAL_KEYWORDS: &[&str] = &["text-to-image", "image-to-text", "multimodal"];

pub const NLP_KEYWORDS: &[&str] = &[
    "text",
    "translation",
    "summarization",
    "language",
    "question",
    "answering",
    "fill-mask",
    "conversation",
];

pub const VISION_KEYWORDS: &[&str] = &[
    "image",
    "video",
    "vision",
    "object",
    "detection",
    "segmentation",
    "face",
];

pub const AUDIO_KEYWORDS: &[&str] = &["audio", "speech"];

/// (semantic, code) header substrings per logical column.
pub const ETHICS_COLUMN: (&str, &str) = ("ethical", "q20");
pub const RELEASE_DATE_COLUMN: (&str, &str) = ("date", "q3b");
pub const CREATOR_COLUMN: (&str, &str) = ("creator", "q1");
pub const TASK_COLUMN: (&str, &str) = ("task", "huggingface");
