//! Product-tuned word lists shared by the analyzers.
//!
//! These are configuration data rather than derived from any corpus. All
//! phrases are stored lower-cased; the matchers are case-insensitive.

/// Urgency, sensationalism, conflict amplification, absolutism, fear framing
/// and superlatives.
pub const MANIPULATIVE_PHRASES: &[&str] = &[
    // urgency
    "breaking",
    "breaking news",
    "urgent",
    "just in",
    "developing story",
    "act now",
    "don't miss",
    "last chance",
    "before it's too late",
    "time is running out",
    // sensationalism
    "shocking",
    "stunning",
    "bombshell",
    "explosive",
    "jaw-dropping",
    "mind-blowing",
    "unbelievable",
    "incredible",
    "insane",
    "astonishing",
    "sensational",
    "earth-shattering",
    "you won't believe",
    // conflict amplification
    "slams",
    "slammed",
    "blasts",
    "blasted",
    "rips into",
    "lashes out",
    "destroys",
    "obliterates",
    "eviscerates",
    "war of words",
    "firestorm",
    "meltdown",
    "showdown",
    "fury",
    "furious",
    "outrage",
    "outraged",
    "backlash",
    // absolutism
    "everyone knows",
    "nobody is talking about",
    "the truth about",
    "what they don't want you to know",
    "undeniable",
    "undeniably",
    "absolutely",
    "totally",
    // fear framing
    "crisis",
    "chaos",
    "catastrophe",
    "catastrophic",
    "disaster",
    "devastating",
    "terrifying",
    "horrifying",
    "nightmare",
    "panic",
    "doomed",
    "alarming",
    // superlatives
    "unprecedented",
    "historic",
    "massive",
    "epic",
    "biggest ever",
    "worst ever",
    "of all time",
    "game-changer",
    "game-changing",
    "revolutionary",
    "breakthrough",
];

/// Subscribe/share/engagement-bait boilerplate.
pub const PROMOTIONAL_PHRASES: &[&str] = &[
    "subscribe",
    "subscribe now",
    "sign up",
    "sign up now",
    "click here",
    "tap here",
    "share this",
    "share this article",
    "follow us",
    "like and share",
    "join our newsletter",
    "newsletter",
    "don't forget to subscribe",
    "turn on notifications",
    "download our app",
    "get the app",
    "limited time offer",
    "exclusive offer",
    "buy now",
    "order now",
    "free trial",
    "sponsored",
    "advertisement",
    "read more",
    "learn more",
    "comment below",
    "let us know in the comments",
];

/// Upper-case words that are names, not emphasis.
pub const ACRONYMS: &[&str] = &[
    "NASA", "FBI", "CIA", "NSA", "USA", "UK", "EU", "UN", "NATO", "COVID", "CEO", "CFO", "CTO", "GDP", "IMF", "WHO",
    "NFL", "NBA", "MLB", "NHL", "MLS", "NCAA", "FIFA", "UEFA", "ESPN", "NASDAQ", "NYSE", "OPEC", "UNESCO", "UNICEF",
    "AIDS", "HIV", "LGBTQ", "USSR", "NAACP", "ASEAN", "OECD", "FEMA", "NOAA", "IPO", "FDA", "CDC", "EPA", "SEC",
    "FTC", "FCC", "IRS", "DOJ", "DHS", "NYPD", "LAPD", "BBC", "CNN", "NPR", "PBS", "GOP", "MSNBC", "AFP", "IAEA",
];

/// Navigation, sharing and account boilerplate. Used both to drop junk lines
/// from extracted text and to measure call-to-action density.
pub const BOILERPLATE_TOKENS: &[&str] = &[
    "subscribe",
    "subscribers",
    "newsletter",
    "sign up",
    "sign in",
    "log in",
    "login",
    "register",
    "advertisement",
    "advertising",
    "sponsored",
    "cookie",
    "cookies",
    "privacy policy",
    "terms of service",
    "terms of use",
    "all rights reserved",
    "copyright",
    "share",
    "tweet",
    "facebook",
    "twitter",
    "instagram",
    "linkedin",
    "whatsapp",
    "pinterest",
    "read more",
    "click here",
    "follow us",
    "trending",
    "recommended",
    "most popular",
    "skip to content",
    "back to top",
    "menu",
    "comments",
];

/// Sensational wording and its calm replacement. Multi-word entries come
/// first so they win over their single-word parts.
pub const NEUTRAL_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("war of words", "dispute"),
    ("lashes out at", "criticizes"),
    ("lashed out at", "criticized"),
    ("jaw-dropping", "notable"),
    ("slams", "criticizes"),
    ("slammed", "criticized"),
    ("slam", "criticize"),
    ("blasts", "criticizes"),
    ("blasted", "criticized"),
    ("rips into", "criticizes"),
    ("rips", "criticizes"),
    ("eviscerates", "criticizes"),
    ("shocking", "notable"),
    ("shocked", "surprised"),
    ("stunning", "notable"),
    ("stunned", "surprised"),
    ("bombshell", "significant"),
    ("explosive", "significant"),
    ("crisis", "situation"),
    ("chaos", "disruption"),
    ("chaotic", "disorderly"),
    ("catastrophic", "severe"),
    ("catastrophe", "serious event"),
    ("devastating", "serious"),
    ("devastated", "badly affected"),
    ("disaster", "serious problem"),
    ("terrifying", "concerning"),
    ("horrifying", "troubling"),
    ("nightmare", "difficult situation"),
    ("panic", "concern"),
    ("outrage", "criticism"),
    ("outraged", "critical"),
    ("furious", "angry"),
    ("fury", "anger"),
    ("firestorm", "controversy"),
    ("meltdown", "breakdown"),
    ("destroys", "defeats"),
    ("obliterates", "defeats"),
    ("skyrockets", "rises sharply"),
    ("skyrocketing", "rising sharply"),
    ("plummets", "falls sharply"),
    ("plummeting", "falling sharply"),
    ("massive", "large"),
    ("unprecedented", "unusual"),
];

/// Engagement filler that carries no information.
pub const FILLER_PHRASES: &[&str] = &[
    "you won't believe",
    "you will not believe",
    "here's what you need to know",
    "what you need to know",
    "everything you need to know",
    "here's why",
    "here is why",
    "find out",
    "what happens next",
    "read on",
    "read more",
    "click here",
    "stay tuned",
    "only time will tell",
    "it remains to be seen",
    "at the end of the day",
    "needless to say",
    "in a nutshell",
    "let that sink in",
    "and that's not all",
    "but wait",
    "the internet is",
    "social media erupts",
];

/// Line-leading labels that announce rather than inform.
pub const SENSATIONAL_PREFIXES: &[&str] = &[
    "breaking news",
    "breaking",
    "urgent",
    "just in",
    "developing story",
    "developing",
    "alert",
    "exclusive",
    "watch",
    "update",
    "live",
];

/// Abbreviations whose trailing period does not end a sentence.
pub const ABBREVIATIONS: &[&str] = &[
    "Mr.", "Mrs.", "Ms.", "Dr.", "Prof.", "Sr.", "Jr.", "St.", "Gen.", "Gov.", "Sen.", "Rep.", "Lt.", "Col.", "Sgt.",
    "Capt.", "Inc.", "Ltd.", "Corp.", "Co.", "vs.", "e.g.", "i.e.", "U.S.", "U.K.", "U.N.", "E.U.", "Jan.", "Feb.",
    "Aug.", "Sept.", "Oct.", "Nov.", "Dec.", "a.m.", "p.m.",
];

/// Whether `word` (already upper-case) is on the acronym allow-list.
pub fn is_acronym(word: &str) -> bool {
    ACRONYMS.contains(&word)
}

/// Sensational words penalized by the summarizer, which are exactly the
/// words neutralization replaces.
pub fn sensational_words() -> impl Iterator<Item = &'static str> {
    NEUTRAL_SUBSTITUTIONS.iter().map(|(word, _)| *word)
}
