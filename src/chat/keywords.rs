//! Keyword sets used for substring matching
//!
//! Every keyword is stored already lower-cased; inputs are folded with
//! [`fold`] before matching.

/// A named list of substrings; matches when any of them occurs in the input
#[derive(Debug, Clone, Copy)]
pub struct KeywordSet {
    pub name: &'static str,
    pub words: &'static [&'static str],
}

impl KeywordSet {
    pub const fn new(name: &'static str, words: &'static [&'static str]) -> Self {
        Self { name, words }
    }

    /// `folded` must already be lower-cased
    pub fn matches(&self, folded: &str) -> bool {
        self.words.iter().any(|word| folded.contains(word))
    }
}

/// Lower-case fold applied to every input before matching
pub fn fold(input: &str) -> String {
    input.to_lowercase()
}

pub const THANK_YOU: KeywordSet = KeywordSet::new(
    "thank-you",
    &["ধন্যবাদ", "থ্যাংকস", "thanks", "thank you", "শুক্রিয়া"],
);

pub const AFFIRMATIVE: KeywordSet = KeywordSet::new(
    "affirmative",
    &[
        "হ্যাঁ", "হুম", "ওকে", "চাই", "দাও", "ঠিক আছে", "yes", "ok", "okay", "sure", "হ্যা", "জি",
        "জ্বী",
    ],
);

pub const GREETING: KeywordSet =
    KeywordSet::new("greeting", &["হাই", "হ্যালো", "হেলো", "hi", "hello"]);

pub const HOW_TO_PLAY: KeywordSet = KeywordSet::new(
    "how-to-play",
    &["কিভাবে খেলব", "খেলার নিয়ম", "খেলা", "নিয়ম", "গেম"],
);

pub const DEPOSIT: KeywordSet = KeywordSet::new(
    "deposit",
    &["টাকা জমা", "ডিপোজিট", "deposit", "পেমেন্ট", "টাকা দেওয়া"],
);

pub const WITHDRAW: KeywordSet = KeywordSet::new(
    "withdraw",
    &["টাকা তোলা", "টাকা তুলব", "উইথড্র", "withdraw", "টাকা পাব", "পেমেন্ট পাব"],
);

pub const DOWNLOAD: KeywordSet = KeywordSet::new(
    "download",
    &["ডাউনলোড", "এপ্লিকেশন", "অ্যাপ", "app", "download", "ইনস্টল"],
);

pub const ADMIN_CONTACT: KeywordSet = KeywordSet::new(
    "admin-contact",
    &["এডমিন", "কন্টাক্ট", "যোগাযোগ", "admin", "contact", "হেল্প", "সাহায্য", "সাপোর্ট"],
);

pub const WEBSITE_INFO: KeywordSet = KeywordSet::new(
    "website-info",
    &["ওয়েবসাইট", "সাইট", "website", "ইনফরমেশন", "তথ্য"],
);

pub const TOURNAMENT: KeywordSet = KeywordSet::new(
    "tournament",
    &["টুর্নামেন্ট", "প্রতিযোগিতা", "tournament", "মেলা", "খেলা"],
);

pub const WHY_BEST: KeywordSet = KeywordSet::new(
    "why-best",
    &["কেন সেরা", "কেন ভাল", "কেন best", "সেরা কেন", "why best", "best"],
);

/// Social media and payment brands the assistant will not discuss
pub const OFF_TOPIC: KeywordSet = KeywordSet::new(
    "off-topic",
    &[
        "ফেসবুক", "টুইটার", "ইনস্টাগ্রাম", "বিকাশ", "রকেট", "নগদ", "facebook", "twitter",
        "instagram",
    ],
);

/// At least one of these must appear for text to count as on-topic
pub const ON_TOPIC: KeywordSet = KeywordSet::new("on-topic", &["লুড", "ludo", "গেম", "খেল"]);
