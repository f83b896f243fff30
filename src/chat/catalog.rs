//! Static catalog: outbound links, quick options and follow-up prompts

use serde::Serialize;

pub const VIDEO_TUTORIAL_URL: &str = "https://youtu.be/VybjZeWLY2E?si=D-ie_Vdod8HHr2fE";
pub const APP_DOWNLOAD_URL: &str = "https://ludotop1.fun";
pub const WEBSITE_URL: &str = "https://ludotop1.github.io/Ludotop1/";
pub const ADMIN_WHATSAPP_URL: &str = "https://wa.me/8801325328613";

/// Appended to the user's name in every personalized reply
pub const HONORIFIC: &str = "স্যার";

/// Predefined shortcut rendered as a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickOption {
    pub id: &'static str,
    pub display_text: &'static str,
}

pub const QUICK_OPTIONS: [QuickOption; 7] = [
    QuickOption {
        id: "how-to-play",
        display_text: "কিভাবে খেলবো?",
    },
    QuickOption {
        id: "deposit",
        display_text: "কিভাবে টাকা জমা দিব?",
    },
    QuickOption {
        id: "withdraw",
        display_text: "কিভাবে টাকা তুলব?",
    },
    QuickOption {
        id: "download",
        display_text: "অ্যাপ্লিকেশন ডাউনলোড",
    },
    QuickOption {
        id: "admin-contact",
        display_text: "এডমিন কন্টাক্ট",
    },
    QuickOption {
        id: "tournament",
        display_text: "টুর্নামেন্ট সম্পর্কে",
    },
    QuickOption {
        id: "why-best",
        display_text: "কেন সেরা?",
    },
];

pub fn quick_option(id: &str) -> Option<&'static QuickOption> {
    QUICK_OPTIONS.iter().find(|option| option.id == id)
}

pub const FOLLOW_UP_QUESTIONS: [&str; 9] = [
    "আপনি কি লুডো গেম খেলতে আগ্রহী?",
    "আপনি কি জানতে চান কিভাবে টাকা জমা দিতে হয়?",
    "আপনি কি জানতে চান কিভাবে টাকা তুলতে হয়?",
    "আপনি কি এডমিনের সাথে যোগাযোগ করতে চান?",
    "আপনি কি অ্যাপ ডাউনলোড করতে চান?",
    "আপনার কি কোন প্রশ্ন আছে Ludo Top 1 সম্পর্কে?",
    "আপনি কি টুর্নামেন্ট সম্পর্কে জানতে চান?",
    "আপনি কি জানেন আমাদের লুডো টুর্নামেন্টে কিভাবে অংশগ্রহণ করতে হয়?",
    "আপনি কি জানতে চান Ludo Top 1 কেন বাংলাদেশের সেরা লুডো অ্যাপ?",
];
