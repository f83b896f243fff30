//! Canned reply templates

use super::catalog::{
    ADMIN_WHATSAPP_URL, APP_DOWNLOAD_URL, HONORIFIC, VIDEO_TUTORIAL_URL, WEBSITE_URL,
};
use super::context::{ConversationContext, PendingTopic};
use super::message::Message;
use super::rules::Topic;

/// Personalization clause built from the stored user name
#[derive(Debug, Clone, Copy)]
pub struct Salutation<'a> {
    name: Option<&'a str>,
}

impl<'a> Salutation<'a> {
    pub fn of(context: &'a ConversationContext) -> Self {
        Self {
            name: context.user_name(),
        }
    }

    pub fn named(name: &'a str) -> Self {
        Self {
            name: Some(name).filter(|n| !n.is_empty()),
        }
    }

    pub fn anonymous() -> Self {
        Self { name: None }
    }

    fn address(&self) -> Option<String> {
        self.name.map(|name| format!("{name} {HONORIFIC}"))
    }

    /// `"<name> স্যার, <rest>"`, or `rest` alone
    fn lead(&self, rest: &str) -> String {
        match self.address() {
            Some(address) => format!("{address}, {rest}"),
            None => rest.to_string(),
        }
    }

    /// `", <name> স্যার"`, or nothing
    fn comma_suffix(&self) -> String {
        self.address()
            .map(|address| format!(", {address}"))
            .unwrap_or_default()
    }

    /// `" <name> স্যার"`, or nothing
    fn spaced_suffix(&self) -> String {
        self.address()
            .map(|address| format!(" {address}"))
            .unwrap_or_default()
    }
}

pub fn greeting() -> Message {
    Message::bot("আসসালামু আলাইকুম! আমি Ludo Top 1 এর প্রিমিয়াম AI সহায়ক। আপনাকে কিভাবে সাহায্য করতে পারি?")
}

pub fn welcome(name: &str) -> Message {
    Message::bot_with_links(
        format!(
            "ধন্যবাদ, {name} {HONORIFIC}! Ludo Top 1 এ আপনাকে স্বাগতম। আমাদের সকল ইনফরমেশন এ টু জেড এখানে পাওয়া যাবে। আপনি কি জানতে চান?"
        ),
        [WEBSITE_URL],
    )
}

pub fn thank_you(sal: &Salutation) -> Message {
    Message::bot(format!(
        "আপনাকেও অসংখ্য ধন্যবাদ{}! আপনাকে সাহায্য করতে পেরে আমি খুশি। আপনার আর কোন প্রশ্ন থাকলে অবশ্যই জিজ্ঞেস করুন।",
        sal.comma_suffix()
    ))
}

pub fn scope_refusal(sal: &Salutation) -> Message {
    Message::bot(format!(
        "দুঃখিত{}, আমি শুধু Ludo Top 1 সম্পর্কে তথ্য শেয়ার করতে পারব। Ludo Top 1 সম্পর্কে কিছু জানতে চাইলে অবশ্যই আমাকে জিজ্ঞেস করুন।",
        sal.spaced_suffix()
    ))
}

pub fn fallback(sal: &Salutation) -> Message {
    Message::bot(sal.lead(
        "Ludo Top 1 সম্পর্কে আরও তথ্য জানতে চাইলে অনুগ্রহ করে আমাকে জিজ্ঞেস করুন। আপনি কিভাবে খেলবেন, টাকা জমা দিবেন, টাকা তুলবেন, অ্যাপ ডাউনলোড করবেন, বা এডমিনের সাথে যোগাযোগ করবেন সে সম্পর্কে জানতে পারেন।",
    ))
}

/// Reply for a matched topic rule. Confirmable topics get a clarifying question.
pub fn topic_reply(topic: Topic, sal: &Salutation) -> Message {
    match topic {
        Topic::Greeting => Message::bot(format!(
            "আসসালামুআলাইকুম{}! আমি কিভাবে আপনাকে সাহায্য করতে পারি?",
            sal.comma_suffix()
        )),
        Topic::HowToPlay => Message::bot_with_links(
            sal.lead("লুডো খেলার নিয়ম জানতে আগ্রহী? আমি আপনাকে বিস্তারিত বলতে পারি।"),
            [VIDEO_TUTORIAL_URL],
        ),
        Topic::Deposit => Message::bot_with_links(
            sal.lead("টাকা জমা দেওয়ার নিয়ম সম্পর্কে জানতে চান? আমি আপনাকে বিস্তারিত প্রক্রিয়া বলতে পারি।"),
            [VIDEO_TUTORIAL_URL],
        ),
        Topic::Withdraw => Message::bot_with_links(
            sal.lead("টাকা তোলার নিয়ম খুব সহজ। আপনার বিজয়ী টাকা তুলতে অ্যাপের Withdraw অপশনে যান, আপনার পছন্দের পেমেন্ট মেথড সিলেক্ট করুন এবং আপনার একাউন্ট ডিটেইলস দিন। আমরা দ্রুত প্রসেস করব। বিস্তারিত জানতে এই ভিডিওটি দেখুন:"),
            [VIDEO_TUTORIAL_URL],
        ),
        Topic::Download => Message::bot_with_links(
            sal.lead("Ludo Top 1 অ্যাপ্লিকেশন ডাউনলোড করতে এখানে ক্লিক করুন। অসংখ্য টুর্নামেন্টে অংশগ্রহণ করুন এবং বড় পুরস্কার জিতুন! আমাদের অ্যাপটি বাংলাদেশে সবচেয়ে জনপ্রিয় লুডো প্লাটফর্ম।"),
            [APP_DOWNLOAD_URL],
        ),
        Topic::AdminContact => Message::bot_with_links(
            sal.lead("এডমিনের সাথে যোগাযোগ করতে এখানে ক্লিক করুন। আমাদের এডমিন আপনাকে সব রকম সাহায্য করবে! আমরা ২৪ ঘন্টা সাপোর্ট প্রদান করে থাকি।"),
            [ADMIN_WHATSAPP_URL],
        ),
        Topic::WebsiteInfo => Message::bot_with_links(
            sal.lead("Ludo Top 1 ওয়েবসাইটে যেতে এখানে ক্লিক করুন। আমাদের সম্পর্কে সমস্ত তথ্য এখানে পাবেন। আমাদের ওয়েবসাইটে আপনি সর্বশেষ টুর্নামেন্ট আপডেট, বিশেষ অফার এবং আরও অনেক কিছু পেতে পারেন।"),
            [WEBSITE_URL],
        ),
        Topic::Tournament => Message::bot(sal.lead(
            "আপনি কি টুর্নামেন্ট সম্পর্কে জানতে চান? আমাদের টুর্নামেন্টগুলোতে বড় পুরস্কার জেতার সুযোগ রয়েছে।",
        )),
        Topic::WhyBest => Message::bot_with_links(
            sal.lead("Ludo Top 1 বাংলাদেশে সেরা কারণঃ\n1️⃣ আমাদের রয়েছে সুরক্ষিত এবং ফেয়ার গেমপ্লে নিশ্চিতকারী সিস্টেম\n2️⃣ দ্রুত টাকা তোলার সুবিধা\n3️⃣ ২৪/৭ কাস্টমার সাপোর্ট\n4️⃣ প্রতিদিন বিভিন্ন ধরনের টুর্নামেন্ট\n5️⃣ নিয়মিত বোনাস এবং অফার\nআরও জানতে আমাদের ওয়েবসাইট ভিজিট করুন।"),
            [WEBSITE_URL],
        ),
    }
}

/// Detailed answer once the user confirms a pending topic.
/// `None` for tags without one.
pub fn confirmed_detail(topic: &PendingTopic, sal: &Salutation) -> Option<Message> {
    let message = match topic {
        PendingTopic::Tournament => Message::bot_with_links(
            sal.lead("আমাদের টুর্নামেন্টগুলো প্রতিদিন আয়োজন করা হয়। আমরা দৈনিক, সাপ্তাহিক এবং মাসিক টুর্নামেন্ট আয়োজন করি যেখানে আপনি বড় পুরস্কার জিততে পারেন। টুর্নামেন্ট সম্পর্কে বিস্তারিত জানতে আমাদের অ্যাপ ডাউনলোড করুন।"),
            [APP_DOWNLOAD_URL],
        ),
        PendingTopic::HowToPlay => Message::bot_with_links(
            sal.lead("লুডো খেলার নিয়ম খুব সহজ! প্রথমে আমাদের অ্যাপ ডাউনলোড করুন, একাউন্ট খুলুন, টাকা জমা দিন, তারপর টুর্নামেন্টে অংশগ্রহণ করুন। বিস্তারিত জানতে এই ভিডিওটি দেখুন:"),
            [VIDEO_TUTORIAL_URL],
        ),
        PendingTopic::Deposit => Message::bot_with_links(
            sal.lead("টাকা জমা দেওয়ার নিয়ম খুবই সহজ। আপনি বিকাশ/নগদ/রকেট দিয়ে টাকা জমা দিতে পারেন। অ্যাপের Pay অপশনে গিয়ে আপনার পেমেন্ট মেথড সিলেক্ট করুন, তারপর অ্যাপে দেখানো নম্বরে টাকা পাঠান। বিস্তারিত জানতে এই ভিডিওটি দেখুন:"),
            [VIDEO_TUTORIAL_URL],
        ),
        PendingTopic::Unknown(_) => return None,
    };
    Some(message)
}

/// Detailed answer for a quick option button. Unknown ids get a retry prompt.
pub fn quick_answer(option_id: &str, sal: &Salutation) -> Message {
    match option_id {
        "how-to-play" => Message::bot_with_links(
            sal.lead("লুডো খেলার নিয়ম খুব সহজ! প্রথমে আপনাকে অ্যাপ ডাউনলোড করতে হবে, একাউন্ট খুলতে হবে, টাকা জমা দিতে হবে, এবং তারপর টুর্নামেন্টে অংশ নিতে হবে। বিস্তারিত জানতে এই ভিডিওটি দেখুন:"),
            [VIDEO_TUTORIAL_URL],
        ),
        "deposit" => Message::bot_with_links(
            sal.lead("টাকা জমা দেওয়ার নিয়ম খুবই সহজ। আপনি বিকাশ/নগদ/রকেট দিয়ে টাকা জমা দিতে পারেন। অ্যাপের Pay অপশনে যান, আপনার পেমেন্ট মেথড সিলেক্ট করুন, এবং প্রদর্শিত নম্বরে টাকা পাঠান। বিস্তারিত জানতে এই ভিডিওটি দেখুন:"),
            [VIDEO_TUTORIAL_URL],
        ),
        "withdraw" => Message::bot_with_links(
            sal.lead("টাকা তোলার নিয়ম খুবই সহজ। আপনার অ্যাপের Withdraw অপশনে যান, আপনার পছন্দের পেমেন্ট মেথড সিলেক্ট করুন (বিকাশ/নগদ/রকেট), আপনার একাউন্টের নম্বর দিন, এবং আপনি কত টাকা তুলতে চান তা উল্লেখ করুন। আমরা দ্রুততম সময়ে আপনার টাকা সেন্ড করে দিব। বিস্তারিত জানতে এই ভিডিওটি দেখুন:"),
            [VIDEO_TUTORIAL_URL],
        ),
        "download" => Message::bot_with_links(
            sal.lead("Ludo Top 1 অ্যাপ্লিকেশন ডাউনলোড করতে এখানে ক্লিক করুন। আমাদের অ্যাপে সবচেয়ে বড় লুডো টুর্নামেন্ট খেলুন! সর্বশেষ আপডেট অ্যাপে পাবেন সবার আগে।"),
            [APP_DOWNLOAD_URL],
        ),
        "admin-contact" => Message::bot_with_links(
            sal.lead("এডমিনের সাথে যোগাযোগ করতে এখানে ক্লিক করুন। আমাদের এডমিন ২৪/৭ আপনাকে সাহায্য করার জন্য প্রস্তুত। যেকোনো সমস্যা বা জিজ্ঞাসা থাকলে দ্রুত যোগাযোগ করুন।"),
            [ADMIN_WHATSAPP_URL],
        ),
        "tournament" => Message::bot_with_links(
            sal.lead("আমাদের টুর্নামেন্টগুলো প্রতিদিন আয়োজন করা হয়। আমরা দৈনিক, সাপ্তাহিক এবং মাসিক টুর্নামেন্ট পরিচালনা করি। ছোট থেকে শুরু করে বড় প্রাইজপুল পর্যন্ত সব ধরনের টুর্নামেন্ট আমরা আয়োজন করি। আরও জানতে আমাদের অ্যাপ ডাউনলোড করুন।"),
            [APP_DOWNLOAD_URL],
        ),
        "why-best" => Message::bot_with_links(
            sal.lead("Ludo Top 1 বাংলাদেশে সেরা কারণঃ\n1️⃣ আমাদের রয়েছে সুরক্ষিত এবং ফেয়ার গেমপ্লে নিশ্চিতকারী অত্যাধুনিক সিস্টেম\n2️⃣ দ্রুত টাকা তোলার সুবিধা, যেকোনো পেমেন্ট মেথড সাপোর্ট করে\n3️⃣ ২৪/৭ প্রফেশনাল কাস্টমার সাপোর্ট\n4️⃣ প্রতিদিন বিভিন্ন ধরনের টুর্নামেন্ট\n5️⃣ নিয়মিত বোনাস এবং আকর্ষণীয় অফার\nআরও জানতে আমাদের ওয়েবসাইট ভিজিট করুন।"),
            [WEBSITE_URL],
        ),
        _ => Message::bot(sal.lead(
            "আমি আপনার প্রশ্ন বুঝতে পারিনি। দয়া করে আবার চেষ্টা করুন অথবা আমাদের এডমিনের সাথে যোগাযোগ করুন।",
        )),
    }
}
