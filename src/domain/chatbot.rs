//! Keyword chatbot
//!
//! Replies are chosen by substring checks over the lower-cased message. The
//! checks run in a fixed order and the first match wins, so a message that
//! mentions both songs and movies always gets the song reply.

pub const GREETING: &str = "Hello! I'm your assistant. I can help you with recommendations for songs, movies, places, food, and books. What would you like to explore today?";

const ITEMS_PER_REPLY: usize = 4;

const SONGS: &[&str] = &[
    "Here Comes The Sun - The Beatles",
    "Good as Hell - Lizzo",
    "Can't Stop the Feeling - Justin Timberlake",
    "Shake It Off - Taylor Swift",
    "Uptown Funk - Bruno Mars",
    "Happy - Pharrell Williams",
    "Roar - Katy Perry",
    "Confident - Demi Lovato",
];

const MOVIES: &[&str] = &[
    "The Pursuit of Happyness",
    "Inside Out",
    "Paddington",
    "Chef",
    "Julie & Julia",
    "The Grand Budapest Hotel",
    "Soul",
    "La La Land",
    "Amélie",
    "The Secret Life of Walter Mitty",
];

const PLACES: &[&str] = &[
    "Local parks for peaceful walks",
    "Art galleries and museums",
    "Cozy coffee shops with books",
    "Botanical gardens",
    "Scenic hiking trails",
    "Quiet beaches at sunset",
    "Mountain viewpoints",
    "Historic libraries",
    "Local farmers markets",
    "Meditation gardens",
];

const FOOD: &[&str] = &[
    "Dark chocolate for mood boost",
    "Green tea for relaxation",
    "Avocado toast with everything bagel seasoning",
    "Comfort soup like chicken noodle",
    "Fresh fruit smoothie bowls",
    "Homemade cookies",
    "Warm herbal tea with honey",
    "Grilled salmon with vegetables",
    "Quinoa Buddha bowls",
    "Fresh berries with yogurt",
];

const BOOKS: &[&str] = &[
    "The Alchemist by Paulo Coelho",
    "Atomic Habits by James Clear",
    "The Power of Now by Eckhart Tolle",
    "Big Magic by Elizabeth Gilbert",
    "Mindset by Carol Dweck",
    "The Happiness Project by Gretchen Rubin",
    "Daring Greatly by Brené Brown",
    "Self-Compassion by Kristin Neff",
];

const COMFORT_REPLY: &str = "I understand you're going through a tough time. Would you like some uplifting music, comforting food suggestions, or inspiring books to help lift your spirits?";
const CELEBRATE_REPLY: &str = "That's wonderful to hear! Since you're feeling good, would you like some recommendations to keep the positive vibes going? I can suggest celebratory music, fun movies, or exciting places to visit!";
const CALM_REPLY: &str = "I hear you're feeling stressed. Let me help you relax. Would you like some calming music, peaceful places to visit, or soothing food recommendations?";
const HELP_REPLY: &str = "I can help you with recommendations for:\n\n🎵 Songs to match your mood\n🎬 Movies for entertainment\n📍 Places to visit and explore\n🍽️ Food to comfort and nourish\n📚 Books for inspiration\n\nJust ask me about any of these categories!";
const FALLBACK_REPLY: &str = "I'd love to help you with recommendations! You can ask me about songs, movies, places to visit, food, or books. For example, try asking 'recommend some songs' or 'suggest a good movie'.";

/// Recommendation category a reply belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatCategory {
    Songs,
    Movies,
    Places,
    Food,
    Books,
}

impl ChatCategory {
    pub fn items(&self) -> &'static [&'static str] {
        match self {
            ChatCategory::Songs => SONGS,
            ChatCategory::Movies => MOVIES,
            ChatCategory::Places => PLACES,
            ChatCategory::Food => FOOD,
            ChatCategory::Books => BOOKS,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            ChatCategory::Songs => "🎵",
            ChatCategory::Movies => "🎬",
            ChatCategory::Places => "📍",
            ChatCategory::Food => "🍽️",
            ChatCategory::Books => "📚",
        }
    }

    fn headline(&self) -> &'static str {
        match self {
            ChatCategory::Songs => "Here are some uplifting songs I recommend:",
            ChatCategory::Movies => "Here are some feel-good movies to watch:",
            ChatCategory::Places => "Here are some peaceful places you might enjoy:",
            ChatCategory::Food => "Here are some mood-boosting food suggestions:",
            ChatCategory::Books => "Here are some inspiring books to read:",
        }
    }

    fn reply_text(&self) -> String {
        let lines: Vec<String> = self
            .items()
            .iter()
            .take(ITEMS_PER_REPLY)
            .map(|item| format!("{} {}", self.glyph(), item))
            .collect();
        format!("{}\n\n{}", self.headline(), lines.join("\n"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub text: String,
    pub category: Option<ChatCategory>,
}

enum Answer {
    Category(ChatCategory),
    Canned(&'static str),
}

/// Ordered keyword rules; earlier rules shadow later ones.
const RULES: &[(&[&str], Answer)] = &[
    (&["song", "music"], Answer::Category(ChatCategory::Songs)),
    (&["movie", "film"], Answer::Category(ChatCategory::Movies)),
    (
        &["place", "visit", "go"],
        Answer::Category(ChatCategory::Places),
    ),
    (
        &["food", "eat", "recipe"],
        Answer::Category(ChatCategory::Food),
    ),
    (&["book", "read"], Answer::Category(ChatCategory::Books)),
    (&["sad", "down", "depressed"], Answer::Canned(COMFORT_REPLY)),
    (&["happy", "good", "great"], Answer::Canned(CELEBRATE_REPLY)),
    (
        &["stressed", "anxious", "overwhelmed"],
        Answer::Canned(CALM_REPLY),
    ),
    (&["help", "what can you do"], Answer::Canned(HELP_REPLY)),
];

/// Answer a chat message.
pub fn respond(message: &str) -> ChatReply {
    let message = message.to_lowercase();

    let answer = RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| message.contains(k)))
        .map(|(_, answer)| answer);

    match answer {
        Some(Answer::Category(category)) => ChatReply {
            text: category.reply_text(),
            category: Some(*category),
        },
        Some(Answer::Canned(text)) => ChatReply {
            text: text.to_string(),
            category: None,
        },
        None => ChatReply {
            text: FALLBACK_REPLY.to_string(),
            category: None,
        },
    }
}
