//! Writing prompts and affirmations, one of each per day

use chrono::{Datelike, NaiveDate};

pub const PROMPTS: &[&str] = &[
    "What made you smile today?",
    "What are you grateful for right now?",
    "What challenged you today and how did you handle it?",
    "What would you like to let go of?",
    "What are you looking forward to?",
    "Describe a moment when you felt peaceful today.",
    "What's one thing you learned about yourself today?",
    "What would you tell a friend who was feeling like you are now?",
    "What small victory can you celebrate today?",
    "How did you show kindness today?",
];

pub const AFFIRMATIONS: &[&str] = &[
    "You are worthy of love and kindness, especially from yourself.",
    "Your feelings are valid, and it's okay to feel whatever you're feeling right now.",
    "You have overcome challenges before, and you have the strength to do it again.",
    "Progress isn't always linear, and that's perfectly okay.",
    "You are enough, exactly as you are in this moment.",
    "Your mental health matters, and taking care of yourself is not selfish.",
    "Every small step forward is still progress worth celebrating.",
    "You deserve patience and compassion, especially from yourself.",
    "It's okay to rest. It's okay to take breaks. It's okay to not be productive today.",
    "You are not alone in this journey, even when it feels like you are.",
    "Your story isn't over yet. There are beautiful chapters still to be written.",
    "You have permission to put your wellbeing first.",
    "Healing is not a destination, it's a journey, and you're exactly where you need to be.",
    "You are brave for facing each day, especially the difficult ones.",
    "Your worth is not determined by your productivity or achievements.",
];

fn pick(items: &'static [&'static str], date: NaiveDate) -> &'static str {
    let day = date.num_days_from_ce().unsigned_abs() as usize;
    items[day % items.len()]
}

pub fn prompt_for(date: NaiveDate) -> &'static str {
    pick(PROMPTS, date)
}

pub fn affirmation_for(date: NaiveDate) -> &'static str {
    pick(AFFIRMATIONS, date)
}
